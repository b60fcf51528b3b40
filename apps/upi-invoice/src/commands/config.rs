//! # Config Commands
//!
//! Retrieval of the startup configuration.

use tracing::debug;

use crate::state::AppConfig;

/// Gets the current application configuration.
///
/// ## Returns
/// Complete configuration (read-only after startup)
pub fn get_config(config: &AppConfig) -> AppConfig {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use upi_core::PayeeId;

    #[test]
    fn test_get_config_returns_startup_values() {
        let mut config = AppConfig::new(PayeeId::new("shop@upi").unwrap());
        config.output_dir = "/tmp/qr".into();

        let returned = get_config(&config);
        assert_eq!(returned.payee_id, config.payee_id);
        assert_eq!(returned.output_dir, config.output_dir);
    }
}
