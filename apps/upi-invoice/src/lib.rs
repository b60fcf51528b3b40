//! # UPI Invoice Library
//!
//! Session layer for the UPI invoice builder: state, commands and the
//! command line front end.
//!
//! ## Module Organization
//! ```text
//! upi_invoice/
//! ├── lib.rs          ◄─── You are here (logging, startup, run)
//! ├── cli.rs          ◄─── Flags and terminal output
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (one per session)
//! │   ├── config.rs   ◄─── Payee id, export directory
//! │   ├── invoice.rs  ◄─── Live draft + derived view
//! │   └── qr.rs       ◄─── Draft / Generated preview panel
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── invoice.rs  ◄─── Item edits, payer, note
//! │   ├── qr.rs       ◄─── Generate, download, share
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use upi_core::{LineField, PayeeId};

use cli::{Cli, RunReport};
use commands::{invoice as invoice_cmd, qr as qr_cmd};
use state::{AppConfig, AppState};

/// Runs one invoice session from command line flags.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults, then UPI_INVOICE_* variables, then flags                │
/// │                                                                         │
/// │  3. Fill the Form ────────────────────────────────────────────────────► │
/// │     • one row per --item, then payer and note                           │
/// │                                                                         │
/// │  4. Generate + Download (+ Share) ────────────────────────────────────► │
/// │     • unpayable form: report printed, then UNPAYABLE error              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    info!(payee = %config.payee_id, output_dir = %config.output_dir.display(), "Starting UPI invoice session");

    // Single-threaded session; encoding still runs on the blocking pool
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(run_session(cli, AppState::new(config)))
}

/// Applies flag overrides on top of the environment configuration.
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::from_env().context("invalid UPI_INVOICE_PAYEE_ID")?;

    if let Some(payee) = &cli.payee {
        config.payee_id = PayeeId::new(payee.as_str()).context("invalid --payee")?;
    }
    if let Some(dir) = &cli.out {
        config.output_dir = dir.clone();
    }

    Ok(config)
}

async fn run_session(cli: Cli, mut state: AppState) -> anyhow::Result<()> {
    fill_form(&cli, &mut state);

    // Leaves the panel in Draft when the form is unpayable
    let generated = qr_cmd::generate_qr(&state.config, &state.invoice, &mut state.qr).await;

    let mut report = RunReport {
        invoice: invoice_cmd::get_invoice(&state.config, &state.invoice),
        qr: qr_cmd::get_qr(&state.config, &state.invoice, &state.qr),
        saved_to: None,
        share: None,
    };

    if generated.is_ok() {
        report.saved_to = qr_cmd::download_qr(&state.config, &state.qr, None).await?;
        if cli.share {
            report.share = qr_cmd::share_qr(&state).await;
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }

    generated.map(|_| ()).map_err(Into::into)
}

/// Enters `--item` rows in order: the first fills the starting blank row,
/// each later one is appended.
fn fill_form(cli: &Cli, state: &mut AppState) {
    let (config, invoice) = (&state.config, &mut state.invoice);

    for (index, item) in cli.items.iter().enumerate() {
        if index > 0 {
            invoice_cmd::add_item(config, invoice);
        }
        invoice_cmd::update_item(config, invoice, index, LineField::Name, &item.name);
        invoice_cmd::update_item(config, invoice, index, LineField::Quantity, &item.quantity);
        invoice_cmd::update_item(config, invoice, index, LineField::UnitPrice, &item.unit_price);
    }

    if let Some(payer) = &cli.payer {
        invoice_cmd::set_payer_name(config, invoice, payer);
    }
    if let Some(note) = &cli.note {
        invoice_cmd::set_note(config, invoice, note);
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=upi_qr=trace` - Trace the QR crate only
/// - Default: INFO, DEBUG for this workspace's crates
///
/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,upi_invoice=debug,upi_qr=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
