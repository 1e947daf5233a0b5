//! # Atelier Storefront Library
//!
//! Session host for the Atelier storefront: loads configuration, builds the
//! session context and serves front-end commands over JSON lines.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── StorefrontConfig (file + env)
//! │   ├── store.rs    ◄─── Shared cart/wishlist store
//! │   ├── payment.rs  ◄─── Pending payment slot
//! │   └── context.rs  ◄─── AppContext (what commands can reach)
//! ├── commands/       ◄─── One function per front-end command
//! ├── payment.rs      ◄─── Cancellable payment simulator
//! ├── ipc.rs          ◄─── JSON-lines request loop
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod ipc;
pub mod payment;
pub mod state;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{AppContext, StorefrontConfig};

/// Runs the storefront session until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO, debug for storefront crates; RUST_LOG overrides    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → storefront.toml → ATELIER_* env → validate             │
/// │                                                                         │
/// │  3. Build Context ────────────────────────────────────────────────────► │
/// │     • Built-in catalog                                                  │
/// │     • One empty cart/wishlist store for the session                     │
/// │                                                                         │
/// │  4. Serve ────────────────────────────────────────────────────────────► │
/// │     • One JSON request per stdin line, one response per stdout line     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = StorefrontConfig::load(None)?;
    info!(
        store = %config.store.name,
        shipping_cents = config.checkout.shipping_cents,
        tax_rate_bps = config.checkout.tax_rate_bps,
        "Starting Atelier storefront"
    );

    let ctx = AppContext::bootstrap(config);
    info!(products = ctx.catalog().len(), "Session ready");

    ipc::serve(&ctx, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for the host only
/// - Default: INFO, DEBUG for storefront crates
///
/// Logs go to stderr; stdout carries IPC responses only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,atelier_core=debug,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
