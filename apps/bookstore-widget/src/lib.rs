//! # Bookstore Widget Library
//!
//! The bridge between the storefront page and `bookstore-core`: it renders the
//! catalog and cart into view models, wires page actions to cart and discount
//! operations, and ships a terminal shell that drives the same commands.
//!
//! ## Module Organization
//! ```text
//! bookstore_widget/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── storefront.rs   ◄─── Session wiring (catalog, cart, discount, view)
//! ├── render.rs       ◄─── View models and the cart observer
//! ├── shell.rs        ◄─── Line-oriented front end
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart holder
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── catalog.rs  ◄─── Product grid
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── discount.rs ◄─── Discount toggle
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod shell;
pub mod state;
pub mod storefront;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::ConfigState;
use storefront::Storefront;

/// Runs the widget shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Widget Startup                                    │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • BOOKSTORE_* environment variables over defaults                   │
/// │                                                                         │
/// │  3. Build Session ────────────────────────────────────────────────────► │
/// │     • Default catalog, empty cart, renderer subscribed                  │
/// │                                                                         │
/// │  4. Serve Commands ───────────────────────────────────────────────────► │
/// │     • One JSON line per input line until EOF or `quit`                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> io::Result<()> {
    init_tracing();

    info!("Starting bookstore widget");

    let config = ConfigState::from_env();
    let store = Storefront::with_default_catalog(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run_shell(&store, stdin.lock(), stdout.lock())?;

    info!("Bookstore widget stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bookstore_core=trace` - Trace the core crate only
/// - Default: INFO, DEBUG for the widget's own crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bookstore_core=debug,bookstore_widget=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
