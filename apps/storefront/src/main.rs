//! # Atelier Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Atelier Storefront                               │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Front-end (views)                           │  │
//! │  │  • Product listing      • Cart / wishlist overlays               │  │
//! │  │  • Product detail       • Checkout & payment                     │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 │ JSON lines (stdin / stdout)           │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust host (this crate)                        │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► runtime, exit code                                │  │
//! │  │  lib.rs ─────► logging, config, context, IPC loop                │  │
//! │  │  commands/ ──► add_to_cart, toggle_wishlist, process_payment     │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#[tokio::main]
async fn main() {
    if let Err(e) = storefront::run().await {
        tracing::error!(error = %e, "Storefront exited with error");
        std::process::exit(1);
    }
}
