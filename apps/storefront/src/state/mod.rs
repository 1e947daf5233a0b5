//! # State Module
//!
//! Session state for the storefront host.
//!
//! Each command takes only the pieces it needs, so the cart commands never
//! see configuration and the catalog commands never lock the store.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      AppContext                                 │   │
//! │  │  AppContext::bootstrap(config)                                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌───────────────┬────────┴───────┬──────────────────┐              │
//! │     ▼               ▼                ▼                  ▼              │
//! │  ┌─────────┐  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐     │
//! │  │ Catalog │  │  StoreState  │  │ PaymentState │  │ Storefront   │     │
//! │  │         │  │              │  │              │  │ Config       │     │
//! │  │ products│  │  Arc<Mutex<  │  │ Mutex<Option │  │ shipping     │     │
//! │  │         │  │   CartStore  │  │  <Handle>>   │  │ tax, delay   │     │
//! │  │         │  │  >>          │  │              │  │              │     │
//! │  └─────────┘  └──────────────┘  └──────────────┘  └──────────────┘     │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Catalog, config: read-only after startup                            │
//! │  • StoreState: shared with the payment task, one dispatch per lock     │
//! │  • PaymentState: async mutex, held across a cancel's final wait        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod context;
mod payment;
mod store;

pub use config::{ConfigError, ConfigResult, StorefrontConfig, CONFIG_PATH_ENV};
pub use context::AppContext;
pub use payment::PaymentState;
pub use store::StoreState;
