//! # Commands Module
//!
//! All commands exposed to the storefront front-end.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── catalog.rs     ◄─── Listing, showcase, product detail
//! ├── cart.rs        ◄─── Cart manipulation, cart overlay
//! ├── wishlist.rs    ◄─── Wishlist manipulation, wishlist overlay
//! ├── navigation.rs  ◄─── Header badges, close overlays
//! ├── checkout.rs    ◄─── Summary, form submission, payment
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front-end                                                              │
//! │  ─────────                                                              │
//! │  {"command": "add_to_cart", "productId": "wool-coat", "size": "L"}      │
//! │         │                                                               │
//! │         │ (one JSON line on stdin)                                      │
//! │         ▼                                                               │
//! │  ipc::dispatch                                                          │
//! │  ─────────────                                                          │
//! │  Request::AddToCart { product_id, size }                                │
//! │      => cart::add_to_cart(ctx.store()?, ctx.catalog(), ...)             │
//! │                       ▲                  ▲                              │
//! │                       │                  └── only the state it needs    │
//! │                       └── STORE_NOT_INITIALIZED if none installed       │
//! │         │                                                               │
//! │         │ (one JSON line on stdout)                                     │
//! │         ▼                                                               │
//! │  {"ok": {"items": [...], "totals": {...}, ...}}                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod navigation;
pub mod wishlist;
