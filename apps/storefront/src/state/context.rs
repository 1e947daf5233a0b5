//! # App Context
//!
//! Everything a command can reach: configuration, the catalog, the session
//! store and the payment slot.
//!
//! The store is injected rather than created on demand. A context built
//! without one answers every store-backed command with
//! `STORE_NOT_INITIALIZED`, so a missing store fails loudly instead of
//! silently operating on a fresh, empty cart.

use atelier_core::Catalog;

use crate::error::ApiError;
use crate::state::{PaymentState, StoreState, StorefrontConfig};

#[derive(Debug)]
pub struct AppContext {
    config: StorefrontConfig,
    catalog: Catalog,
    store: Option<StoreState>,
    payments: PaymentState,
}

impl AppContext {
    /// Context with no store installed.
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        AppContext {
            config,
            catalog,
            store: None,
            payments: PaymentState::new(),
        }
    }

    /// Installs the session store.
    pub fn with_store(mut self, store: StoreState) -> Self {
        self.store = Some(store);
        self
    }

    /// The normal session: built-in catalog and a fresh store.
    pub fn bootstrap(config: StorefrontConfig) -> Self {
        Self::new(config, Catalog::default()).with_store(StoreState::new())
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The installed store, or `STORE_NOT_INITIALIZED`.
    pub fn store(&self) -> Result<&StoreState, ApiError> {
        self.store.as_ref().ok_or_else(ApiError::store_not_initialized)
    }

    pub fn payments(&self) -> &PaymentState {
        &self.payments
    }
}
