//! # Config Commands
//!
//! Commands for retrieving storefront configuration.

use tracing::debug;

use crate::state::StorefrontConfig;

/// Gets the current storefront configuration.
///
/// ## When Used
/// - App startup (store name in the header)
/// - Currency formatting on the client
///
/// ## Returns
/// Complete configuration (read-only)
pub fn get_config(config: &StorefrontConfig) -> StorefrontConfig {
    debug!("get_config command");
    config.clone()
}
