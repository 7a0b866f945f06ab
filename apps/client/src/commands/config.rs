//! # Config Commands
//!
//! Commands for retrieving client configuration.

use tracing::debug;

use crate::state::ClientConfig;

/// Gets the current client configuration.
///
/// ## When Used
/// - App startup (catalog URL, page size)
/// - Currency formatting on every price label
///
/// ## Returns
/// Complete configuration (read-only)
pub fn get_config(config: &ClientConfig) -> ClientConfig {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_serializes() {
        let config = get_config(&ClientConfig::default());
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["display"]["currency_symbol"], "$");
        assert_eq!(json["catalog"]["page_size"], 10);
    }
}
