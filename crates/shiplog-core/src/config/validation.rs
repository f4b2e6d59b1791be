//! Configuration validation

use tracing::debug;
use url::Url;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_taxonomy(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_taxonomy(config: &Config) -> Result<()> {
    let types_url = &config.taxonomy.types_url;
    if types_url.is_empty() {
        return Err(ConfigError::MissingField("taxonomy.types_url".to_string()).into());
    }

    let parsed = Url::parse(types_url).map_err(|e| ConfigError::InvalidValue {
        field: "taxonomy.types_url".to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: "taxonomy.types_url".to_string(),
            message: format!("unsupported scheme: {}", parsed.scheme()),
        }
        .into());
    }

    Ok(())
}
