//! Configuration types

use serde::{Deserialize, Serialize};

/// Top-level shiplog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Commit type taxonomy configuration
    pub taxonomy: TaxonomyConfig,
}

/// Taxonomy feed configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// HTTP(S) endpoint returning the `<type-code>;<label>` table, one row
    /// per recognized commit type
    #[serde(alias = "typesUrl")]
    pub types_url: String,
}
