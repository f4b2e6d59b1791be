//! Commit type taxonomy
//!
//! The taxonomy maps commit type codes to display labels. It is fetched from
//! a remote semicolon-delimited feed once per invocation, resolved to
//! completion, and passed into the classification and rendering stages as an
//! immutable value.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use shiplog_core::config::Config;

use crate::parser::DelimitedParser;

/// Type code substituted for commits whose declared type is not in the
/// taxonomy
pub const FALLBACK_TYPE: &str = "other";

/// Field delimiter used by the taxonomy feed
pub const TAXONOMY_DELIMITER: char = ';';

/// Taxonomy-related errors
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// Endpoint answered with a non-success status
    #[error("taxonomy endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    /// Request could not be completed
    #[error("failed to fetch taxonomy: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Mapping from commit type code to display label
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    labels: HashMap<String, String>,
}

impl Taxonomy {
    /// Create an empty taxonomy
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a taxonomy from parsed feed rows.
    ///
    /// The first column is the type code, the second the display label. Rows
    /// with an empty first column are skipped; a missing second column yields
    /// an empty label.
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        let mut labels = HashMap::new();
        for row in rows {
            let Some(code) = row.first().filter(|code| !code.is_empty()) else {
                continue;
            };
            let label = row.get(1).cloned().unwrap_or_default();
            labels.insert(code.clone(), label);
        }
        Self { labels }
    }

    /// Parse a raw semicolon-delimited feed into a taxonomy
    pub fn from_delimited_text(text: &str) -> Self {
        let rows = DelimitedParser::with_delimiter(TAXONOMY_DELIMITER).parse(text);
        let taxonomy = Self::from_rows(&rows);
        debug!(types = taxonomy.len(), "taxonomy parsed");
        taxonomy
    }

    /// Look up the label for a type code
    pub fn get(&self, code: &str) -> Option<&str> {
        self.labels.get(code).map(String::as_str)
    }

    /// Check whether a type code is part of the taxonomy
    pub fn contains(&self, code: &str) -> bool {
        self.labels.contains_key(code)
    }

    /// Display label for a type code, falling back to the code itself for
    /// codes missing from the taxonomy
    pub fn label_for<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code).unwrap_or(code)
    }

    /// Number of known type codes
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check whether the taxonomy holds no entries
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// HTTP client fetching the remote taxonomy feed
#[derive(Debug, Clone, Default)]
pub struct TaxonomyClient {
    client: reqwest::Client,
}

impl TaxonomyClient {
    /// Create a new client
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch and parse the taxonomy feed.
    ///
    /// Performs a single GET with no retry and no caching. The returned
    /// taxonomy is complete; classification can rely on every lookup.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Taxonomy, TaxonomyError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TaxonomyError::Status(status));
        }

        let body = response.text().await?;
        let taxonomy = Taxonomy::from_delimited_text(&body);
        info!(url, types = taxonomy.len(), "taxonomy fetched");
        Ok(taxonomy)
    }

    /// Fetch the taxonomy from the endpoint named in the configuration
    pub async fn fetch_configured(&self, config: &Config) -> Result<Taxonomy, TaxonomyError> {
        self.fetch(&config.taxonomy.types_url).await
    }

    /// Fetch the taxonomy, degrading to the empty taxonomy when the feed is
    /// unavailable. Every commit then classifies as the fallback type and
    /// every label falls back to its code.
    pub async fn fetch_or_empty(&self, url: &str) -> Taxonomy {
        match self.fetch(url).await {
            Ok(taxonomy) => taxonomy,
            Err(err) => {
                warn!(url, error = %err, "taxonomy unavailable, using empty taxonomy");
                Taxonomy::new()
            }
        }
    }
}
