//! Changelog formatters

mod markdown;

pub use markdown::{commit_url, MarkdownFormatter};

use crate::taxonomy::Taxonomy;
use crate::types::{GroupedCommits, RenderOptions};

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render grouped commits into a changelog fragment
    fn format(
        &self,
        grouped: &GroupedCommits,
        taxonomy: &Taxonomy,
        options: &RenderOptions,
    ) -> String;
}
