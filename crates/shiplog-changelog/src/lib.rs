//! Shiplog Changelog - changelog fragments from classified commits
//!
//! This crate classifies already-parsed commit records against a remotely
//! sourced type taxonomy and renders a nested, ordered markdown fragment.

pub mod annotations;
pub mod formatter;
pub mod generator;
pub mod parser;
pub mod taxonomy;
pub mod types;

pub use annotations::BodyAnnotations;
pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use parser::DelimitedParser;
pub use taxonomy::{Taxonomy, TaxonomyClient, TaxonomyError, FALLBACK_TYPE};
pub use types::{BumpLevel, CommitRecord, GroupedCommits, RenderOptions};
