//! Changelog generation pipeline

use tracing::{debug, info, instrument};

use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::taxonomy::{Taxonomy, FALLBACK_TYPE};
use crate::types::{CommitRecord, GroupedCommits, RenderOptions};

/// Classifies commits against a resolved taxonomy and renders the changelog
/// fragment.
///
/// The taxonomy is resolved before construction; the generator itself
/// performs no I/O.
pub struct ChangelogGenerator {
    taxonomy: Taxonomy,
    formatter: Box<dyn ChangelogFormatter>,
}

impl ChangelogGenerator {
    /// Create a generator with the default markdown formatter
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy,
            formatter: Box::new(MarkdownFormatter::new()),
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// The taxonomy this generator classifies against
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Group commits into (type, category) buckets.
    ///
    /// A commit whose type is not in the taxonomy goes under the fallback
    /// type. Nothing is filtered; every input commit lands in exactly one
    /// bucket.
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn classify(&self, commits: &[CommitRecord]) -> GroupedCommits {
        let mut grouped = GroupedCommits::new();

        for commit in commits {
            let effective_type = if self.taxonomy.contains(&commit.commit_type) {
                commit.commit_type.as_str()
            } else {
                FALLBACK_TYPE
            };
            grouped.insert(effective_type, &commit.category, commit.clone());
        }

        debug!(commits = grouped.commit_count(), "commits classified");
        grouped
    }

    /// Classify and render in one step
    #[instrument(skip(self, commits, options), fields(commit_count = commits.len()))]
    pub fn generate(&self, commits: &[CommitRecord], options: &RenderOptions) -> String {
        info!(commit_count = commits.len(), "generating changelog fragment");
        let grouped = self.classify(commits);
        let output = self.formatter.format(&grouped, &self.taxonomy, options);
        debug!(output_len = output.len(), "changelog formatted");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> Taxonomy {
        Taxonomy::from_delimited_text("feat;Features\nfix;Bug Fixes\nother;Other Changes\n")
    }

    fn commit(commit_type: &str, category: &str, subject: &str) -> CommitRecord {
        CommitRecord::new("abc1234567890", subject, "", commit_type, category)
    }

    #[test]
    fn test_classify_preserves_commit_count() {
        let generator = ChangelogGenerator::new(taxonomy());
        let commits = vec![
            commit("feat", "ui", "a"),
            commit("fix", "", "b"),
            commit("bogus", "misc", "c"),
            commit("feat", "api", "d"),
            commit("feat", "ui", "e"),
        ];

        let grouped = generator.classify(&commits);
        assert_eq!(grouped.commit_count(), commits.len());
    }

    #[test]
    fn test_classify_substitutes_fallback_type() {
        let generator = ChangelogGenerator::new(taxonomy());
        let grouped = generator.classify(&[commit("bogus", "", "a")]);

        let codes: Vec<&str> = grouped.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec![FALLBACK_TYPE]);
    }

    #[test]
    fn test_classify_with_empty_taxonomy_groups_everything_as_fallback() {
        let generator = ChangelogGenerator::new(Taxonomy::new());
        let grouped = generator.classify(&[
            commit("feat", "", "a"),
            commit("fix", "", "b"),
        ]);

        let codes: Vec<&str> = grouped.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec![FALLBACK_TYPE]);
        assert_eq!(grouped.commit_count(), 2);
    }

    #[test]
    fn test_classify_keeps_category_first_seen_order() {
        let generator = ChangelogGenerator::new(taxonomy());
        let grouped = generator.classify(&[
            commit("feat", "zeta", "a"),
            commit("feat", "alpha", "b"),
            commit("feat", "zeta", "c"),
        ]);

        let (_, bucket) = grouped.iter().next().unwrap();
        let names: Vec<&str> = bucket.categories().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_classify_keeps_arrival_order_within_category() {
        let generator = ChangelogGenerator::new(taxonomy());
        let grouped = generator.classify(&[
            commit("fix", "core", "first"),
            commit("fix", "core", "second"),
            commit("fix", "core", "third"),
        ]);

        let (_, bucket) = grouped.iter().next().unwrap();
        let subjects: Vec<&str> = bucket.categories()[0]
            .commits
            .iter()
            .map(|c| c.subject.as_str())
            .collect();
        assert_eq!(subjects, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_generate_renders_sections() {
        let generator = ChangelogGenerator::new(taxonomy());
        let output = generator.generate(
            &[commit("feat", "", "add feature"), commit("fix", "", "fix bug")],
            &RenderOptions::new(),
        );

        assert!(output.contains("##### Features"));
        assert!(output.contains("##### Bug Fixes"));
        assert!(output.contains("add feature"));
    }
}
