//! Changelog types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A commit record ready for classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Version-control object identifier
    pub hash: String,
    /// Single-line commit subject
    pub subject: String,
    /// Full commit body; may carry `BREAKING CHANGE:` and `Closes #`
    /// annotations
    #[serde(default)]
    pub body: String,
    /// Commit type code (feat, fix, etc.)
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Grouping category; empty means ungrouped
    #[serde(default)]
    pub category: String,
}

impl CommitRecord {
    /// Create a new commit record
    pub fn new(
        hash: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        commit_type: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            subject: subject.into(),
            body: body.into(),
            commit_type: commit_type.into(),
            category: category.into(),
        }
    }
}

/// Release scale selecting the heading depth of the rendered fragment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpLevel {
    /// Major release, `##` heading
    Major,
    /// Minor release, `###` heading
    Minor,
    /// Patch release, `####` heading
    #[default]
    Patch,
}

impl BumpLevel {
    /// Markdown heading marker for this level
    pub fn heading_marker(&self) -> &'static str {
        match self {
            Self::Major => "##",
            Self::Minor => "###",
            Self::Patch => "####",
        }
    }
}

/// Options controlling changelog rendering
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Version label for the heading; the heading carries only the date when
    /// absent
    pub version: Option<String>,
    /// Release scale
    pub bump: BumpLevel,
    /// Repository base URL used for commit and pull-request links
    pub repo_url: Option<String>,
}

impl RenderOptions {
    /// Create options with defaults (patch heading, no version, no links)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the version label
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the release scale
    pub fn with_bump(mut self, bump: BumpLevel) -> Self {
        self.bump = bump;
        self
    }

    /// Set the repository base URL
    pub fn with_repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }
}

/// Commits sharing one category inside a type bucket
#[derive(Debug, Clone, Default)]
pub struct CategoryGroup {
    /// Category name; empty for the unnamed group
    pub name: String,
    /// Commits in arrival order
    pub commits: Vec<CommitRecord>,
}

/// Per-type container keeping categories in first-seen order
#[derive(Debug, Clone, Default)]
pub struct TypeBucket {
    categories: Vec<CategoryGroup>,
}

impl TypeBucket {
    /// Append a commit to its category group, creating the group on first use
    pub fn push(&mut self, category: &str, commit: CommitRecord) {
        match self.categories.iter_mut().find(|g| g.name == category) {
            Some(group) => group.commits.push(commit),
            None => self.categories.push(CategoryGroup {
                name: category.to_string(),
                commits: vec![commit],
            }),
        }
    }

    /// Categories in first-seen order
    pub fn categories(&self) -> &[CategoryGroup] {
        &self.categories
    }

    /// Number of commits across all categories
    pub fn commit_count(&self) -> usize {
        self.categories.iter().map(|g| g.commits.len()).sum()
    }
}

/// Commits grouped by (type, category).
///
/// Type codes iterate in lexicographic order, categories keep first-seen
/// order, commits keep arrival order. The ordering is part of the contract,
/// not an accident of the backing containers.
#[derive(Debug, Clone, Default)]
pub struct GroupedCommits {
    buckets: BTreeMap<String, TypeBucket>,
}

impl GroupedCommits {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a commit under (type, category)
    pub fn insert(&mut self, commit_type: &str, category: &str, commit: CommitRecord) {
        self.buckets
            .entry(commit_type.to_string())
            .or_default()
            .push(category, commit);
    }

    /// Iterate type buckets in lexicographic type-code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeBucket)> {
        self.buckets.iter().map(|(code, bucket)| (code.as_str(), bucket))
    }

    /// Total number of commits across all buckets
    pub fn commit_count(&self) -> usize {
        self.buckets.values().map(TypeBucket::commit_count).sum()
    }

    /// Check whether any commit was grouped
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(commit_type: &str, category: &str, subject: &str) -> CommitRecord {
        CommitRecord::new("abc1234567890", subject, "", commit_type, category)
    }

    #[test]
    fn test_commit_record_deserialize_wire_shape() {
        let json = r#"{"hash":"abc","subject":"s","type":"feat"}"#;
        let record: CommitRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.commit_type, "feat");
        assert_eq!(record.category, "");
        assert_eq!(record.body, "");
    }

    #[test]
    fn test_bump_level_markers() {
        assert_eq!(BumpLevel::Major.heading_marker(), "##");
        assert_eq!(BumpLevel::Minor.heading_marker(), "###");
        assert_eq!(BumpLevel::Patch.heading_marker(), "####");
        assert_eq!(BumpLevel::default(), BumpLevel::Patch);
    }

    #[test]
    fn test_bucket_keeps_first_seen_category_order() {
        let mut bucket = TypeBucket::default();
        bucket.push("ui", commit("feat", "ui", "a"));
        bucket.push("api", commit("feat", "api", "b"));
        bucket.push("ui", commit("feat", "ui", "c"));

        let names: Vec<&str> = bucket.categories().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["ui", "api"]);
        assert_eq!(bucket.categories()[0].commits.len(), 2);
        assert_eq!(bucket.commit_count(), 3);
    }

    #[test]
    fn test_grouped_commits_iterate_sorted_by_type() {
        let mut grouped = GroupedCommits::new();
        grouped.insert("fix", "", commit("fix", "", "a"));
        grouped.insert("chore", "", commit("chore", "", "b"));
        grouped.insert("feat", "", commit("feat", "", "c"));

        let codes: Vec<&str> = grouped.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["chore", "feat", "fix"]);
        assert_eq!(grouped.commit_count(), 3);
    }

    #[test]
    fn test_empty_category_is_a_valid_key() {
        let mut grouped = GroupedCommits::new();
        grouped.insert("fix", "", commit("fix", "", "a"));
        grouped.insert("fix", "", commit("fix", "", "b"));

        let (_, bucket) = grouped.iter().next().unwrap();
        assert_eq!(bucket.categories().len(), 1);
        assert_eq!(bucket.categories()[0].name, "");
        assert_eq!(bucket.categories()[0].commits.len(), 2);
    }
}
