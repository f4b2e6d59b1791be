//! Markdown changelog formatter

use std::sync::LazyLock;

use chrono::Utc;
use regex::{Captures, Regex};
use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::annotations::BodyAnnotations;
use crate::taxonomy::Taxonomy;
use crate::types::{CommitRecord, GroupedCommits, RenderOptions};

/// Matches pull-request references in commit subjects
static PR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\d+").expect("Invalid regex"));

/// Build the provider commit URL for a hash.
///
/// Bitbucket uses a `commits` path segment where other providers use
/// `commit`; GitLab clone URLs may keep a `.git` suffix that has to be
/// stripped first.
pub fn commit_url(base_url: &str, hash: &str) -> String {
    let segment = if base_url.contains("bitbucket") {
        "commits"
    } else {
        "commit"
    };

    let base = if base_url.contains("gitlab") {
        base_url.strip_suffix(".git").unwrap_or(base_url)
    } else {
        base_url
    };

    format!("{}/{}/{}", base, segment, hash)
}

/// Markdown changelog formatter
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    fn heading(options: &RenderOptions, date: &str) -> String {
        let marker = options.bump.heading_marker();
        match &options.version {
            Some(version) => format!("{} {} ({})", marker, version, date),
            None => format!("{} {}", marker, date),
        }
    }

    fn commit_line(prefix: &str, commit: &CommitRecord, options: &RenderOptions) -> String {
        let shorthash: String = commit.hash.chars().take(8).collect();
        let mut subject = commit.subject.clone();
        let mut hash_text = shorthash;

        if let Some(repo_url) = &options.repo_url {
            hash_text = format!("[{}]({})", hash_text, commit_url(repo_url, &commit.hash));
            subject = PR_REGEX
                .replace_all(&subject, |caps: &Captures| {
                    let pr = &caps[0];
                    format!("[{}]({}/pull/{})", pr, repo_url, &pr[1..])
                })
                .into_owned();
        }

        let annotations = BodyAnnotations::extract(&commit.body);
        let closes = annotations
            .closes_issue
            .map(|n| format!("({})", n))
            .unwrap_or_default();
        let breaking = annotations
            .breaking_change
            .map(|text| format!("\n\t* breaking changes: {}", text))
            .unwrap_or_default();

        format!("{} {} ({}) {}{}", prefix, subject, hash_text, closes, breaking)
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(
        skip(self, grouped, taxonomy, options),
        fields(commit_count = grouped.commit_count())
    )]
    fn format(
        &self,
        grouped: &GroupedCommits,
        taxonomy: &Taxonomy,
        options: &RenderOptions,
    ) -> String {
        let date = Utc::now().format("%Y-%m-%d").to_string();
        let mut lines = vec![Self::heading(options, &date), String::new()];

        for (code, bucket) in grouped.iter() {
            lines.push(format!("##### {}", taxonomy.label_for(code)));
            lines.push(String::new());

            for group in bucket.categories() {
                let category_heading = if group.name.is_empty() {
                    "*".to_string()
                } else {
                    format!("* **{}:**", group.name)
                };

                // A named category with several commits becomes a parent
                // bullet with indented children; everything else renders as
                // top-level bullets.
                let nested = group.commits.len() > 1 && !group.name.is_empty();
                let prefix = if nested {
                    lines.push(category_heading);
                    "  *".to_string()
                } else {
                    category_heading
                };

                for commit in &group.commits {
                    lines.push(Self::commit_line(&prefix, commit, options));
                }
            }

            lines.push(String::new());
        }

        lines.push(String::new());
        let output = lines.join("\n");
        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }
}
