pub mod classify;
pub mod contributors;
pub mod render;

use crate::config::ReleaseNotesConfig;
use crate::github::client::{IssueQuery, IssueTracker};
use crate::github::fetch;
use crate::github::issues::{Issue, Milestone};
use anyhow::{Context, Result};
use classify::Classification;
use contributors::ContributionTally;
use std::fmt;

/// Every closed item of a milestone, fetched once and kept in fetch order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseNotes {
    milestone: Milestone,
    issues: Vec<Issue>,
}

impl ReleaseNotes {
    pub fn new(milestone: Milestone, issues: Vec<Issue>) -> Self {
        ReleaseNotes { milestone, issues }
    }

    pub fn milestone(&self) -> &Milestone {
        &self.milestone
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn classification(&self) -> Classification<'_> {
        classify::classify(&self.issues)
    }

    pub fn tally(&self) -> ContributionTally<'_> {
        ContributionTally::from_issues(&self.issues)
    }

    pub fn render(&self) -> String {
        render::render_release_notes(&self.classification(), &self.tally())
    }
}

impl fmt::Display for ReleaseNotes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Resolves the configured milestone and collects its closed issues and pull requests.
///
/// Fails before any issue is requested when the milestone cannot be resolved.
pub async fn generate_release_notes<T: IssueTracker>(
    tracker: &T,
    config: &ReleaseNotesConfig,
) -> Result<ReleaseNotes> {
    let organization = tracker
        .get_organization(&config.organization)
        .await
        .with_context(|| format!("Failed to get organization {}", config.organization))?;
    let repo = tracker
        .get_repo(&organization, &config.repository)
        .await
        .with_context(|| format!("Failed to get repository {}", config.repository))?;
    let milestone = fetch::resolve_milestone(tracker, &repo, &config.milestone)
        .await
        .context("Failed to resolve milestone")?;

    let query = IssueQuery::closed_in_milestone(&milestone);
    let issues = fetch::list_issues(tracker, &repo, query)
        .collect_all()
        .await
        .with_context(|| format!("Failed to fetch issues of milestone {}", milestone.title))?;
    let issues = fetch::complete_authors(tracker, issues)
        .await
        .context("Failed to fetch contributor profiles")?;
    eprintln!(
        "Fetched {} items for milestone {}",
        issues.len(),
        milestone.title
    );

    let notes = ReleaseNotes::new(milestone, issues);
    for number in notes.tally().unattributed() {
        eprintln!("Warning: #{number} has no author and is left out of the contributors");
    }
    Ok(notes)
}
