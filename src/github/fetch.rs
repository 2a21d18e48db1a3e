use crate::github::client::{IssueQuery, IssueTracker};
use crate::github::issues::{Author, Issue, Milestone, Repository};
use anyhow::Result;
use std::collections::HashMap;

/// Page size requested from the tracker.
pub const PER_PAGE: u32 = 100;

/// Lazy, page-by-page listing of the issues matching a query.
///
/// Nothing is requested until [`IssuePager::next_page`] is awaited. A page
/// shorter than [`PER_PAGE`] ends the listing.
pub struct IssuePager<'a, T: IssueTracker> {
    tracker: &'a T,
    repo: &'a Repository,
    query: IssueQuery,
    page: u32,
    exhausted: bool,
}

impl<'a, T: IssueTracker> IssuePager<'a, T> {
    pub async fn next_page(&mut self) -> Result<Option<Vec<Issue>>> {
        if self.exhausted {
            return Ok(None);
        }

        let issues = self
            .tracker
            .issue_page(self.repo, &self.query, self.page, PER_PAGE)
            .await?;

        if issues.len() < PER_PAGE as usize {
            self.exhausted = true;
        }
        if issues.is_empty() {
            return Ok(None);
        }

        self.page += 1;
        Ok(Some(issues))
    }

    /// Drains the remaining pages into one ordered list.
    pub async fn collect_all(mut self) -> Result<Vec<Issue>> {
        let mut all_issues = Vec::new();
        while let Some(issues) = self.next_page().await? {
            all_issues.extend(issues);
        }
        Ok(all_issues)
    }
}

/// Starts a new listing at the first page.
pub fn list_issues<'a, T: IssueTracker>(
    tracker: &'a T,
    repo: &'a Repository,
    query: IssueQuery,
) -> IssuePager<'a, T> {
    IssuePager {
        tracker,
        repo,
        query,
        page: 1,
        exhausted: false,
    }
}

pub async fn list_milestones<T: IssueTracker>(
    tracker: &T,
    repo: &Repository,
) -> Result<Vec<Milestone>> {
    let mut all_milestones = Vec::new();
    let mut page = 1;

    loop {
        let milestones = tracker.milestone_page(repo, page, PER_PAGE).await?;
        let last_page = milestones.len() < PER_PAGE as usize;
        all_milestones.extend(milestones);
        if last_page {
            break;
        }
        page += 1;
    }

    Ok(all_milestones)
}

/// Picks the single milestone titled exactly `title`.
pub fn select_milestone(milestones: &[Milestone], title: &str) -> Result<Milestone> {
    let matching: Vec<&Milestone> = milestones.iter().filter(|m| m.title == title).collect();
    match matching.as_slice() {
        [milestone] => Ok((*milestone).clone()),
        [] => Err(anyhow::anyhow!("Milestone \"{title}\" not found")),
        _ => Err(anyhow::anyhow!(
            "Milestone \"{title}\" is ambiguous: {} milestones share this title",
            matching.len()
        )),
    }
}

pub async fn resolve_milestone<T: IssueTracker>(
    tracker: &T,
    repo: &Repository,
    title: &str,
) -> Result<Milestone> {
    let milestones = list_milestones(tracker, repo).await?;
    select_milestone(&milestones, title)
}

/// Replaces every issue author with the full profile, fetched once per login.
pub async fn complete_authors<T: IssueTracker>(
    tracker: &T,
    issues: Vec<Issue>,
) -> Result<Vec<Issue>> {
    let mut profiles: HashMap<String, Author> = HashMap::new();
    let mut completed = Vec::with_capacity(issues.len());

    for mut issue in issues {
        if let Some(user) = issue.user.take() {
            let profile = match profiles.get(&user.login) {
                Some(profile) => profile.clone(),
                None => {
                    let profile = tracker.get_user(&user.login).await?;
                    profiles.insert(user.login.clone(), profile.clone());
                    profile
                }
            };
            issue.user = Some(profile);
        }
        completed.push(issue);
    }

    Ok(completed)
}
