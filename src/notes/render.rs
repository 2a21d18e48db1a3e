use crate::github::issues::Issue;
use crate::notes::classify::Classification;
use crate::notes::contributors::{Contribution, ContributionTally, MAX_CONTRIBUTORS};
use std::fmt::Write;

pub const ISSUES_FIXED_HEADING: &str = "## Issues fixed";
pub const IMPROVEMENTS_HEADING: &str = "## Improvements, features";
pub const PULL_REQUESTS_HEADING: &str = "## Pull requests";
pub const CONTRIBUTORS_HEADING: &str = "## Contributors";

/// `* [title](url) (label, label)`
pub fn render_item(issue: &Issue) -> String {
    format!(
        "* [{}]({}) ({})",
        issue.title,
        issue.html_url,
        issue.label_names().join(", ")
    )
}

/// `* NNN items: [name](url) (login)`, or `* NNN items: [login](url)` without a display name.
pub fn render_contribution(contribution: &Contribution) -> String {
    let author = contribution.author;
    match &author.name {
        Some(name) => format!(
            "* {:3} items: [{}]({}) ({})",
            contribution.count, name, author.html_url, author.login
        ),
        None => format!(
            "* {:3} items: [{}]({})",
            contribution.count, author.login, author.html_url
        ),
    }
}

fn push_section<I>(out: &mut String, heading: &str, lines: I)
where
    I: IntoIterator<Item = String>,
{
    // Writing to a String cannot fail.
    let _ = writeln!(out);
    let _ = writeln!(out, "{heading}");
    for line in lines {
        let _ = writeln!(out, "{line}");
    }
}

/// Renders the four sections, each preceded by an empty line.
pub fn render_release_notes(
    classification: &Classification,
    tally: &ContributionTally,
) -> String {
    let mut out = String::new();
    push_section(
        &mut out,
        ISSUES_FIXED_HEADING,
        classification.bugs.iter().map(|issue| render_item(issue)),
    );
    push_section(
        &mut out,
        IMPROVEMENTS_HEADING,
        classification
            .improvements
            .iter()
            .map(|issue| render_item(issue)),
    );
    push_section(
        &mut out,
        PULL_REQUESTS_HEADING,
        classification
            .pull_requests
            .iter()
            .map(|issue| render_item(issue)),
    );
    push_section(
        &mut out,
        CONTRIBUTORS_HEADING,
        tally
            .most_common(MAX_CONTRIBUTORS)
            .into_iter()
            .map(render_contribution),
    );
    out
}
