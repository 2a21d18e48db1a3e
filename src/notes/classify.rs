use crate::github::issues::Issue;

/// Excludes an item from the fixed-issues list.
pub const LABEL_IMPROVEMENT: &str = "type:improvement";
/// Selects an item for the improvements list.
///
/// Not the same literal as [`LABEL_IMPROVEMENT`]. Do not merge them.
pub const LABEL_ENHANCEMENT: &str = "type:enhancement";
pub const LABEL_FEATURE: &str = "type:feature";

/// A plain issue that is neither an improvement nor a feature.
pub fn is_bug(issue: &Issue) -> bool {
    !issue.is_pull_request()
        && !(issue.has_label(LABEL_IMPROVEMENT) || issue.has_label(LABEL_FEATURE))
}

/// An issue or pull request labelled as an enhancement or a feature.
pub fn is_improvement(issue: &Issue) -> bool {
    issue.has_label(LABEL_ENHANCEMENT) || issue.has_label(LABEL_FEATURE)
}

pub fn is_pull_request(issue: &Issue) -> bool {
    issue.is_pull_request()
}

/// The three views of a milestone's items, each in fetch order.
///
/// The views are computed independently and may overlap.
#[derive(Debug, PartialEq)]
pub struct Classification<'a> {
    pub bugs: Vec<&'a Issue>,
    pub improvements: Vec<&'a Issue>,
    pub pull_requests: Vec<&'a Issue>,
}

pub fn classify(issues: &[Issue]) -> Classification<'_> {
    Classification {
        bugs: issues.iter().filter(|issue| is_bug(issue)).collect(),
        improvements: issues.iter().filter(|issue| is_improvement(issue)).collect(),
        pull_requests: issues.iter().filter(|issue| is_pull_request(issue)).collect(),
    }
}
