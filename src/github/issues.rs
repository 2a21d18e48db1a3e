use serde::Deserialize;

/// A label attached to an issue or pull request.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Label {
    pub name: String,
}

/// The `pull_request` object GitHub attaches to pull requests returned by the issues API.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PullRequestMarker {
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Author of an issue.
///
/// The issues API does not include `name`; it is filled in from `/users/{login}`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Author {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    pub html_url: String,
}

impl Author {
    /// Name to show in the contributors list, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

/// A closed issue or pull request of a milestone.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub pull_request: Option<PullRequestMarker>,
    #[serde(default)]
    pub user: Option<Author>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }

    pub fn label_names(&self) -> Vec<&str> {
        self.labels.iter().map(|label| label.name.as_str()).collect()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Milestone {
    pub number: u64,
    pub title: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Organization {
    pub login: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RepositoryOwner {
    pub login: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub owner: RepositoryOwner,
}

/// Parses one page of the `/repos/{owner}/{repo}/issues` response.
pub fn parse_issue_page(json: &str) -> Result<Vec<Issue>, String> {
    serde_json::from_str::<Vec<Issue>>(json).map_err(|e| format!("Failed to parse issues: {e}"))
}
