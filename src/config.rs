use std::fmt;

/// Organization owning the repository whose release notes are generated.
pub const DEFAULT_ORGANIZATION: &str = "antlr";
/// Repository whose release notes are generated.
pub const DEFAULT_REPOSITORY: &str = "intellij-plugin-v4";
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Everything a release-notes run needs, passed explicitly to the aggregator.
#[derive(Clone, PartialEq)]
pub struct ReleaseNotesConfig {
    pub token: String,
    pub milestone: String,
    pub organization: String,
    pub repository: String,
    pub api_base_url: String,
}

impl ReleaseNotesConfig {
    /// Configuration for `milestone` of the default repository.
    pub fn new(token: impl Into<String>, milestone: impl Into<String>) -> Self {
        ReleaseNotesConfig {
            token: token.into(),
            milestone: milestone.into(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            repository: DEFAULT_REPOSITORY.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    pub fn with_repository(
        mut self,
        organization: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        self.organization = organization.into();
        self.repository = repository.into();
        self
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }
}

// Keeps the token out of error traces and debug output.
impl fmt::Debug for ReleaseNotesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseNotesConfig")
            .field("token", &"<redacted>")
            .field("milestone", &self.milestone)
            .field("organization", &self.organization)
            .field("repository", &self.repository)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}
