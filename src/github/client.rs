use crate::auth;
use crate::github::issues::{self, Author, Issue, Milestone, Organization, Repository};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

const ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = "relnotes-cli";
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Filter and ordering of an issue listing.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueQuery {
    pub state: String,
    pub milestone: u64,
    pub sort: String,
    pub direction: String,
}

impl IssueQuery {
    /// Closed issues and pull requests of `milestone`, newest first.
    pub fn closed_in_milestone(milestone: &Milestone) -> Self {
        IssueQuery {
            state: "closed".to_string(),
            milestone: milestone.number,
            sort: "created".to_string(),
            direction: "desc".to_string(),
        }
    }

    fn to_params(&self, page: u32, per_page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("state", self.state.clone()),
            ("milestone", self.milestone.to_string()),
            ("sort", self.sort.clone()),
            ("direction", self.direction.clone()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ]
    }
}

/// Read access to an issue tracker, already authenticated.
#[allow(async_fn_in_trait)]
pub trait IssueTracker {
    async fn get_organization(&self, name: &str) -> Result<Organization>;

    async fn get_repo(&self, organization: &Organization, name: &str) -> Result<Repository>;

    /// One page of the repository's milestones. Pages start at 1.
    async fn milestone_page(
        &self,
        repo: &Repository,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Milestone>>;

    /// One page of the repository's issues and pull requests matching `query`. Pages start at 1.
    async fn issue_page(
        &self,
        repo: &Repository,
        query: &IssueQuery,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Issue>>;

    /// Full profile of a user, including the display name.
    async fn get_user(&self, login: &str) -> Result<Author>;
}

/// GitHub REST API client.
pub struct GitHubClient {
    client: reqwest::Client,
    api_base_url: String,
    token: String,
    login: String,
}

impl GitHubClient {
    /// Builds a client and verifies `token` against `GET /user`.
    pub async fn authenticate(token: &str, api_base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;

        let mut github = GitHubClient {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            login: String::new(),
        };

        let text = github.get_text("/user", &[], "User").await?;
        github.login = auth::extract_login_from_user_response(&text).map_err(anyhow::Error::msg)?;
        Ok(github)
    }

    /// Login of the authenticated user.
    pub fn login(&self) -> &str {
        &self.login
    }

    async fn get_text(&self, path: &str, query: &[(&str, String)], what: &str) -> Result<String> {
        let response = self
            .client
            .get(format!("{}{}", self.api_base_url, path))
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Failed to request {path}"))?;

        auth::check_status(response.status(), what)?;
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response of {path}"))?;
        Ok(text)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        what: &str,
    ) -> Result<T> {
        let text = self.get_text(path, query, what).await?;
        serde_json::from_str::<T>(&text).with_context(|| format!("Failed to parse response of {path}"))
    }
}

impl IssueTracker for GitHubClient {
    async fn get_organization(&self, name: &str) -> Result<Organization> {
        self.get_json(
            &format!("/orgs/{name}"),
            &[],
            &format!("Organization {name}"),
        )
        .await
    }

    async fn get_repo(&self, organization: &Organization, name: &str) -> Result<Repository> {
        let full_name = format!("{}/{}", organization.login, name);
        self.get_json(
            &format!("/repos/{full_name}"),
            &[],
            &format!("Repository {full_name}"),
        )
        .await
    }

    async fn milestone_page(
        &self,
        repo: &Repository,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Milestone>> {
        self.get_json(
            &format!("/repos/{}/milestones", repo.full_name),
            &[("page", page.to_string()), ("per_page", per_page.to_string())],
            &format!("Milestones of {}", repo.full_name),
        )
        .await
    }

    async fn issue_page(
        &self,
        repo: &Repository,
        query: &IssueQuery,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Issue>> {
        let text = self
            .get_text(
                &format!("/repos/{}/issues", repo.full_name),
                &query.to_params(page, per_page),
                &format!("Issues of {}", repo.full_name),
            )
            .await?;
        issues::parse_issue_page(&text).map_err(anyhow::Error::msg)
    }

    async fn get_user(&self, login: &str) -> Result<Author> {
        self.get_json(&format!("/users/{login}"), &[], &format!("User {login}"))
            .await
    }
}
