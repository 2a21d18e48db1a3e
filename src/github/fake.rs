use crate::github::client::{IssueQuery, IssueTracker};
use crate::github::issues::{
    Author, Issue, Label, Milestone, Organization, PullRequestMarker, Repository, RepositoryOwner,
};
use anyhow::Result;
use std::cell::{Cell, RefCell};

/// In-memory tracker serving fixed milestones and issues page by page.
#[derive(Default)]
pub struct FakeTracker {
    pub milestones: Vec<Milestone>,
    pub issues: Vec<Issue>,
    pub names: Vec<(String, String)>,
    pub issue_requests: Cell<u32>,
    pub user_requests: RefCell<Vec<String>>,
    pub fail_issue_page: Option<u32>,
}

fn page_of<T: Clone>(items: &[T], page: u32, per_page: u32) -> Vec<T> {
    let start = ((page - 1) * per_page) as usize;
    items
        .iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect()
}

impl IssueTracker for FakeTracker {
    async fn get_organization(&self, name: &str) -> Result<Organization> {
        Ok(Organization {
            login: name.to_string(),
        })
    }

    async fn get_repo(&self, organization: &Organization, name: &str) -> Result<Repository> {
        Ok(Repository {
            name: name.to_string(),
            full_name: format!("{}/{}", organization.login, name),
            owner: RepositoryOwner {
                login: organization.login.clone(),
            },
        })
    }

    async fn milestone_page(
        &self,
        _repo: &Repository,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Milestone>> {
        Ok(page_of(&self.milestones, page, per_page))
    }

    async fn issue_page(
        &self,
        _repo: &Repository,
        _query: &IssueQuery,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Issue>> {
        self.issue_requests.set(self.issue_requests.get() + 1);
        if self.fail_issue_page == Some(page) {
            return Err(anyhow::anyhow!("API request error: 502 Bad Gateway"));
        }
        Ok(page_of(&self.issues, page, per_page))
    }

    async fn get_user(&self, login: &str) -> Result<Author> {
        self.user_requests.borrow_mut().push(login.to_string());
        let name = self
            .names
            .iter()
            .find(|(l, _)| l == login)
            .map(|(_, name)| name.clone());
        Ok(Author {
            login: login.to_string(),
            name,
            html_url: format!("https://github.com/{login}"),
        })
    }
}

pub fn repository() -> Repository {
    Repository {
        name: "intellij-plugin-v4".to_string(),
        full_name: "antlr/intellij-plugin-v4".to_string(),
        owner: RepositoryOwner {
            login: "antlr".to_string(),
        },
    }
}

pub fn milestone(number: u64, title: &str) -> Milestone {
    Milestone {
        number,
        title: title.to_string(),
    }
}

pub fn author(login: &str) -> Author {
    Author {
        login: login.to_string(),
        name: None,
        html_url: format!("https://github.com/{login}"),
    }
}

pub fn issue(number: u64, labels: &[&str], pull_request: bool, login: &str) -> Issue {
    Issue {
        number,
        title: format!("Issue {number}"),
        html_url: format!("https://github.com/antlr/intellij-plugin-v4/issues/{number}"),
        labels: labels
            .iter()
            .map(|name| Label {
                name: name.to_string(),
            })
            .collect(),
        pull_request: pull_request.then(|| PullRequestMarker {
            html_url: Some(format!(
                "https://github.com/antlr/intellij-plugin-v4/pull/{number}"
            )),
        }),
        user: Some(author(login)),
    }
}
