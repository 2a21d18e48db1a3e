use crate::github::issues::{Author, Issue};
use std::collections::HashMap;

/// Upper bound on the number of contributors listed.
pub const MAX_CONTRIBUTORS: usize = 10000;

#[derive(Debug, Clone, PartialEq)]
pub struct Contribution<'a> {
    pub author: &'a Author,
    pub count: usize,
}

/// Number of items per author login over a whole milestone.
#[derive(Debug)]
pub struct ContributionTally<'a> {
    /// In order of first appearance.
    entries: Vec<Contribution<'a>>,
    index: HashMap<&'a str, usize>,
    unattributed: Vec<u64>,
}

impl<'a> ContributionTally<'a> {
    pub fn from_issues(issues: &'a [Issue]) -> Self {
        let mut tally = ContributionTally {
            entries: Vec::new(),
            index: HashMap::new(),
            unattributed: Vec::new(),
        };

        for issue in issues {
            let Some(author) = &issue.user else {
                tally.unattributed.push(issue.number);
                continue;
            };
            match tally.index.get(author.login.as_str()).copied() {
                Some(position) => {
                    let entry = &mut tally.entries[position];
                    entry.count += 1;
                    entry.author = author;
                }
                None => {
                    tally
                        .index
                        .insert(author.login.as_str(), tally.entries.len());
                    tally.entries.push(Contribution { author, count: 1 });
                }
            }
        }

        tally
    }

    pub fn count(&self, login: &str) -> Option<usize> {
        self.index
            .get(login)
            .map(|&position| self.entries[position].count)
    }

    /// Up to `limit` contributors, highest count first. Equal counts keep first-appearance order.
    pub fn most_common(&self, limit: usize) -> Vec<&Contribution<'a>> {
        let mut ranked: Vec<&Contribution<'a>> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(limit);
        ranked
    }

    /// Numbers of the items that carry no author.
    pub fn unattributed(&self) -> &[u64] {
        &self.unattributed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
