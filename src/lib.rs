pub mod auth;
pub mod cli {
    pub mod parser;
}
pub mod config;
pub mod github {
    pub mod client;
    #[cfg(test)]
    pub(crate) mod fake;
    pub mod fetch;
    pub mod issues;
}
pub mod notes;
pub mod output;
pub mod run;
