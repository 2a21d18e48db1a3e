use crate::cli;
use crate::config::ReleaseNotesConfig;
use crate::github::client::GitHubClient;
use crate::notes::{self, ReleaseNotes};
use crate::output;
use anyhow::Context;

/// Runs one invocation of the tool.
///
/// `stdout_additional` receives a copy of everything printed to stdout.
pub async fn run(
    args: Vec<String>,
    mut stdout_additional: Option<&mut dyn std::io::Write>,
) -> anyhow::Result<()> {
    match cli::parser::parse_args(&args) {
        cli::parser::Command::Help => {
            output::println(cli::parser::USAGE, &mut stdout_additional)?;
        }
        cli::parser::Command::Generate { token, milestone } => {
            let config = ReleaseNotesConfig::new(token, milestone);
            let release_notes = generate(&config).await?;
            output::print(&release_notes.render(), &mut stdout_additional)?;
        }
        cli::parser::Command::Unknown(message) => {
            return Err(anyhow::anyhow!("{message}\n{}", cli::parser::USAGE));
        }
    }
    Ok(())
}

/// Authenticates against the configured API and builds the release notes.
pub async fn generate(config: &ReleaseNotesConfig) -> anyhow::Result<ReleaseNotes> {
    let client = GitHubClient::authenticate(&config.token, &config.api_base_url)
        .await
        .context("Failed to authenticate to GitHub")?;
    eprintln!("Authenticated as {}", client.login());

    notes::generate_release_notes(&client, config).await
}
