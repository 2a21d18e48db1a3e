/// Enum representing CLI commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Generate { token: String, milestone: String },
    Help,
    Unknown(String),
}

pub const USAGE: &str = "Usage: relnotes <github-access-token> <milestone>";

/// Arguments that request the usage text
const HELP_ARGS: &[&str] = &["help", "--help", "-h"];

/// Parse command line arguments and return a Command
///
/// # Arguments
/// * `args` - Command line arguments (including program name)
///
/// # Returns
/// * `Command` - The parsed command
pub fn parse_args(args: &[String]) -> Command {
    match args.len() {
        0 | 1 => Command::Help,
        2 => {
            if HELP_ARGS.contains(&args[1].as_str()) {
                Command::Help
            } else {
                Command::Unknown("Missing milestone argument.".to_string())
            }
        }
        3 => {
            let token = args[1].trim();
            let milestone = &args[2];
            if token.is_empty() {
                Command::Unknown("Access token must not be empty.".to_string())
            } else if milestone.trim().is_empty() {
                Command::Unknown("Milestone must not be empty.".to_string())
            } else {
                Command::Generate {
                    token: token.to_string(),
                    milestone: milestone.clone(),
                }
            }
        }
        n => Command::Unknown(format!("Expected 2 arguments, got {}.", n - 1)),
    }
}
