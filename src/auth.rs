use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;

/// Struct representing the GitHub `/user` API response.
#[derive(Deserialize, Debug, PartialEq)]
pub struct UserResponse {
    /// The login username of the authenticated user.
    pub login: String,
    /// The unique ID of the authenticated user.
    pub id: u64,
}

/// Extracts the `login` field from a GitHub `/user` API JSON response string.
///
/// # Arguments
///
/// * `json` - A JSON string returned by the GitHub `/user` API.
///
/// # Returns
///
/// * `Ok(login)` if parsing succeeds.
/// * `Err(error_message)` if parsing fails.
pub fn extract_login_from_user_response(json: &str) -> Result<String, String> {
    serde_json::from_str::<UserResponse>(json)
        .map(|user| user.login)
        .map_err(|e| format!("Failed to parse user response: {e}"))
}

/// Maps a GitHub API response status to an error.
///
/// `what` names the requested resource and is used in the not-found message.
pub fn check_status(status: StatusCode, what: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    match status {
        StatusCode::UNAUTHORIZED => Err(anyhow::anyhow!(
            "Token invalid or expired. Please check the access token."
        )),
        StatusCode::NOT_FOUND => Err(anyhow::anyhow!("{what} not found")),
        _ => Err(anyhow::anyhow!("API request error: {status}")),
    }
}
