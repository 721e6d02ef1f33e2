use anyhow::Result;

use super::params::parse_params;

/// The logged-in user and the mounted partition the login was scoped to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub mount_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub pass: String,
    pub mount_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    Login(Credentials),
    Logout,
}

/// Detects session-changing commands. `Err` is a local validation failure:
/// the command must not be sent.
pub fn session_intent(command: &str) -> Result<Option<SessionIntent>> {
    let word = command.split_whitespace().next().unwrap_or("");
    if word.eq_ignore_ascii_case("logout") {
        return Ok(Some(SessionIntent::Logout));
    }
    if !word.eq_ignore_ascii_case("login") {
        return Ok(None);
    }

    let params = parse_params(command);
    let field = |key: &str| -> Result<String> {
        match params.get(key).map(|v| v.trim()) {
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            _ => anyhow::bail!("login requires a non-empty -{} parameter", key),
        }
    };
    Ok(Some(SessionIntent::Login(Credentials {
        user: field("user")?,
        pass: field("pass")?,
        mount_id: field("id")?,
    })))
}
