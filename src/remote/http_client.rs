use super::*;

impl RemoteClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Non-success statuses become errors carrying the service's `error` field
    /// when the body has one.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        match error_message_from_body(&body) {
            Some(msg) => anyhow::bail!("{}: {}", label, msg),
            None => anyhow::bail!("{}: HTTP {}", label, status),
        }
    }
}

pub fn error_message_from_body(body: &str) -> Option<String> {
    let v: serde_json::Value = serde_json::from_str(body).ok()?;
    v.get("error")
        .and_then(|x| x.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
