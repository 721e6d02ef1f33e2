//! `POST /execute`.

use super::*;
use crate::model::ExecuteRequest;

impl RemoteClient {
    pub(super) fn post_command(&self, command: &str) -> Result<ExecuteResponse> {
        tracing::debug!(command, "POST /execute");
        let resp = self
            .client
            .post(self.url("/execute"))
            .json(&ExecuteRequest { command })
            .send()
            .context("send command")?;

        // Failed commands come back as 4xx with the same JSON shape, so the
        // body is parsed regardless of status.
        let status = resp.status();
        let body = resp.text().context("read command response")?;
        let out: ExecuteResponse = serde_json::from_str(&body)
            .with_context(|| format!("parse command response (HTTP {})", status))?;
        Ok(out)
    }
}
