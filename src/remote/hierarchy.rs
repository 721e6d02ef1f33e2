//! Read-only hierarchy endpoints: disks, directory listings, file contents.

use super::*;

impl RemoteClient {
    pub(super) fn get_disks(&self) -> Result<DisksResponse> {
        tracing::debug!("GET /disks");
        let resp = self
            .client
            .get(self.url("/disks"))
            .send()
            .context("list disks")?;

        // A failing scan still answers `{disks, error}`.
        let status = resp.status();
        let body = resp.text().context("read disks response")?;
        let out: DisksResponse = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(err) => match error_message_from_body(&body) {
                Some(msg) => DisksResponse {
                    disks: Vec::new(),
                    error: Some(msg),
                },
                None => {
                    return Err(anyhow::Error::new(err)
                        .context(format!("parse disks response (HTTP {})", status)));
                }
            },
        };
        Ok(out)
    }

    pub(super) fn get_directory(&self, mount_id: &str, path: &str) -> Result<Vec<DirectoryEntry>> {
        tracing::debug!(mount_id, path, "GET /filesystem");
        let resp = self
            .client
            .get(self.url("/filesystem"))
            .query(&[("partition_id", mount_id), ("path", path)])
            .send()
            .context("list directory")?;

        let body = self
            .ensure_ok(resp, "list directory")?
            .text()
            .context("read directory listing")?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let entries: Option<Vec<DirectoryEntry>> =
            serde_json::from_str(&body).context("parse directory listing")?;
        Ok(entries.unwrap_or_default())
    }

    pub(super) fn get_file_content(&self, mount_id: &str, path: &str) -> Result<FileContent> {
        tracing::debug!(mount_id, path, "GET /file-content");
        let resp = self
            .client
            .get(self.url("/file-content"))
            .query(&[("partition_id", mount_id), ("path", path)])
            .send()
            .context("read file")?;

        let out: FileContent = self
            .ensure_ok(resp, "read file")?
            .json()
            .context("parse file content")?;
        Ok(out)
    }
}
