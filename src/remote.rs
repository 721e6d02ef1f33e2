use anyhow::{Context, Result};

use crate::model::{DirectoryEntry, DisksResponse, ExecuteResponse, FileContent};

mod http_client;
pub use self::http_client::error_message_from_body;

mod commands;
mod hierarchy;

/// Boundary to the remote execution and hierarchy service.
///
/// `Err` always means a transport-level failure (unreachable host, unreadable
/// body); errors reported by the service itself travel inside the response
/// types, except for directory/file reads where a non-success status is
/// folded into `Err` with the service's message.
pub trait Gateway {
    fn base_url(&self) -> &str;

    fn execute(&self, command: &str) -> Result<ExecuteResponse>;

    fn disks(&self) -> Result<DisksResponse>;

    fn list_directory(&self, mount_id: &str, path: &str) -> Result<Vec<DirectoryEntry>>;

    fn file_content(&self, mount_id: &str, path: &str) -> Result<FileContent>;
}

pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("mia-console")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl Gateway for RemoteClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn execute(&self, command: &str) -> Result<ExecuteResponse> {
        self.post_command(command)
    }

    fn disks(&self) -> Result<DisksResponse> {
        self.get_disks()
    }

    fn list_directory(&self, mount_id: &str, path: &str) -> Result<Vec<DirectoryEntry>> {
        self.get_directory(mount_id, path)
    }

    fn file_content(&self, mount_id: &str, path: &str) -> Result<FileContent> {
        self.get_file_content(mount_id, path)
    }
}
