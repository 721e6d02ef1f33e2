//! In-memory gateway for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::Result;

use crate::model::{
    DirectoryEntry, Disk, DisksResponse, EntryType, ExecuteResponse, FileContent, Partition,
};
use crate::remote::Gateway;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Execute(String),
    Disks,
    List { mount_id: String, path: String },
    Read { mount_id: String, path: String },
}

#[derive(Clone, Debug)]
pub(crate) enum Reply {
    Output(String),
    Error(String),
    Transport(String),
}

#[derive(Default)]
pub(crate) struct FakeGateway {
    pub(crate) calls: RefCell<Vec<Call>>,
    /// Keyed by the first word of the command; defaults to an `ok` output.
    pub(crate) replies: HashMap<String, Reply>,
    pub(crate) disks: Vec<Disk>,
    pub(crate) disks_error: Option<String>,
    pub(crate) disks_unreachable: bool,
    /// Keyed by path; missing paths fail like a 404.
    pub(crate) listings: HashMap<String, Vec<DirectoryEntry>>,
    pub(crate) files: HashMap<String, String>,
}

impl FakeGateway {
    pub(crate) fn reply(mut self, word: &str, reply: Reply) -> Self {
        self.replies.insert(word.to_string(), reply);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn executed(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Execute(cmd) => Some(cmd.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::List { .. }))
            .count()
    }

    /// One disk with a mounted and an unmounted partition, plus a small tree.
    pub(crate) fn with_tree() -> Self {
        let mut listings = HashMap::new();
        listings.insert(
            "/".to_string(),
            vec![folder("home"), folder("sub"), file("users.txt", 64)],
        );
        listings.insert("/home".to_string(), vec![folder("user"), file("notes.txt", 12)]);
        listings.insert("/home/user".to_string(), vec![]);
        listings.insert("/sub".to_string(), vec![folder("sub")]);
        listings.insert("/sub/sub".to_string(), vec![]);

        let mut files = HashMap::new();
        files.insert(
            "/users.txt".to_string(),
            "1,G,root\n1,U,root,root,123\n".to_string(),
        );

        FakeGateway {
            disks: vec![disk(
                "A.mia",
                vec![partition("p1", Some("681A")), partition("p2", None)],
            )],
            listings,
            files,
            ..FakeGateway::default()
        }
    }
}

pub(crate) fn folder(name: &str) -> DirectoryEntry {
    DirectoryEntry {
        name: name.to_string(),
        entry_type: EntryType::Folder,
        size_bytes: 0,
        permissions: "664".to_string(),
        owner: None,
        uid: None,
        gid: None,
    }
}

pub(crate) fn file(name: &str, size: i64) -> DirectoryEntry {
    DirectoryEntry {
        name: name.to_string(),
        entry_type: EntryType::File,
        size_bytes: size,
        permissions: "664".to_string(),
        owner: Some("uid:1".to_string()),
        uid: Some(1),
        gid: Some(1),
    }
}

pub(crate) fn partition(name: &str, mount_id: Option<&str>) -> Partition {
    Partition {
        name: name.to_string(),
        size_bytes: 1024 * 1024,
        partition_type: "P".to_string(),
        fit_strategy: "WF".to_string(),
        is_mounted: mount_id.is_some(),
        mount_id: mount_id.map(str::to_string),
    }
}

pub(crate) fn disk(name: &str, partitions: Vec<Partition>) -> Disk {
    Disk {
        name: name.to_string(),
        path: format!("/tmp/{}", name),
        capacity_bytes: 10 * 1024 * 1024,
        fit_strategy: "FF".to_string(),
        mounted_partitions: partitions.iter().filter(|p| p.is_mounted).count() as u32,
        partitions,
    }
}

impl Gateway for FakeGateway {
    fn base_url(&self) -> &str {
        "http://fake.invalid"
    }

    fn execute(&self, command: &str) -> Result<ExecuteResponse> {
        self.calls
            .borrow_mut()
            .push(Call::Execute(command.to_string()));
        let word = command
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_lowercase();
        match self.replies.get(&word) {
            Some(Reply::Output(out)) => Ok(ExecuteResponse {
                output: Some(out.clone()),
                error: None,
            }),
            Some(Reply::Error(err)) => Ok(ExecuteResponse {
                output: Some(String::new()),
                error: Some(err.clone()),
            }),
            Some(Reply::Transport(msg)) => anyhow::bail!("{}", msg),
            None => Ok(ExecuteResponse {
                output: Some(format!("ok: {}", command)),
                error: None,
            }),
        }
    }

    fn disks(&self) -> Result<DisksResponse> {
        self.calls.borrow_mut().push(Call::Disks);
        if self.disks_unreachable {
            anyhow::bail!("connection refused");
        }
        Ok(DisksResponse {
            disks: self.disks.clone(),
            error: self.disks_error.clone(),
        })
    }

    fn list_directory(&self, mount_id: &str, path: &str) -> Result<Vec<DirectoryEntry>> {
        self.calls.borrow_mut().push(Call::List {
            mount_id: mount_id.to_string(),
            path: path.to_string(),
        });
        match self.listings.get(path) {
            Some(entries) => Ok(entries.clone()),
            None => anyhow::bail!("list directory: directory not found"),
        }
    }

    fn file_content(&self, mount_id: &str, path: &str) -> Result<FileContent> {
        self.calls.borrow_mut().push(Call::Read {
            mount_id: mount_id.to_string(),
            path: path.to_string(),
        });
        match self.files.get(path) {
            Some(content) => Ok(FileContent {
                path: path.to_string(),
                content: content.clone(),
                size: content.len() as i64,
            }),
            None => anyhow::bail!("read file: file not found"),
        }
    }
}

pub(crate) fn console(gateway: FakeGateway) -> super::Console<FakeGateway> {
    let cfg = crate::config::ClientConfig::default();
    super::Console::new(gateway, &cfg)
}

pub(crate) fn logged_in(gateway: FakeGateway) -> super::Console<FakeGateway> {
    let mut c = console(gateway);
    c.submit_one("login -user=root -pass=123 -id=681A", true);
    assert!(c.is_logged_in());
    c
}
