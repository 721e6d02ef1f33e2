//! Three-level drill-down over the remote hierarchy:
//! disk list -> partition list -> directory listing.

use anyhow::{Context, Result};

use crate::model::{DirectoryEntry, Disk, FileContent, Partition};
use crate::remote::Gateway;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    DiskList,
    PartitionList,
    DirectoryBrowse,
}

/// `selected_partition` implies `selected_disk`; `current_path` always starts
/// with `/` and only matters once a partition is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationCursor {
    pub selected_disk: Option<Disk>,
    pub selected_partition: Option<Partition>,
    pub current_path: String,
}

impl Default for NavigationCursor {
    fn default() -> Self {
        Self {
            selected_disk: None,
            selected_partition: None,
            current_path: "/".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    Entered,
    /// Folder matches the last path segment; nothing was fetched.
    AlreadyThere,
    File(DirectoryEntry),
}

#[derive(Debug, Default)]
pub struct Navigator {
    disks: Vec<Disk>,
    loaded: bool,
    load_error: Option<String>,
    cursor: NavigationCursor,
    listing: Vec<DirectoryEntry>,
}

pub fn join_path(current: &str, name: &str) -> String {
    if current == "/" || current.is_empty() {
        format!("/{}", name)
    } else {
        format!("{}/{}", current.trim_end_matches('/'), name)
    }
}

pub fn parent_path(current: &str) -> String {
    let mut parts: Vec<&str> = current.split('/').filter(|p| !p.is_empty()).collect();
    parts.pop();
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

fn last_segment(path: &str) -> Option<&str> {
    path.split('/').filter(|p| !p.is_empty()).next_back()
}

impl Navigator {
    pub fn state(&self) -> NavState {
        match (&self.cursor.selected_disk, &self.cursor.selected_partition) {
            (None, _) => NavState::DiskList,
            (Some(_), None) => NavState::PartitionList,
            (Some(_), Some(_)) => NavState::DirectoryBrowse,
        }
    }

    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    pub fn listing(&self) -> &[DirectoryEntry] {
        &self.listing
    }

    pub fn current_path(&self) -> &str {
        &self.cursor.current_path
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn partitions(&self) -> &[Partition] {
        self.cursor
            .selected_disk
            .as_ref()
            .map(|d| d.partitions.as_slice())
            .unwrap_or(&[])
    }

    fn mount_id(&self) -> Option<&str> {
        self.cursor
            .selected_partition
            .as_ref()
            .and_then(|p| p.active_mount_id())
    }

    /// Fetches the disk snapshot once per activation.
    pub fn ensure_loaded<G: Gateway + ?Sized>(&mut self, gateway: &G) {
        if !self.loaded {
            self.reload_disks(gateway);
        }
    }

    /// Replaces the disk snapshot and returns to the disk list.
    pub fn reload_disks<G: Gateway + ?Sized>(&mut self, gateway: &G) {
        self.cursor = NavigationCursor::default();
        self.listing.clear();
        self.loaded = true;
        match gateway.disks() {
            Ok(resp) => {
                self.load_error = resp.error_message().map(str::to_string);
                if let Some(err) = &self.load_error {
                    tracing::warn!(error = %err, "disk listing reported an error");
                }
                self.disks = resp.disks;
            }
            Err(err) => {
                tracing::warn!(error = %format!("{:#}", err), "disk listing failed");
                self.disks.clear();
                self.load_error = Some(format!("connection error: {:#}", err));
            }
        }
    }

    pub fn select_disk(&mut self, index: usize) -> Result<()> {
        if self.state() != NavState::DiskList {
            anyhow::bail!("a disk is already selected");
        }
        let disk = self
            .disks
            .get(index)
            .cloned()
            .with_context(|| format!("no disk at position {}", index + 1))?;
        self.cursor.selected_disk = Some(disk);
        self.cursor.selected_partition = None;
        Ok(())
    }

    pub fn select_partition<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        index: usize,
    ) -> Result<()> {
        if self.state() != NavState::PartitionList {
            anyhow::bail!("select a disk first");
        }
        let partition = self
            .partitions()
            .get(index)
            .cloned()
            .with_context(|| format!("no partition at position {}", index + 1))?;
        if partition.active_mount_id().is_none() {
            anyhow::bail!("partition {} is not mounted", partition.name);
        }
        self.cursor.selected_partition = Some(partition);
        self.cursor.current_path = "/".to_string();
        self.refresh_listing(gateway);
        Ok(())
    }

    pub fn open_entry<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
        index: usize,
    ) -> Result<EntryOutcome> {
        if self.state() != NavState::DirectoryBrowse {
            anyhow::bail!("no partition is open");
        }
        let entry = self
            .listing
            .get(index)
            .cloned()
            .with_context(|| format!("no entry at position {}", index + 1))?;
        if !entry.is_folder() {
            return Ok(EntryOutcome::File(entry));
        }
        if self.enter_folder(gateway, &entry.name) {
            Ok(EntryOutcome::Entered)
        } else {
            Ok(EntryOutcome::AlreadyThere)
        }
    }

    /// Appends `name` to the path and re-fetches, unless it is already the
    /// final path component.
    pub fn enter_folder<G: Gateway + ?Sized>(&mut self, gateway: &G, name: &str) -> bool {
        if last_segment(&self.cursor.current_path) == Some(name) {
            return false;
        }
        self.cursor.current_path = join_path(&self.cursor.current_path, name);
        self.refresh_listing(gateway);
        true
    }

    pub fn go_parent<G: Gateway + ?Sized>(&mut self, gateway: &G) {
        if self.state() != NavState::DirectoryBrowse || self.cursor.current_path == "/" {
            return;
        }
        self.cursor.current_path = parent_path(&self.cursor.current_path);
        self.refresh_listing(gateway);
    }

    pub fn go_root<G: Gateway + ?Sized>(&mut self, gateway: &G) {
        if self.state() != NavState::DirectoryBrowse {
            return;
        }
        self.cursor.current_path = "/".to_string();
        self.refresh_listing(gateway);
    }

    /// Keeps the selected disk.
    pub fn back_to_partitions(&mut self) {
        self.cursor.selected_partition = None;
        self.cursor.current_path = "/".to_string();
        self.listing.clear();
    }

    pub fn back_to_disks(&mut self) {
        self.back_to_partitions();
        self.cursor.selected_disk = None;
    }

    /// One level up: directory -> partitions -> disks.
    pub fn back(&mut self) {
        match self.state() {
            NavState::DirectoryBrowse => self.back_to_partitions(),
            NavState::PartitionList => self.back_to_disks(),
            NavState::DiskList => {}
        }
    }

    /// Initial state; the next activation fetches disks again.
    pub fn reset(&mut self) {
        *self = Navigator::default();
    }

    pub fn read_file<G: Gateway + ?Sized>(
        &self,
        gateway: &G,
        entry: &DirectoryEntry,
    ) -> Result<FileContent> {
        if entry.is_folder() {
            anyhow::bail!("{} is a folder", entry.name);
        }
        let mount_id = self.mount_id().context("no partition is open")?;
        let path = join_path(&self.cursor.current_path, &entry.name);
        gateway.file_content(mount_id, &path).inspect_err(|err| {
            tracing::warn!(path = %path, error = %format!("{:#}", err), "file read failed");
        })
    }

    /// Listings are never cached: every path change lands here.
    fn refresh_listing<G: Gateway + ?Sized>(&mut self, gateway: &G) {
        let Some(mount_id) = self.mount_id().map(str::to_string) else {
            self.listing.clear();
            return;
        };
        let path = self.cursor.current_path.clone();
        match gateway.list_directory(&mount_id, &path) {
            Ok(entries) => self.listing = entries,
            Err(err) => {
                tracing::warn!(
                    mount_id = %mount_id,
                    path = %path,
                    error = %format!("{:#}", err),
                    "directory listing failed"
                );
                self.listing.clear();
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/console/navigation_tests.rs"]
mod tests;
