use anyhow::Result;

use crate::model::{DirectoryEntry, FileContent};

use super::*;

/// What the browser panel may show.
#[derive(Debug)]
pub enum BrowseAccess<'a> {
    Restricted,
    Open {
        session: &'a Session,
        navigator: &'a Navigator,
    },
}

/// Navigation handle; only handed out while a session is active.
pub struct Browse<'a, G> {
    navigator: &'a mut Navigator,
    gateway: &'a G,
}

impl<G: Gateway> Console<G> {
    pub fn browse_access(&self) -> BrowseAccess<'_> {
        match &self.session {
            Some(session) => BrowseAccess::Open {
                session,
                navigator: &self.navigator,
            },
            None => BrowseAccess::Restricted,
        }
    }

    pub fn browse(&mut self) -> Option<Browse<'_, G>> {
        self.session.as_ref()?;
        Some(Browse {
            navigator: &mut self.navigator,
            gateway: &self.gateway,
        })
    }
}

impl<G: Gateway> Browse<'_, G> {
    pub fn navigator(&self) -> &Navigator {
        self.navigator
    }

    pub fn activate(&mut self) {
        self.navigator.ensure_loaded(self.gateway);
    }

    pub fn refresh(&mut self) {
        self.navigator.reload_disks(self.gateway);
    }

    pub fn select_disk(&mut self, index: usize) -> Result<()> {
        self.navigator.select_disk(index)
    }

    pub fn select_partition(&mut self, index: usize) -> Result<()> {
        self.navigator.select_partition(self.gateway, index)
    }

    pub fn open_entry(&mut self, index: usize) -> Result<EntryOutcome> {
        self.navigator.open_entry(self.gateway, index)
    }

    /// Enter on the row at `index`, whatever level is showing.
    pub fn open(&mut self, index: usize) -> Result<Option<EntryOutcome>> {
        match self.navigator.state() {
            NavState::DiskList => self.select_disk(index).map(|_| None),
            NavState::PartitionList => self.select_partition(index).map(|_| None),
            NavState::DirectoryBrowse => self.open_entry(index).map(Some),
        }
    }

    pub fn parent(&mut self) {
        self.navigator.go_parent(self.gateway);
    }

    pub fn root(&mut self) {
        self.navigator.go_root(self.gateway);
    }

    /// Parent folder while below `/`, otherwise one level up.
    pub fn back(&mut self) {
        if self.navigator.state() == NavState::DirectoryBrowse
            && self.navigator.current_path() != "/"
        {
            self.parent();
        } else {
            self.navigator.back();
        }
    }

    pub fn read_file(&self, entry: &DirectoryEntry) -> Result<FileContent> {
        self.navigator.read_file(self.gateway, entry)
    }
}

#[cfg(test)]
#[path = "../tests/console/browse_tests.rs"]
mod tests;
