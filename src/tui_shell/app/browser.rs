use super::*;

impl App {
    /// Loads the disk snapshot the first time the panel is shown to a
    /// logged-in user.
    pub(in crate::tui_shell) fn sync_browser(&mut self) {
        let Some(mut b) = self.console.browse() else {
            return;
        };
        if !b.navigator().is_loaded() {
            b.activate();
            self.browser_selected = 0;
        }
    }

    pub(in crate::tui_shell) fn browser_rows(&self) -> usize {
        match self.console.browse_access() {
            BrowseAccess::Restricted => 0,
            BrowseAccess::Open { navigator, .. } => match navigator.state() {
                NavState::DiskList => navigator.disks().len(),
                NavState::PartitionList => navigator.partitions().len(),
                NavState::DirectoryBrowse => navigator.listing().len(),
            },
        }
    }

    pub(in crate::tui_shell) fn clamp_browser_selection(&mut self) {
        let rows = self.browser_rows();
        self.browser_selected = self.browser_selected.min(rows.saturating_sub(1));
    }

    pub(in crate::tui_shell) fn browser_move(&mut self, delta: isize) {
        let rows = self.browser_rows();
        if rows == 0 {
            self.browser_selected = 0;
            return;
        }
        let next = self.browser_selected as isize + delta;
        self.browser_selected = next.clamp(0, rows as isize - 1) as usize;
    }

    pub(in crate::tui_shell) fn browser_open(&mut self) {
        let idx = self.browser_selected;
        let res = match self.console.browse() {
            Some(mut b) => b.open(idx),
            None => return,
        };
        match res {
            Ok(Some(EntryOutcome::File(entry))) => {
                self.status = Some(file_summary(&entry));
            }
            Ok(Some(EntryOutcome::AlreadyThere)) => {
                self.status = Some("already in that folder".to_string());
            }
            Ok(_) => {
                self.browser_selected = 0;
                self.status = None;
            }
            Err(err) => self.status = Some(format!("{:#}", err)),
        }
    }

    pub(in crate::tui_shell) fn browser_back(&mut self) {
        if let Some(mut b) = self.console.browse() {
            b.back();
            self.browser_selected = 0;
        }
    }

    pub(in crate::tui_shell) fn browser_root(&mut self) {
        if let Some(mut b) = self.console.browse() {
            b.root();
            self.browser_selected = 0;
        }
    }

    pub(in crate::tui_shell) fn browser_refresh(&mut self) {
        if let Some(mut b) = self.console.browse() {
            b.refresh();
            self.browser_selected = 0;
            self.status = Some("disk list refreshed".to_string());
        }
    }

    pub(in crate::tui_shell) fn browser_read_selected(&mut self) {
        let idx = self.browser_selected;
        let res = {
            let Some(b) = self.console.browse() else {
                return;
            };
            if b.navigator().state() != NavState::DirectoryBrowse {
                return;
            }
            let Some(entry) = b.navigator().listing().get(idx).cloned() else {
                return;
            };
            if entry.is_folder() {
                self.status = Some(format!("{} is a folder", entry.name));
                return;
            }
            b.read_file(&entry)
        };
        match res {
            Ok(file) => {
                let mut lines = vec![
                    format!("path: {}", file.path),
                    format!("size: {}", format_bytes(file.size)),
                    String::new(),
                ];
                lines.extend(file.content.lines().map(str::to_string));
                self.open_modal("File", lines);
            }
            Err(err) => self.open_modal("File", vec![format!("{:#}", err)]),
        }
    }
}

fn file_summary(entry: &DirectoryEntry) -> String {
    let mut s = format!(
        "{}  {}  perm {}",
        entry.name,
        format_bytes(entry.size_bytes),
        entry.permissions
    );
    if let Some(owner) = &entry.owner {
        s.push_str(&format!("  owner {}", owner));
    }
    s.push_str("  (c to read)");
    s
}
