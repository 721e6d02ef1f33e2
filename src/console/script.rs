use std::path::Path;

use anyhow::Context;

use super::*;

pub fn has_allowed_extension(path: &Path, allowed: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let Some((_, ext)) = name.rsplit_once('.') else {
        return false;
    };
    let ext = ext.to_lowercase();
    allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext))
}

impl<G: Gateway> Console<G> {
    /// Validates and remembers a script for execution. A rejected file is
    /// never opened and clears any previous selection.
    pub fn select_script(&mut self, path: &Path) -> bool {
        if !has_allowed_extension(path, &self.script_extensions) {
            self.pending_script = None;
            let allowed = self
                .script_extensions
                .iter()
                .map(|e| format!(".{}", e))
                .collect::<Vec<_>>()
                .join(" and ");
            self.transcript.push(
                EntryKind::Error,
                format!("only {} files are allowed", allowed),
            );
            return false;
        }
        self.pending_script = Some(path.to_path_buf());
        true
    }

    pub fn pending_script(&self) -> Option<&Path> {
        self.pending_script.as_deref()
    }

    pub fn clear_script_selection(&mut self) {
        self.pending_script = None;
    }

    /// Reads the selected script and turns it into a batch. The selection is
    /// consumed either way.
    pub fn take_script_batch(&mut self) -> Option<BatchQueue> {
        let path = self.pending_script.take()?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display())) {
            Ok(text) => {
                self.transcript
                    .push(EntryKind::Success, format!("running script: {}", name));
                Some(BatchQueue::from_text(&text))
            }
            Err(err) => {
                self.transcript.push(
                    EntryKind::Error,
                    format!("failed to read script: {:#}", err),
                );
                None
            }
        }
    }

    /// Select + execute in one go, for headless runs.
    pub fn run_script(
        &mut self,
        path: &Path,
        pause: impl FnMut(&Transcript, Duration),
    ) -> Option<BatchSummary> {
        if !self.select_script(path) {
            return None;
        }
        let queue = self.take_script_batch()?;
        Some(self.run_batch(queue, pause))
    }
}

#[cfg(test)]
#[path = "../tests/console/script_tests.rs"]
mod tests;
