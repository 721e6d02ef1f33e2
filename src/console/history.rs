#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recall {
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecallState {
    /// `None` means a fresh input line (not recalling).
    pub cursor: Option<usize>,
    pub draft: String,
}

/// Arrow-key recall over `history`. Never mutates the history itself.
pub fn recall(history: &[String], cursor: Option<usize>, draft: &str, dir: Recall) -> RecallState {
    let unchanged = RecallState {
        cursor,
        draft: draft.to_string(),
    };
    match dir {
        Recall::Up => {
            if history.is_empty() {
                return unchanged;
            }
            let next = match cursor {
                None => history.len() - 1,
                Some(i) => i.min(history.len() - 1).saturating_sub(1),
            };
            RecallState {
                cursor: Some(next),
                draft: history[next].clone(),
            }
        }
        Recall::Down => {
            let Some(i) = cursor else {
                return unchanged;
            };
            let next = i + 1;
            if next >= history.len() {
                return RecallState {
                    cursor: None,
                    draft: String::new(),
                };
            }
            RecallState {
                cursor: Some(next),
                draft: history[next].clone(),
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = None;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn recall_up(&mut self, draft: &mut String) {
        self.apply(draft, Recall::Up);
    }

    pub fn recall_down(&mut self, draft: &mut String) {
        self.apply(draft, Recall::Down);
    }

    fn apply(&mut self, draft: &mut String, dir: Recall) {
        let next = recall(&self.entries, self.cursor, draft, dir);
        self.cursor = next.cursor;
        *draft = next.draft;
    }
}
