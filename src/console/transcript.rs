use time::OffsetDateTime;
use time::macros::format_description;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Command,
    Comment,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub kind: EntryKind,
    pub text: String,
    pub occurred_at: OffsetDateTime,
}

impl TranscriptEntry {
    /// `HH:MM:SSZ`.
    pub fn clock(&self) -> String {
        self.occurred_at
            .format(format_description!("[hour]:[minute]:[second]Z"))
            .unwrap_or_else(|_| "--:--:--Z".to_string())
    }
}

/// Append-only log of the interaction; only ever cleared wholesale.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    generation: u64,
}

impl Transcript {
    pub fn push(&mut self, kind: EntryKind, text: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            kind,
            text: text.into(),
            occurred_at: OffsetDateTime::now_utc(),
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.generation += 1;
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    /// Bumped on every clear, so readers holding an index can tell it went stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn count(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}

/// Tracks which entries a streaming reader has already seen.
#[derive(Clone, Copy, Debug, Default)]
pub struct TranscriptCursor {
    generation: u64,
    seen: usize,
}

impl TranscriptCursor {
    pub fn at_end(transcript: &Transcript) -> Self {
        Self {
            generation: transcript.generation(),
            seen: transcript.len(),
        }
    }

    pub fn take_new<'a>(&mut self, transcript: &'a Transcript) -> &'a [TranscriptEntry] {
        if self.generation != transcript.generation() {
            self.generation = transcript.generation();
            self.seen = 0;
        }
        let start = self.seen.min(transcript.len());
        self.seen = transcript.len();
        &transcript.entries()[start..]
    }
}
