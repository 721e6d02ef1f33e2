use std::collections::VecDeque;

use super::*;

/// Lines of a pasted block or script, consumed strictly in source order.
#[derive(Debug, Default)]
pub struct BatchQueue {
    lines: VecDeque<String>,
    total: usize,
}

impl BatchQueue {
    pub fn from_text(text: &str) -> Self {
        let lines: VecDeque<String> = text.split('\n').map(str::to_string).collect();
        let total = lines.len();
        Self { lines, total }
    }

    /// Queues `other` behind the lines still pending.
    pub fn append(&mut self, other: BatchQueue) {
        self.total += other.total;
        self.lines.extend(other.lines);
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchStep {
    /// A command went through the pipeline; pace before the next one.
    Executed,
    /// A comment was logged.
    Noted,
    Done,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub executed: usize,
    pub comments: usize,
    pub errors: usize,
}

impl<G: Gateway> Console<G> {
    /// Handles the next non-blank line. Batch lines never enter the history.
    pub fn step_batch(&mut self, queue: &mut BatchQueue) -> BatchStep {
        while let Some(line) = queue.lines.pop_front() {
            match classify(&line) {
                Disposition::Blank => continue,
                Disposition::Comment(text) => {
                    self.transcript.push(EntryKind::Comment, text);
                    return BatchStep::Noted;
                }
                Disposition::Local(_) | Disposition::Remote(_) => {
                    self.submit_one(&line, false);
                    return BatchStep::Executed;
                }
            }
        }
        BatchStep::Done
    }

    /// Runs a whole batch sequentially. `pause` is called with the pacing
    /// interval after every executed line; nothing else runs concurrently.
    pub fn run_batch(
        &mut self,
        mut queue: BatchQueue,
        mut pause: impl FnMut(&Transcript, Duration),
    ) -> BatchSummary {
        tracing::info!(lines = queue.total(), "batch started");
        let mut summary = BatchSummary::default();
        loop {
            let errors_before = self.transcript.count(EntryKind::Error);
            match self.step_batch(&mut queue) {
                BatchStep::Executed => {
                    summary.executed += 1;
                    if self.transcript.count(EntryKind::Error) > errors_before {
                        summary.errors += 1;
                    }
                    pause(&self.transcript, self.pace);
                }
                BatchStep::Noted => summary.comments += 1,
                BatchStep::Done => break,
            }
        }
        tracing::info!(
            executed = summary.executed,
            comments = summary.comments,
            errors = summary.errors,
            "batch finished"
        );
        summary
    }
}

#[cfg(test)]
#[path = "../tests/console/batch_tests.rs"]
mod tests;
