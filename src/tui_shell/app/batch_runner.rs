use super::*;

enum Tick {
    Wait,
    Paced,
    Finished,
}

impl App {
    /// Starts `queue`, or queues it behind the batch already running so no
    /// two batches interleave.
    pub(in crate::tui_shell) fn start_batch(&mut self, queue: BatchQueue) {
        if let Some(running) = self.batch.as_mut() {
            tracing::info!(lines = queue.total(), "batch appended to running batch");
            self.status = Some(format!(
                "queued {} more lines behind the running batch",
                queue.total()
            ));
            running.queue.append(queue);
            return;
        }
        tracing::info!(lines = queue.total(), "batch queued");
        self.status = Some(format!("running batch ({} lines)", queue.total()));
        self.batch = Some(PendingBatch {
            queue,
            next_due: Instant::now(),
        });
    }

    pub(in crate::tui_shell) fn batch_running(&self) -> bool {
        self.batch.is_some()
    }

    /// Executes at most one command line once the previous line's pacing
    /// interval has elapsed. Comments are flushed without waiting.
    pub(in crate::tui_shell) fn tick_batch(&mut self, now: Instant) {
        let pace = self.console.pace();
        let tick = {
            let Some(batch) = self.batch.as_mut() else {
                return;
            };
            if now < batch.next_due {
                Tick::Wait
            } else {
                loop {
                    match self.console.step_batch(&mut batch.queue) {
                        BatchStep::Noted => continue,
                        BatchStep::Executed => {
                            batch.next_due = now + pace;
                            break Tick::Paced;
                        }
                        BatchStep::Done => break Tick::Finished,
                    }
                }
            }
        };

        match tick {
            Tick::Wait => {}
            Tick::Paced => self.scroll_back = 0,
            Tick::Finished => {
                self.batch = None;
                self.status = Some("batch finished".to_string());
                tracing::info!("batch drained");
            }
        }
        self.clamp_browser_selection();
    }
}
