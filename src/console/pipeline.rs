use super::*;

pub const DEFAULT_SUCCESS: &str = "command executed successfully";

#[derive(Debug)]
pub enum Submission {
    Handled,
    /// Multi-line input; the caller drives it with pacing.
    Batch(BatchQueue),
}

impl<G: Gateway> Console<G> {
    /// One submit from the input line. Embedded newlines turn the input into
    /// a batch instead of a single command.
    pub fn submit_interactive(&mut self, input: &str) -> Submission {
        if input.contains('\n') {
            return Submission::Batch(BatchQueue::from_text(input));
        }
        match classify(input) {
            Disposition::Blank => {}
            Disposition::Comment(text) => {
                self.transcript.push(EntryKind::Comment, text);
            }
            Disposition::Local(_) | Disposition::Remote(_) => {
                self.submit_one(input, true);
            }
        }
        Submission::Handled
    }

    /// Runs a single command line to completion. The command entry is always
    /// appended before any gateway call is made.
    pub fn submit_one(&mut self, cmd: &str, record_history: bool) {
        let cmd = cmd.trim();
        if cmd.is_empty() {
            return;
        }
        if record_history {
            self.history.push(cmd);
        }
        self.transcript
            .push(EntryKind::Command, format!("{} {}", PROMPT, cmd));

        if let Some(local) = LocalCommand::parse(cmd) {
            self.run_local(local);
            return;
        }
        self.dispatch_remote(cmd);
    }

    fn run_local(&mut self, cmd: LocalCommand) {
        match cmd {
            LocalCommand::Clear => self.transcript.clear(),
            LocalCommand::Help => self.transcript.push(EntryKind::Success, HELP_TEXT),
        }
    }

    fn dispatch_remote(&mut self, cmd: &str) {
        let intent = match session_intent(cmd) {
            Ok(intent) => intent,
            Err(err) => {
                self.transcript.push(EntryKind::Error, format!("{:#}", err));
                return;
            }
        };

        let accepted = match self.gateway.execute(cmd) {
            Ok(resp) => match resp.error_message() {
                Some(msg) => {
                    self.transcript.push(EntryKind::Error, msg);
                    false
                }
                None => {
                    let text = resp.output_text().unwrap_or(DEFAULT_SUCCESS);
                    self.transcript.push(EntryKind::Success, text);
                    true
                }
            },
            Err(err) => {
                tracing::warn!(command = cmd, error = %format!("{:#}", err), "command transport failure");
                self.transcript.push(
                    EntryKind::Error,
                    format!(
                        "connection error: {:#}\nmake sure the backend is running at {}",
                        err,
                        self.gateway.base_url()
                    ),
                );
                false
            }
        };

        match intent {
            Some(SessionIntent::Login(creds)) if accepted => {
                tracing::info!(user = %creds.user, mount_id = %creds.mount_id, "session started");
                self.session = Some(Session {
                    username: creds.user,
                    mount_id: creds.mount_id,
                });
            }
            Some(SessionIntent::Logout) => {
                if !accepted {
                    tracing::info!("gateway reported a logout failure; clearing session anyway");
                }
                self.end_session();
            }
            _ => {}
        }
    }

    /// Clears the session and puts the browser back to its initial state.
    pub fn end_session(&mut self) {
        if let Some(s) = self.session.take() {
            tracing::info!(user = %s.username, "session ended");
        }
        self.navigator.reset();
    }
}

#[cfg(test)]
#[path = "../tests/console/pipeline_tests.rs"]
mod tests;
