//! Command console core: transcript, dispatch pipeline, session and the
//! hierarchy browser. Front ends (TUI, headless CLI) only drive this state.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::remote::Gateway;

mod batch;
mod browse;
mod history;
mod interpreter;
mod navigation;
mod params;
mod pipeline;
mod script;
mod session;
mod transcript;

#[cfg(test)]
mod testing;

pub use self::batch::{BatchQueue, BatchStep, BatchSummary};
pub use self::browse::{Browse, BrowseAccess};
pub use self::history::{CommandHistory, Recall, RecallState, recall};
pub use self::interpreter::{Disposition, HELP_TEXT, LocalCommand, PROMPT, classify};
pub use self::navigation::{
    EntryOutcome, NavState, NavigationCursor, Navigator, join_path, parent_path,
};
pub use self::params::parse_params;
pub use self::pipeline::Submission;
pub use self::script::has_allowed_extension;
pub use self::session::{Credentials, Session, SessionIntent, session_intent};
pub use self::transcript::{EntryKind, Transcript, TranscriptCursor, TranscriptEntry};

pub struct Console<G> {
    gateway: G,
    transcript: Transcript,
    history: CommandHistory,
    session: Option<Session>,
    navigator: Navigator,
    pending_script: Option<PathBuf>,
    script_extensions: Vec<String>,
    pace: Duration,
}

impl<G: Gateway> Console<G> {
    pub fn new(gateway: G, cfg: &ClientConfig) -> Self {
        Self {
            gateway,
            transcript: Transcript::default(),
            history: CommandHistory::default(),
            session: None,
            navigator: Navigator::default(),
            pending_script: None,
            script_extensions: cfg.script_extensions.clone(),
            pace: cfg.pace(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn pace(&self) -> Duration {
        self.pace
    }
}
