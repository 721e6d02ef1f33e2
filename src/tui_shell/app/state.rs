use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Focus {
    Console,
    Browser,
}

/// A batch being drained by the event loop, one executed line per pacing
/// interval.
#[derive(Debug)]
pub(in crate::tui_shell) struct PendingBatch {
    pub(in crate::tui_shell) queue: BatchQueue,
    pub(in crate::tui_shell) next_due: Instant,
}

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) console: Console<RemoteClient>,
    pub(in crate::tui_shell) focus: Focus,
    pub(in crate::tui_shell) input: Input,
    pub(in crate::tui_shell) batch: Option<PendingBatch>,

    pub(in crate::tui_shell) browser_selected: usize,
    // Lines scrolled up from the tail; 0 follows new output.
    pub(in crate::tui_shell) scroll_back: usize,

    pub(in crate::tui_shell) modal: Option<Modal>,
    pub(in crate::tui_shell) status: Option<String>,

    pub(in crate::tui_shell) quit: bool,
}

impl App {
    pub(in crate::tui_shell) fn new(console: Console<RemoteClient>) -> Self {
        Self {
            console,
            focus: Focus::Console,
            input: Input::default(),
            batch: None,
            browser_selected: 0,
            scroll_back: 0,
            modal: None,
            status: None,
            quit: false,
        }
    }
}
