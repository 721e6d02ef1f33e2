use super::Input;

#[derive(Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) scroll: usize,
    pub(in crate::tui_shell) kind: ModalKind,
    pub(in crate::tui_shell) input: Input,
}

#[derive(Debug)]
pub(in crate::tui_shell) enum ModalKind {
    Viewer,
    TextInput {
        action: TextInputAction,
        prompt: String,
    },
    ConfirmAction {
        action: PendingAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum TextInputAction {
    ScriptPath,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum PendingAction {
    RunScript,
}
