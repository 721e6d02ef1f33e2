use super::*;

impl App {
    pub(in crate::tui_shell) fn open_modal(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.modal = Some(Modal {
            title: title.into(),
            lines,
            scroll: 0,
            kind: ModalKind::Viewer,
            input: Input::default(),
        });
    }

    pub(in crate::tui_shell) fn open_text_input_modal(
        &mut self,
        title: impl Into<String>,
        prompt: impl Into<String>,
        action: TextInputAction,
        initial: Option<String>,
        mut lines: Vec<String>,
    ) {
        lines.push(String::new());
        lines.push("Enter to accept; Esc to cancel.".to_string());

        let mut input = Input::default();
        if let Some(s) = initial {
            input.set(s);
        }

        self.modal = Some(Modal {
            title: title.into(),
            lines,
            scroll: 0,
            kind: ModalKind::TextInput {
                action,
                prompt: prompt.into(),
            },
            input,
        });
    }

    pub(in crate::tui_shell) fn open_confirm_modal(
        &mut self,
        title: impl Into<String>,
        mut lines: Vec<String>,
        action: PendingAction,
    ) {
        lines.push(String::new());
        lines.push("Enter to confirm; Esc to cancel.".to_string());
        self.modal = Some(Modal {
            title: title.into(),
            lines,
            scroll: 0,
            kind: ModalKind::ConfirmAction { action },
            input: Input::default(),
        });
    }

    pub(in crate::tui_shell) fn open_script_prompt(&mut self) {
        let initial = self
            .console
            .pending_script()
            .map(|p| p.display().to_string());
        self.open_text_input_modal(
            "Run script",
            "path: ",
            TextInputAction::ScriptPath,
            initial,
            vec!["Script file to execute line by line.".to_string()],
        );
    }

    pub(in crate::tui_shell) fn submit_text_input(&mut self, action: TextInputAction, value: String) {
        match action {
            TextInputAction::ScriptPath => {
                let path = std::path::PathBuf::from(value);
                if !self.console.select_script(&path) {
                    self.scroll_back = 0;
                    return;
                }
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.open_confirm_modal(
                    "Run script",
                    vec![format!("Execute {}?", name)],
                    PendingAction::RunScript,
                );
            }
        }
    }

    pub(in crate::tui_shell) fn confirm_action(&mut self, action: PendingAction) {
        match action {
            PendingAction::RunScript => {
                if self.batch_running() {
                    self.status =
                        Some("a batch is already running; wait for it to finish".to_string());
                    self.console.clear_script_selection();
                    return;
                }
                self.scroll_back = 0;
                if let Some(queue) = self.console.take_script_batch() {
                    self.start_batch(queue);
                }
            }
        }
    }

    pub(in crate::tui_shell) fn cancel_action(&mut self, action: PendingAction) {
        match action {
            PendingAction::RunScript => self.console.clear_script_selection(),
        }
    }

    pub(in crate::tui_shell) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = None;
    }
}
