use super::*;

impl App {
    pub(in crate::tui_shell) fn load(opts: crate::tui::TuiRunOptions) -> Result<Self> {
        let client = RemoteClient::new(&opts.config.base_url)?;
        tracing::info!(base_url = %opts.config.base_url, "console started");

        let mut app = App::new(Console::new(client, &opts.config));
        app.status = Some(
            "type `help` for commands; Tab switches panels; Ctrl+O runs a script".to_string(),
        );
        Ok(app)
    }
}
