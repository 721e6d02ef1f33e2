use std::io;

use anyhow::Context;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick_batch(Instant::now());
        app.sync_browser();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            tracing::info!("console closed");
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                Event::Paste(text) => app.paste(&text),
                _ => {}
            }
        }
    }
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.quit = true;
            return;
        }
        KeyCode::Char('o') if ctrl => {
            app.open_script_prompt();
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Console => handle_console_key(app, key),
        Focus::Browser => handle_browser_key(app, key),
    }
}

fn handle_console_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            if !app.input.buf.is_empty() {
                app.input.clear();
                app.console.history_mut().reset_cursor();
            } else {
                app.quit = true;
            }
        }

        KeyCode::Enter => app.submit_input(),

        KeyCode::Up => {
            app.console.history_mut().recall_up(&mut app.input.buf);
            app.input.end();
        }
        KeyCode::Down => {
            app.console.history_mut().recall_down(&mut app.input.buf);
            app.input.end();
        }

        KeyCode::PageUp => {
            app.scroll_back = app.scroll_back.saturating_add(10);
        }
        KeyCode::PageDown => {
            app.scroll_back = app.scroll_back.saturating_sub(10);
        }

        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.home(),
        KeyCode::End => app.input.end(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.clear();
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.insert_char(c);
        }

        _ => {}
    }
}

fn handle_browser_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.focus = Focus::Console,
        KeyCode::Up => app.browser_move(-1),
        KeyCode::Down => app.browser_move(1),
        KeyCode::Enter => app.browser_open(),
        KeyCode::Backspace | KeyCode::Left => app.browser_back(),
        KeyCode::Home => app.browser_root(),
        KeyCode::Char('r') => app.browser_refresh(),
        KeyCode::Char('c') => app.browser_read_selected(),
        _ => {}
    }
}

impl App {
    pub(in crate::tui_shell) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Console => Focus::Browser,
            Focus::Browser => Focus::Console,
        };
    }

    pub(in crate::tui_shell) fn submit_input(&mut self) {
        let line = self.input.take();
        self.scroll_back = 0;
        self.run_submission(&line);
    }

    /// Multi-line pastes land at the cursor and the whole input goes to the
    /// batch path; anything else is typed into the input line.
    pub(in crate::tui_shell) fn paste(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        if self.focus != Focus::Console || self.modal.is_some() {
            if let Some(m) = self.modal.as_mut() {
                m.input.insert_str(text.lines().next().unwrap_or(""));
            }
            return;
        }
        if !text.trim_end_matches('\n').contains('\n') {
            self.input.insert_str(text.trim_end_matches('\n'));
            return;
        }
        self.input.insert_str(&text);
        let combined = self.input.take();
        self.scroll_back = 0;
        self.run_submission(&combined);
    }

    fn run_submission(&mut self, line: &str) {
        let was_logged_in = self.console.is_logged_in();
        match self.console.submit_interactive(line) {
            Submission::Handled => {}
            Submission::Batch(queue) => self.start_batch(queue),
        }
        if was_logged_in != self.console.is_logged_in() {
            self.browser_selected = 0;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/app/event_loop_tests.rs"]
mod tests;
