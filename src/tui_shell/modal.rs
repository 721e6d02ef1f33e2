use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::PendingAction;

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &super::Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 90);
    let h = area.height.saturating_sub(6).clamp(8, 22);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    let box_area = ratatui::layout::Rect {
        x,
        y,
        width: w,
        height: h,
    };

    frame.render_widget(ratatui::widgets::Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal.title.as_str());
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
    let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;

    match &modal.kind {
        super::ModalKind::Viewer | super::ModalKind::ConfirmAction { .. } => {
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                inner,
            );
        }

        super::ModalKind::TextInput { prompt, .. } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(inner);

            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                parts[0],
            );

            let input_line = Line::from(vec![
                Span::styled(prompt.as_str(), Style::default().fg(Color::Yellow)),
                Span::raw(modal.input.buf.as_str()),
            ]);
            frame.render_widget(
                Paragraph::new(input_line)
                    .block(Block::default().borders(Borders::ALL).title("Edit")),
                parts[1],
            );

            let x = prompt.chars().count() as u16 + modal.input.cursor as u16;
            frame.set_cursor_position((parts[1].x + 1 + x, parts[1].y + 1));
        }
    }
}

enum ModalAction {
    None,
    Close,
    Confirm(PendingAction),
    Cancel(PendingAction),
    SubmitTextInput {
        action: super::TextInputAction,
        value: String,
    },
}

fn map_modal_key(m: &mut super::Modal, key: KeyEvent) -> ModalAction {
    match &mut m.kind {
        super::ModalKind::Viewer => match key.code {
            KeyCode::Esc | KeyCode::Enter => ModalAction::Close,
            KeyCode::Up => {
                m.scroll = m.scroll.saturating_sub(1);
                ModalAction::None
            }
            KeyCode::Down => {
                if m.scroll < m.lines.len().saturating_sub(1) {
                    m.scroll += 1;
                }
                ModalAction::None
            }
            KeyCode::PageUp => {
                m.scroll = m.scroll.saturating_sub(10);
                ModalAction::None
            }
            KeyCode::PageDown => {
                m.scroll = (m.scroll + 10).min(m.lines.len().saturating_sub(1));
                ModalAction::None
            }
            _ => ModalAction::None,
        },

        super::ModalKind::ConfirmAction { action } => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => ModalAction::Confirm(*action),
            KeyCode::Esc | KeyCode::Char('n') => ModalAction::Cancel(*action),
            _ => ModalAction::None,
        },

        super::ModalKind::TextInput { action, .. } => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => {
                let value = m.input.buf.trim().to_string();
                if value.is_empty() {
                    return ModalAction::None;
                }
                ModalAction::SubmitTextInput {
                    action: *action,
                    value,
                }
            }
            KeyCode::Backspace => {
                m.input.backspace();
                ModalAction::None
            }
            KeyCode::Delete => {
                m.input.delete();
                ModalAction::None
            }
            KeyCode::Left => {
                m.input.move_left();
                ModalAction::None
            }
            KeyCode::Right => {
                m.input.move_right();
                ModalAction::None
            }
            KeyCode::Home => {
                m.input.home();
                ModalAction::None
            }
            KeyCode::End => {
                m.input.end();
                ModalAction::None
            }
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    m.input.insert_char(c);
                }
                ModalAction::None
            }
            _ => ModalAction::None,
        },
    }
}

pub(super) fn handle_modal_key(app: &mut super::App, key: KeyEvent) {
    let action = {
        let Some(m) = app.modal_mut() else {
            return;
        };
        map_modal_key(m, key)
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::Confirm(pending) => {
            app.close_modal();
            app.confirm_action(pending);
        }
        ModalAction::Cancel(pending) => {
            app.close_modal();
            app.cancel_action(pending);
        }
        ModalAction::SubmitTextInput { action, value } => {
            app.close_modal();
            app.submit_text_input(action, value);
        }
    }
}
