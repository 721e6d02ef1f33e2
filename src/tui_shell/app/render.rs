use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(frame, app, rows[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);
    draw_console(frame, app, panels[0]);
    draw_browser(frame, app, panels[1]);

    let status = app.status.as_deref().unwrap_or("");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            status,
            Style::default().fg(Color::Gray),
        ))),
        rows[2],
    );

    if let Some(m) = &app.modal {
        dim_frame(frame);
        modal::draw_modal(frame, m);
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("MIA", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
        Span::raw(app.console.gateway().base_url().to_string()),
        Span::raw("  "),
    ];
    match app.console.session() {
        Some(s) => spans.push(Span::styled(
            format!("{}@{}", s.username, s.mount_id),
            Style::default().fg(Color::Green),
        )),
        None => spans.push(Span::styled(
            "not logged in",
            Style::default().fg(Color::DarkGray),
        )),
    }
    if let Some(batch) = &app.batch {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(
                "batch {}/{}",
                batch.queue.total() - batch.queue.remaining(),
                batch.queue.total()
            ),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

fn entry_style(kind: EntryKind) -> Style {
    match kind {
        EntryKind::Command => Style::default().fg(Color::Cyan),
        EntryKind::Comment => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        EntryKind::Success => Style::default().fg(Color::White),
        EntryKind::Error => Style::default().fg(Color::Red),
    }
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

/// First rendered line of the transcript; `scroll_back` counts lines up from
/// the bottom.
fn transcript_offset(total: usize, height: usize, scroll_back: usize) -> usize {
    total.saturating_sub(height).saturating_sub(scroll_back)
}

fn draw_console(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Console;
    let block = panel_block("Console", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    let mut lines: Vec<Line> = Vec::new();
    for entry in app.console.transcript().entries() {
        let style = entry_style(entry.kind);
        for (i, text) in entry.text.lines().enumerate() {
            if i == 0 {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("[{}] ", entry.clock()),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(text.to_string(), style),
                ]));
            } else {
                lines.push(Line::from(Span::styled(format!("            {}", text), style)));
            }
        }
    }
    let height = parts[0].height as usize;
    let offset = transcript_offset(lines.len(), height, app.scroll_back);
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(height).collect();
    frame.render_widget(Paragraph::new(visible), parts[0]);

    let input_line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(Color::Yellow)),
        Span::raw(" "),
        Span::raw(app.input.buf.as_str()),
    ]);
    frame.render_widget(
        Paragraph::new(input_line).block(Block::default().borders(Borders::TOP)),
        parts[1],
    );

    if focused && app.modal.is_none() {
        let x = PROMPT.len() as u16 + 1 + app.input.cursor as u16;
        frame.set_cursor_position((parts[1].x + x, parts[1].y + 1));
    }
}

fn draw_browser(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Browser;
    let (session, navigator) = match app.console.browse_access() {
        BrowseAccess::Open { session, navigator } => (session, navigator),
        BrowseAccess::Restricted => {
            let lines = vec![
                Line::from(Span::styled(
                    "Access restricted",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("Log in from the console to browse disks:"),
                Line::from(Span::styled(
                    "login -user=<user> -pass=<password> -id=<id>",
                    Style::default().fg(Color::Cyan),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .block(panel_block("Browser", focused)),
                area,
            );
            return;
        }
    };

    let cursor = navigator.cursor();
    let mut crumbs = vec!["Disks".to_string()];
    if let Some(d) = &cursor.selected_disk {
        crumbs.push(d.name.clone());
    }
    if let Some(p) = &cursor.selected_partition {
        crumbs.push(p.name.clone());
        crumbs.push(cursor.current_path.clone());
    }

    let mut lines = vec![
        Line::from(Span::styled(
            format!("user {}  mount {}", session.username, session.mount_id),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            crumbs.join(" > "),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];
    let header_len = lines.len();

    let rows: Vec<String> = match navigator.state() {
        NavState::DiskList => {
            if let Some(err) = navigator.load_error() {
                lines.push(Line::from(Span::styled(
                    err.to_string(),
                    Style::default().fg(Color::Red),
                )));
                lines.push(Line::from("press r to retry"));
            }
            navigator
                .disks()
                .iter()
                .map(|d| {
                    format!(
                        "{}  {}  fit {}  {}/{} mounted",
                        d.name,
                        format_capacity(d.capacity_bytes),
                        d.fit_strategy,
                        d.mounted_partitions,
                        d.partitions.len()
                    )
                })
                .collect()
        }
        NavState::PartitionList => navigator
            .partitions()
            .iter()
            .map(|p| {
                let mount = match p.active_mount_id() {
                    Some(id) => format!("mounted {}", id),
                    None => "unmounted".to_string(),
                };
                format!(
                    "{}  type {}  {}  fit {}  {}",
                    p.name,
                    p.partition_type,
                    format_capacity(p.size_bytes),
                    p.fit_strategy,
                    mount
                )
            })
            .collect(),
        NavState::DirectoryBrowse => navigator
            .listing()
            .iter()
            .map(|e| {
                if e.is_folder() {
                    format!("[D] {}  #{}", e.name, e.permissions)
                } else {
                    format!(
                        "[F] {}  {}  #{}",
                        e.name,
                        format_bytes(e.size_bytes),
                        e.permissions
                    )
                }
            })
            .collect(),
    };

    if rows.is_empty() && navigator.load_error().is_none() {
        let empty = match navigator.state() {
            NavState::DiskList => "(no disks)",
            NavState::PartitionList => "(no partitions)",
            NavState::DirectoryBrowse => "(empty folder)",
        };
        lines.push(Line::from(Span::styled(
            empty,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let selected = app.browser_selected.min(rows.len().saturating_sub(1));
    for (i, row) in rows.into_iter().enumerate() {
        let style = if i == selected && focused {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(row, style)));
    }

    let block = panel_block("Browser", focused);
    let inner_h = block.inner(area).height as usize;
    let selected_line = header_len + selected;
    let offset = (selected_line + 1).saturating_sub(inner_h);
    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((offset as u16, 0)),
        area,
    );
}

fn dim_frame(frame: &mut ratatui::Frame) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.modifier |= Modifier::DIM;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/app/render_tests.rs"]
mod tests;
