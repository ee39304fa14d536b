use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(80, 90, size);
    let block = Block::default().title("snooker-scoreboard").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block.clone(), area);
    let inner_all = inner(area);

    // Logo is left-aligned text, centered as a block.
    let logo = r#"
  ____                    _
 / ___| _ __   ___   ___ | | _____ _ __
 \___ \| '_ \ / _ \ / _ \| |/ / _ \ '__|
  ___) | | | | (_) | (_) |   <  __/ |
 |____/|_| |_|\___/ \___/|_|\_\___|_|
"#;

    let logo_lines: Vec<Line> = logo
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Green))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(logo_lines.len() as u16 + 1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(inner_all);

    let logo_para =
        Paragraph::new(logo_lines).wrap(Wrap { trim: false }).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    let selected = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().add_modifier(Modifier::DIM);

    let config_items = app.menu_items_display();
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled("Settings:", bold)));
    for (i, it) in config_items.iter().enumerate() {
        let style = if i == app.menu_index { selected } else { Style::default() };
        lines.push(Line::from(Span::styled(it.clone(), style)));
    }
    lines.push(Line::from(""));

    let players = app.engine().players();
    lines.push(Line::from(Span::styled(format!("Players ({}):", players.len()), bold)));
    if players.is_empty() {
        lines.push(Line::from(Span::styled("No players yet. Press A to add one.", dim)));
    }
    for (seat, p) in players.iter().enumerate() {
        let style = if app.selected_seat() == Some(seat) { selected } else { Style::default() };
        lines.push(Line::from(Span::styled(format!("{}. {}", seat + 1, p.name()), style)));
    }
    if !app.engine().has_enough_players() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Add at least two players to start a frame.",
            Style::default().fg(Color::LightRed),
        )));
    }
    if app.engine().game_started() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Frame in progress. Settings are locked until it ends.",
            Style::default().fg(Color::LightRed),
        )));
    }
    if let Some(err) = app.action_error() {
        lines.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let body = Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(body, rows[1]);

    let hints = vec![
        Line::from(Span::styled("[Enter] Start  [A] Add player  [X] Remove player", dim)),
        Line::from(Span::styled("[↑/↓] Move  [+/-] Toggle  [?] Help  [Q] Quit", dim)),
    ];
    let hints_para = Paragraph::new(hints).alignment(Alignment::Center);
    f.render_widget(hints_para, rows[2]);

    if app.name_entry_active() {
        draw_name_entry(f, app);
    } else if app.help_open() {
        super::table::draw_help(f);
    }
}

fn draw_name_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 30, f.area());
    let current = app.name_entry_text().unwrap_or("");
    let lines = vec![
        Line::from(format!("Name: {current}_")),
        Line::from(""),
        Line::from("Enter add, Backspace delete, Esc cancel"),
    ];
    let block = Block::default().title("Add Player").borders(Borders::ALL);
    let inner_area = inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, chunks[0]);
    let error = app.name_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    let error_para = Paragraph::new(error_line).alignment(Alignment::Center);
    f.render_widget(error_para, chunks[1]);
}
