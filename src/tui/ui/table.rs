use crate::balls::Ball;
use crate::player::Player;
use crate::tui::app::{AppState, FOUL_OPTIONS};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{ball_style, centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_height: u16 = 2 + 2;
    let status_height: u16 = 3 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Length(3),             // ball keys
            Constraint::Min(3),                // players
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let engine = app.engine();
    let mut header_lines: Vec<Line> = Vec::new();
    let mode = if engine.config().enforce_rules { "Rules on" } else { "Rules off" };
    header_lines.push(Line::from(format!(
        "Reds left: {}   On: {}   {}   Fouls to: {}",
        engine.reds_remaining(),
        engine.requirement().label(),
        mode,
        engine.config().foul_award_policy.title(),
    )));
    let ball_on = match engine.current_ball_on() {
        Some(on) if engine.config().enforce_rules => {
            let mut line = vec![
                Span::raw("Ball on: "),
                Span::styled(format!("{} ({})", on.ball, on.points), ball_style(on.ball)),
            ];
            if engine.respotted_black_active() {
                line.push(Span::styled(
                    "   RE-SPOTTED BLACK",
                    Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(line)
        }
        _ => Line::from(""),
    };
    header_lines.push(ball_on);
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("snooker-scoreboard").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_ball_keys(f, chunks[1], app);

    let players_area = chunks[2];
    f.render_widget(Block::default().title("Players").borders(Borders::ALL), players_area);
    let total = engine.players().len().max(1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..total).map(|_| Constraint::Length(1)).collect::<Vec<_>>())
        .split(inner(players_area));
    for (idx, p) in engine.players().iter().enumerate() {
        if let Some(row) = rows.get(idx) {
            render_player_row(f, *row, app, idx, p);
        }
    }

    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(status_inner);

    let mut left_info = if engine.game_over() {
        vec![Line::from("Frame over. Press N for a new frame.")]
    } else if !engine.game_started() {
        vec![Line::from("No frame in progress. Press M to set one up.")]
    } else {
        let name = engine.players().get(engine.current()).map(|p| p.name()).unwrap_or("");
        vec![Line::from(format!("At the table: {name}"))]
    };

    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let action_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    if engine.game_started() {
        let enforce = engine.config().enforce_rules;
        left_info.push(Line::from(vec![
            Span::raw("Actions: "),
            Span::styled("F foul", action_style(true)),
            Span::raw(" • "),
            Span::styled("Space end turn", action_style(true)),
            Span::raw(" • "),
            Span::styled("B free ball", action_style(enforce && engine.can_use_free_ball())),
            Span::raw(" • "),
            Span::styled("O off table", action_style(enforce && engine.can_use_off_table_foul())),
            Span::raw(" • "),
            Span::styled("R replay", action_style(engine.can_use_replay())),
        ]));
    }

    let right_keys = vec![
        Line::from(""),
        Line::from("U undo • C concede • N new frame"),
        Line::from("? help • H history • M menu"),
    ];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.foul_picker_open() {
        draw_foul_picker(f, app);
    } else if engine.game_over() {
        draw_standings(f, app);
    }
}

fn draw_ball_keys(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Pot").borders(Borders::ALL);
    let mut spans: Vec<Span> = Vec::with_capacity(Ball::ALL.len() * 2);
    for (i, ball) in Ball::ALL.iter().copied().enumerate() {
        let mut style = ball_style(ball);
        style = if app.pot_enabled(ball) {
            style.add_modifier(Modifier::BOLD)
        } else {
            style.add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(format!("{} {} ({})", i + 1, ball, ball.points()), style));
        spans.push(Span::raw("   "));
    }
    let para = Paragraph::new(Line::from(spans)).block(block).alignment(Alignment::Center);
    f.render_widget(para, area);
}

fn render_player_row(f: &mut Frame, row: Rect, app: &AppState, idx: usize, p: &Player) {
    let engine = app.engine();
    let is_current = engine.game_started() && idx == engine.current();
    let marker = if is_current { "▶ " } else { "  " };
    let crown = if engine.players().len() > 1 && engine.is_leading(p.id()) { " ♛" } else { "" };
    let text = format!(
        "{marker}{:<20} Score: {:>4}   Break: {:>3}   High: {:>3}   Fouls: {:>2}{crown}",
        p.name(),
        p.score(),
        engine.current_break(p.id()),
        engine.highest_break(p.id()),
        engine.foul_count(p.id()),
    );
    let style = if is_current {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    f.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), row);
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let engine = app.engine();
    let entries = engine.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries.iter().rev() {
            lines.push(Line::from(engine.describe_action(entry)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_foul_picker(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 40, f.area());
    let block = Block::default().title("Foul").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    for (points, ball) in FOUL_OPTIONS {
        let label = match ball {
            Some(ball) => format!("{points}: foul on {ball}"),
            None => format!("{points}: foul"),
        };
        let style = if app.foul_enabled(points) {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        lines.push(Line::from(Span::styled(label, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "4-7 choose • Esc cancel",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_standings(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 50, f.area());
    let block = Block::default().title("Frame Over").borders(Borders::ALL);
    let engine = app.engine();
    let mut lines: Vec<Line> = Vec::new();
    for (rank, p) in engine.final_standings().into_iter().enumerate() {
        let style = if rank == 0 {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let text = format!(
            "{}. {}  {}  (high break {})",
            rank + 1,
            p.name(),
            p.score(),
            engine.highest_break(p.id())
        );
        lines.push(Line::from(Span::styled(text, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "N new frame • U undo • Q quit",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- 1-7: pot Red, Yellow, Green, Brown, Blue, Pink, Black"),
        Line::from("- F: foul (then 4-7)"),
        Line::from("- Space: end turn"),
        Line::from("- U: undo last score"),
        Line::from("- B: free ball"),
        Line::from("- O: ball off the table"),
        Line::from("- R: previous player plays again"),
        Line::from("- C: concede / end frame"),
        Line::from("- N: new frame"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from(Span::styled("Setup:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: toggle setting"),
        Line::from("- A: add player"),
        Line::from("- X / Delete: remove selected player"),
        Line::from("- Enter: start frame"),
        Line::from("- M / Esc: back to table"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
