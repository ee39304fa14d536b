use crate::balls::Ball;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Layout, Rect, Style};

pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(ratatui::prelude::Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(ratatui::prelude::Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

pub(super) fn ball_style(ball: Ball) -> Style {
    let color = match ball {
        Ball::Red => Color::Red,
        Ball::Yellow => Color::Yellow,
        Ball::Green => Color::Green,
        Ball::Brown => Color::Rgb(150, 90, 40),
        Ball::Blue => Color::Blue,
        Ball::Pink => Color::LightMagenta,
        Ball::Black => Color::Gray,
    };
    Style::default().fg(color)
}
