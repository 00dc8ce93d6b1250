//! Home screen: the welcome card.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::theme::{
    COLOR_BORDER, COLOR_PRIMARY, COLOR_TEXT, COLOR_TEXT_SECONDARY, COLOR_TEXT_TERTIARY,
};
use crate::utils::capitalize;

const CARD_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 11;

/// Render the welcome card centered on screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_card(frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let title = capitalize(&app.config.repo);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Rust • Ratatui • Tokio",
            Style::default().fg(COLOR_PRIMARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Live repository stats, straight from the GitHub API.",
            Style::default().fg(COLOR_TEXT_SECONDARY),
        )),
        Line::from(Span::styled(
            format!("Watching {}", app.config.slug()),
            Style::default().fg(COLOR_TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "⚡ SYSTEM ONLINE",
            Style::default().fg(COLOR_PRIMARY),
        )),
        Line::from(Span::styled(
            "s: repo stats   q: quit",
            Style::default().fg(COLOR_TEXT_TERTIARY),
        )),
    ];

    let card = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(card, area);
}

fn centered_card(area: Rect) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(CARD_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(CARD_HEIGHT.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}
