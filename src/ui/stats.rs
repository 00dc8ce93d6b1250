//! Stats screen: renders whichever fetch state is current.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::RepositoryStats;
use crate::ui::theme::{
    COLOR_BORDER, COLOR_ERROR, COLOR_PRIMARY, COLOR_TEXT, COLOR_TEXT_SECONDARY,
    COLOR_TEXT_TERTIARY,
};
use crate::ui::SPINNER_FRAMES;
use crate::view_state::FetchState;

const CARD_WIDTH: u16 = 64;
const CARD_HEIGHT: u16 = 16;

/// Render the stats card for the current [`FetchState`].
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_card(frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Repository Stats ",
            Style::default().fg(COLOR_TEXT).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        format!("{} • live from the GitHub API", app.config.slug()),
        Style::default().fg(COLOR_PRIMARY),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, header);

    match app.stats_state() {
        Some(FetchState::Loading) | None => render_loading(frame, body, app.spinner_frame),
        Some(FetchState::Loaded(stats)) => render_stats(frame, body, &stats),
        Some(FetchState::Failed { message }) => render_error(frame, body, &message),
    }

    let hints = match app.stats_state() {
        Some(FetchState::Failed { .. }) => "r: retry   esc: back   q: quit",
        _ => "esc: back   q: quit",
    };
    let footer_line = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(COLOR_TEXT_TERTIARY),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer_line, footer);
}

fn render_loading(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{spinner} Fetching stats..."),
            Style::default().fg(COLOR_TEXT_SECONDARY),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(COLOR_ERROR))),
        Line::from(""),
        Line::from(Span::styled(
            "press r to retry",
            Style::default().fg(COLOR_TEXT_SECONDARY),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_stats(frame: &mut Frame, area: Rect, stats: &RepositoryStats) {
    let cells: [(&str, String); 6] = [
        ("STARS", stats.stars.to_string()),
        ("FORKS", stats.forks.to_string()),
        ("WATCHERS", stats.watchers.to_string()),
        ("SIZE", format!("{}MB", stats.size_megabytes)),
        ("OPEN ISSUES", stats.open_issues.to_string()),
        ("LAST UPDATED", stats.last_updated_display.clone()),
    ];

    let rows: [Rect; 3] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .flex(Flex::Center)
    .areas(area);

    for (row_index, row) in rows.iter().enumerate() {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(*row);
        render_stat_cell(frame, left, &cells[row_index * 2]);
        render_stat_cell(frame, right, &cells[row_index * 2 + 1]);
    }
}

fn render_stat_cell(frame: &mut Frame, area: Rect, cell: &(&str, String)) {
    let (label, value) = cell;
    let lines = vec![
        Line::from(Span::styled(
            value.clone(),
            Style::default()
                .fg(COLOR_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(*label, Style::default().fg(COLOR_TEXT_TERTIARY))),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
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
