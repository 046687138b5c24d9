use crate::api::types::SummaryCounters;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_summary(frame: &mut Frame, area: Rect, summary: Option<&SummaryCounters>) {
    let block = Block::default()
        .title(" Today ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(counters) = summary else {
        let placeholder = Paragraph::new("waiting for data...")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(inner);

    render_counter(frame, chunks[0], "Messages", counters.speak_today_count, Color::Cyan);
    render_counter(frame, chunks[1], "Sign-ins", counters.sign_today_count, Color::Green);
    render_counter(frame, chunks[2], "Points", counters.point_today_total, Color::Yellow);
    render_counter(frame, chunks[3], "Score", counters.score_today_total, Color::Magenta);
}

fn render_counter(frame: &mut Frame, area: Rect, label: &str, value: i64, color: Color) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{}", value),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let counter = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(counter, area);
}
