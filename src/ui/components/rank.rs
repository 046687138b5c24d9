use crate::api::types::RankWindow;
use crate::ui::state::RankView;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Leaderboard table. Rows keep response order; the rank column is the
/// 1-indexed position in that order.
pub fn render_rank(frame: &mut Frame, area: Rect, rank: Option<&RankView>, selected: RankWindow) {
    let block = Block::default()
        .title(format!(" Top speakers - {} ", selected.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(view) = rank else {
        let placeholder = Paragraph::new("waiting for data...")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    };

    if view.entries.is_empty() {
        let placeholder = Paragraph::new("No data!")
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    let header_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("#").style(header_style),
        Cell::from("Id").style(header_style),
        Cell::from("Name").style(header_style),
        Cell::from("Count").style(header_style),
    ]);

    let rows: Vec<Row> = view
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let rank_color = match i {
                0 => Color::Yellow,
                1 | 2 => Color::White,
                _ => Color::DarkGray,
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)).style(Style::default().fg(rank_color)),
                Cell::from(format!("{}", entry.id)),
                Cell::from(entry.name.clone()),
                Cell::from(format!("{}", entry.count)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        vec![
            Constraint::Length(4),
            Constraint::Length(12),
            Constraint::Fill(1),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .column_spacing(1);

    frame.render_widget(table, inner);
}
