use crate::api::types::ChartRange;
use crate::ui::state::ChartView;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Line chart of the speak series: one line for total messages, one for
/// valid messages. Y bounds come from the server (`max_speaks`/`min_speaks`),
/// so the chart scale matches what the backend computed for the range.
pub fn render_speak_chart(
    frame: &mut Frame,
    area: Rect,
    chart: Option<&ChartView>,
    selected: ChartRange,
    recomputing: bool,
) {
    let title = if recomputing {
        " Speaks - recomputing... ".to_string()
    } else {
        format!(" Speaks - {} ", selected.label())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(view) = chart else {
        let placeholder = Paragraph::new("waiting for data...")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    };

    if view.points.is_empty() {
        let placeholder = Paragraph::new("No data!")
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    let messages: Vec<(f64, f64)> = view
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.message_count as f64))
        .collect();
    let valid: Vec<(f64, f64)> = view
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.valid_count as f64))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("messages")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&messages),
        Dataset::default()
            .name("valid")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&valid),
    ];

    let x_max = (view.points.len().saturating_sub(1)) as f64;
    let y_min = view.min_speaks as f64;
    // Guard against a degenerate scale when the server rounds both bounds
    // to the same hundred.
    let y_max = (view.max_speaks as f64).max(y_min + 1.0);

    let first_date = view.points.first().map(|p| p.date.as_str()).unwrap_or("");
    let last_date = view.points.last().map(|p| p.date.as_str()).unwrap_or("");

    let widget = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled(first_date, Style::default().fg(Color::DarkGray)),
                    Span::styled(last_date, Style::default().fg(Color::DarkGray)),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{}", view.min_speaks), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{}", view.max_speaks), Style::default().fg(Color::DarkGray)),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(widget, inner);
}
