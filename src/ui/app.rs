use crate::api::types::{ChartRange, RankWindow};
use crate::ui::components::{render_rank, render_speak_chart, render_summary};
use crate::ui::state::AppState;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn run_tui(state: Arc<Mutex<AppState>>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the UI loop
    let result = run_app(&mut terminal, state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: Arc<Mutex<AppState>>,
) -> Result<()> {
    loop {
        // Clone state for rendering
        let current_state = {
            let state_guard = state.lock().unwrap();
            state_guard.clone()
        };

        // Render
        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Header
                    Constraint::Length(4), // Summary counters
                    Constraint::Min(10),   // Chart + leaderboard
                    Constraint::Length(3), // Footer
                ])
                .split(frame.size());

            render_header(frame, chunks[0], &current_state);
            render_summary(frame, chunks[1], current_state.summary.as_ref());

            let middle = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                .split(chunks[2]);

            render_speak_chart(
                frame,
                middle[0],
                current_state.chart.as_ref(),
                current_state.selected_range,
                current_state.recomputing,
            );
            render_rank(
                frame,
                middle[1],
                current_state.rank.as_ref(),
                current_state.selected_window,
            );

            render_footer(frame, chunks[3], &current_state);
        })?;

        // Handle input with timeout to allow for periodic updates
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(key, &state) {
                    break; // User requested quit
                }
            }
        }

        // Check if app should quit
        {
            let state_guard = state.lock().unwrap();
            if state_guard.should_quit {
                break;
            }
        }
    }

    Ok(())
}

fn render_header(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, state: &AppState) {
    let elapsed = state.last_update.elapsed();
    let header_text = Line::from(vec![
        Span::styled(
            "BOTSTAT",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" - bot activity dashboard  "),
        Span::styled(
            format!("bot {} @ {}  ", state.botid, state.target),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Updated: {:.1}s ago", elapsed.as_secs_f64()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(header_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

fn render_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, state: &AppState) {
    let status = match &state.last_error {
        Some(error) => Span::styled(error.clone(), Style::default().fg(Color::Red)),
        None => Span::styled(
            "chart [1]7d [2]30d [3]60d [r]ecompute  rank [t]oday [y]esterday [w]eek [a]ll",
            Style::default().fg(Color::DarkGray),
        ),
    };

    let footer_text = Line::from(vec![Span::raw("[Q]uit / [Esc]  "), status]);

    let footer = Paragraph::new(footer_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(footer, area);
}

fn handle_key_event(key: KeyEvent, state: &Arc<Mutex<AppState>>) -> bool {
    let mut state_guard = state.lock().unwrap();
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            state_guard.quit();
            true
        }
        KeyCode::Char('1') => {
            state_guard.select_range(ChartRange::Week);
            false
        }
        KeyCode::Char('2') => {
            state_guard.select_range(ChartRange::Month);
            false
        }
        KeyCode::Char('3') => {
            state_guard.select_range(ChartRange::TwoMonths);
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            state_guard.request_recompute();
            false
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            state_guard.select_window(RankWindow::Today);
            false
        }
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            state_guard.select_window(RankWindow::Yesterday);
            false
        }
        KeyCode::Char('w') | KeyCode::Char('W') => {
            state_guard.select_window(RankWindow::Week);
            false
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            state_guard.select_window(RankWindow::AllTime);
            false
        }
        _ => false,
    }
}
