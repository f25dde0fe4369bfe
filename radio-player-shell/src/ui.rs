use radio_player_core::PlaybackState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{display, router::Router, state::AppState};

/// Draw the TUI interface
pub fn draw(f: &mut Frame, state: &AppState, router: &Router) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Route content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Key help
        ])
        .split(f.area());

    router.current().render(f, chunks[0], state);
    draw_status(f, chunks[1], state);
    draw_help(f, chunks[2], router);
}

/// Draw the status bar
fn draw_status(f: &mut Frame, area: Rect, state: &AppState) {
    let status = &state.status;
    let state_color = match status.state {
        PlaybackState::Playing => Color::Green,
        PlaybackState::Paused => Color::Yellow,
        PlaybackState::Idle => Color::DarkGray,
    };

    let mut spans = vec![Span::styled(
        format!(" {} {} ", display::state_glyph(status.state), status.state),
        Style::default().fg(state_color).add_modifier(Modifier::BOLD),
    )];
    if let Some(station) = &status.station {
        spans.push(Span::styled(station.name.clone(), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!("  {}", station.stream_url),
            Style::default().fg(Color::DarkGray),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the key help of the current route
fn draw_help(f: &mut Frame, area: Rect, router: &Router) {
    let spans: Vec<Span> = router
        .current()
        .help_items()
        .into_iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(
                    format!(" {key} "),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ),
                Span::styled(format!(" {label}  "), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
