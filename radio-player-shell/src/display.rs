//! Text rendering shared by the interactive console and the script runner

use radio_player_core::{PlaybackState, PlaybackStatus, Station, config::PROMPT_BASE};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Status glyph shown in the prompt
pub fn state_glyph(state: PlaybackState) -> &'static str {
    let playing = state == PlaybackState::Playing;
    if cfg!(windows) {
        if playing { ">" } else { "ll" }
    } else if playing {
        "\u{25B6}"
    } else {
        "\u{23F8}"
    }
}

/// `radio-player$ ` or `radio-player[<station> <glyph>]$ `
pub fn prompt(status: &PlaybackStatus) -> Line<'static> {
    match &status.station {
        Some(station) => Line::from(vec![
            Span::raw(format!("{PROMPT_BASE}[")),
            Span::styled(station.name.clone(), Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(state_glyph(status.state), Style::default().fg(Color::Green)),
            Span::raw("]$ "),
        ]),
        None => Line::from(format!("{PROMPT_BASE}$ ")),
    }
}

pub fn error_line(message: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(message.into(), Style::default().fg(Color::Red)))
}

pub fn info_line(message: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(message.into(), Style::default().fg(Color::Cyan)))
}

/// `N. Name [id]`
fn station_heading(index: usize, station: &Station) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}", index + 1), Style::default().fg(Color::White)),
        Span::raw(". "),
        Span::styled(station.name.clone(), Style::default().fg(Color::Cyan)),
        Span::raw(" ["),
        Span::styled(station.id.clone(), Style::default().fg(Color::Gray)),
        Span::raw("]"),
    ])
}

/// Heading plus description for every station
pub fn station_list(stations: &[Station]) -> Vec<Line<'static>> {
    stations
        .iter()
        .enumerate()
        .flat_map(|(index, station)| {
            [
                station_heading(index, station),
                Line::from(Span::styled(
                    format!("   {}", station.description),
                    Style::default().fg(Color::Green),
                )),
            ]
        })
        .collect()
}

/// Every field of a station
pub fn station_details(index: usize, station: &Station) -> Vec<Line<'static>> {
    let field = |label: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!("   {label}:"), Style::default().fg(Color::Green)),
            Span::raw(" "),
            Span::styled(value.to_string(), Style::default().fg(Color::DarkGray)),
        ])
    };

    vec![
        station_heading(index, station),
        field("Description", &station.description),
        field("Website", &station.website),
        field("Facebook", &station.facebook),
        field("Twitter", &station.twitter),
        field("Stream", &station.stream_url),
    ]
}

/// `N. player` for every configured player
pub fn player_list(players: &[String]) -> Vec<Line<'static>> {
    players
        .iter()
        .enumerate()
        .map(|(index, player)| {
            Line::from(vec![
                Span::styled(format!("{}", index + 1), Style::default().fg(Color::White)),
                Span::raw(". "),
                Span::styled(player.clone(), Style::default().fg(Color::Cyan)),
            ])
        })
        .collect()
}

/// Line content without styling
pub fn plain(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}
