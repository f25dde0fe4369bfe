use radio_player_core::Player;
use ratatui::{
    Frame,
    crossterm::event::KeyCode,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    commands::command_names,
    completion::complete,
    display,
    executor::{Outcome, run_line},
    router::{RouteAction, RouteHandler},
    routes::log::LogRoute,
    state::AppState,
};

/// Scrollback plus the prompt line
#[derive(Debug)]
pub struct ConsoleRoute {
    commands: Vec<String>,
}

impl ConsoleRoute {
    pub fn new() -> Self {
        Self {
            commands: command_names(),
        }
    }

    fn submit(&self, state: &mut AppState, player: &mut Player) -> RouteAction {
        let prompt = display::prompt(&state.status);
        let line = state.submit();

        let mut echo = prompt.spans;
        echo.push(Span::raw(line.clone()));
        state.print([Line::from(echo)]);

        let mut out = Vec::new();
        let outcome = run_line(&line, player, &mut out);
        state.print(out);

        match outcome {
            Outcome::Continue => RouteAction::None,
            Outcome::ShowLog => RouteAction::Push(Box::new(LogRoute)),
            Outcome::Quit => RouteAction::Quit,
        }
    }

    fn autocomplete(&self, state: &mut AppState, player: &Player) {
        let ids = player.station_ids();
        let Some(completion) = complete(&state.input.text, &self.commands, &ids) else {
            return;
        };

        if !completion.candidates.is_empty() {
            state.print([Line::from(Span::styled(
                completion.candidates.join("  "),
                Style::default().fg(Color::Gray),
            ))]);
        }
        state.input.set(completion.line);
    }
}

impl RouteHandler for ConsoleRoute {
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        draw_console(frame, area, state);
    }

    fn handle_input(
        &mut self,
        key: KeyCode,
        state: &mut AppState,
        player: &mut Player,
    ) -> anyhow::Result<RouteAction> {
        match key {
            KeyCode::Enter => return Ok(self.submit(state, player)),
            KeyCode::Tab => self.autocomplete(state, player),
            KeyCode::Char(c) => state.input.insert(c),
            KeyCode::Backspace => state.input.backspace(),
            KeyCode::Delete => state.input.delete(),
            KeyCode::Left => state.input.left(),
            KeyCode::Right => state.input.right(),
            KeyCode::Home => state.input.home(),
            KeyCode::End => state.input.end(),
            KeyCode::Up => state.history_prev(),
            KeyCode::Down => state.history_next(),
            _ => {}
        }
        Ok(RouteAction::None)
    }

    fn name(&self) -> &str {
        "Console"
    }

    fn help_items(&self) -> Vec<(&str, &str)> {
        vec![
            ("Tab", "Complete"),
            ("↑/↓", "History"),
            ("help", "Commands"),
            ("Ctrl+C", "Quit"),
        ]
    }
}

/// Draw the scrollback with the prompt line underneath
pub fn draw_console(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" radio-player ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Scrollback
            Constraint::Length(1), // Prompt
        ])
        .split(inner);

    let visible = chunks[0].height as usize;
    let start = state.console.len().saturating_sub(visible);
    f.render_widget(Paragraph::new(state.console[start..].to_vec()), chunks[0]);

    let prompt = display::prompt(&state.status);
    let prompt_width = prompt.width() as u16;
    let mut spans = prompt.spans;
    spans.push(Span::raw(state.input.text.clone()));
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);

    let before_cursor: String = state.input.text.chars().take(state.input.cursor).collect();
    let cursor_offset = Line::from(before_cursor).width();
    let x = (chunks[1].x + prompt_width + cursor_offset as u16).min(chunks[1].right().saturating_sub(1));
    f.set_cursor_position(Position::new(x, chunks[1].y));
}
