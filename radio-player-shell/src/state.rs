use radio_player_core::{PlaybackStatus, PlayerEvent, config::SCROLLBACK_LIMIT};
use ratatui::text::Line;

/// Editable input line with a cursor counted in characters
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    fn byte_offset(&self, cursor: usize) -> usize {
        self.text
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Replace the text and move the cursor to its end
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_len();
    }

    /// Take the text, leaving the input empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

/// Application state for the shell
pub struct AppState {
    /// Latest status reported by the player
    pub status: PlaybackStatus,
    /// Console scrollback, oldest first
    pub console: Vec<Line<'static>>,
    pub input: InputState,
    /// Previously entered lines, oldest first
    pub history: Vec<String>,
    /// Position while browsing history, `None` when editing a fresh line
    pub history_pos: Option<usize>,
}

impl AppState {
    pub fn new(status: PlaybackStatus) -> Self {
        Self {
            status,
            console: Vec::new(),
            input: InputState::default(),
            history: Vec::new(),
            history_pos: None,
        }
    }

    /// Handle event from the player
    pub fn handle_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::StateChanged(status) => {
                log::debug!(
                    "Prompt update: {} ({})",
                    status.station.as_ref().map(|s| s.name.as_str()).unwrap_or("none"),
                    status.state
                );
                self.status = status;
            }
        }
    }

    /// Append lines to the console, dropping the oldest beyond the scrollback limit
    pub fn print(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        self.console.extend(lines);
        if self.console.len() > SCROLLBACK_LIMIT {
            let excess = self.console.len() - SCROLLBACK_LIMIT;
            self.console.drain(..excess);
        }
    }

    /// Take the input line and record it in history
    pub fn submit(&mut self) -> String {
        let line = self.input.take();
        self.history_pos = None;
        if !line.trim().is_empty() && self.history.last() != Some(&line) {
            self.history.push(line.clone());
        }
        line
    }

    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let pos = match self.history_pos {
            Some(pos) => pos.saturating_sub(1),
            None => self.history.len() - 1,
        };
        self.history_pos = Some(pos);
        self.input.set(self.history[pos].clone());
    }

    pub fn history_next(&mut self) {
        let Some(pos) = self.history_pos else {
            return;
        };
        if pos + 1 < self.history.len() {
            self.history_pos = Some(pos + 1);
            self.input.set(self.history[pos + 1].clone());
        } else {
            self.history_pos = None;
            self.input.set("");
        }
    }
}

#[cfg(test)]
mod tests {
    use radio_player_core::{PlaybackState, Station};

    use super::*;

    #[test]
    fn input_editing_with_multibyte_characters() {
        let mut input = InputState::default();
        for c in "chérie".chars() {
            input.insert(c);
        }
        input.left();
        input.left();
        input.backspace();
        assert_eq!(input.text, "chéie");
        input.home();
        input.delete();
        assert_eq!(input.text, "héie");
        input.end();
        input.insert('!');
        assert_eq!(input.text, "héie!");
        assert_eq!(input.take(), "héie!");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut input = InputState::default();
        input.left();
        input.backspace();
        input.delete();
        input.set("ab");
        input.right();
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn state_changes_update_status() {
        let mut state = AppState::new(PlaybackStatus::default());
        let status = PlaybackStatus {
            station: Some(Station::new("fip", "FIP", "http://fip")),
            state: PlaybackState::Paused,
        };
        state.handle_event(PlayerEvent::StateChanged(status.clone()));
        assert_eq!(state.status, status);
    }

    #[test]
    fn scrollback_is_capped() {
        let mut state = AppState::new(PlaybackStatus::default());
        state.print((0..SCROLLBACK_LIMIT + 10).map(|i| Line::from(i.to_string())));
        assert_eq!(state.console.len(), SCROLLBACK_LIMIT);
        assert_eq!(state.console[0], Line::from("10"));
    }

    #[test]
    fn history_navigation() {
        let mut state = AppState::new(PlaybackStatus::default());
        for line in ["play fip", "pause", "pause", ""] {
            state.input.set(line);
            state.submit();
        }
        assert_eq!(state.history, vec!["play fip", "pause"]);

        state.history_prev();
        assert_eq!(state.input.text, "pause");
        state.history_prev();
        state.history_prev();
        assert_eq!(state.input.text, "play fip");
        state.history_next();
        assert_eq!(state.input.text, "pause");
        state.history_next();
        assert_eq!(state.input.text, "");
        assert_eq!(state.history_pos, None);
    }
}
