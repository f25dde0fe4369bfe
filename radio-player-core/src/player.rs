//! Playback controller
//!
//! Enforces the legal sequencing of playback commands on top of a
//! [`StationQueue`] and owns the single running [`AudioHandle`].

use crate::{
    backend::{AudioBackend, AudioHandle},
    error::PlayerError,
    events::{PlaybackStatus, StateListener},
    queue::StationQueue,
    station::Station,
};

/// Coarse playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum PlaybackState {
    /// No station selected
    #[default]
    Idle,
    /// A station is selected but silent
    Paused,
    /// A station is selected and its stream is running
    Playing,
}

pub struct Player {
    queue: StationQueue,
    backends: Vec<String>,
    audio: Box<dyn AudioBackend>,
    listener: Box<dyn StateListener>,
    /// Present exactly while playing
    active: Option<Box<dyn AudioHandle>>,
}

impl Player {
    pub fn new(
        queue: StationQueue,
        backends: Vec<String>,
        audio: Box<dyn AudioBackend>,
        listener: Box<dyn StateListener>,
    ) -> Self {
        Self {
            queue,
            backends,
            audio,
            listener,
            active: None,
        }
    }

    pub fn queue(&self) -> &StationQueue {
        &self.queue
    }

    /// Names of the players the user may request
    pub fn backends(&self) -> &[String] {
        &self.backends
    }

    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    pub fn state(&self) -> PlaybackState {
        match (self.queue.current(), self.is_playing()) {
            (None, _) => PlaybackState::Idle,
            (Some(_), false) => PlaybackState::Paused,
            (Some(_), true) => PlaybackState::Playing,
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus {
            station: self.current_station().cloned(),
            state: self.state(),
        }
    }

    pub fn current_station(&self) -> Option<&Station> {
        self.queue.current()
    }

    /// Ids of every station, in catalog order
    pub fn station_ids(&self) -> Vec<&str> {
        self.queue.stations().iter().map(|s| s.id.as_str()).collect()
    }

    /// Map a user identifier to a catalog index.
    ///
    /// A number is a 1-based position, truncated to its leading integer, and
    /// is returned as a 0-based index without range checking. Anything else
    /// selects the first station whose id starts with it.
    pub fn resolve_identifier(&self, id: &str) -> Option<usize> {
        if id.is_empty() {
            return None;
        }
        let trimmed = id.trim();
        if trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
            return leading_integer(trimmed)
                .and_then(|position| position.checked_sub(1))
                .and_then(|index| usize::try_from(index).ok());
        }
        self.queue.position_by_id_prefix(id)
    }

    pub fn is_playable(&self, index: usize) -> bool {
        self.queue.is_index_valid(index)
    }

    pub fn is_backend_valid(&self, name: &str) -> bool {
        self.backends.iter().any(|b| b == name)
    }

    /// Resolve `id` to a playable station
    pub fn station_info(&self, id: &str) -> Result<(usize, &Station), PlayerError> {
        let index = self.resolve_playable(id)?;
        let station = self.queue.get(index).ok_or(PlayerError::InvalidStation)?;
        Ok((index, station))
    }

    fn resolve_playable(&self, id: &str) -> Result<usize, PlayerError> {
        self.resolve_identifier(id)
            .filter(|&index| self.is_playable(index))
            .ok_or(PlayerError::InvalidStation)
    }

    /// Play the station identified by `id`, or the current one when `id` is `None`.
    ///
    /// Nothing is changed when validation fails. Station errors take
    /// precedence over player errors.
    pub fn play(&mut self, id: Option<&str>, player: Option<&str>) -> Result<(), PlayerError> {
        let index = match id {
            Some(id) => self.resolve_playable(id)?,
            None => self.queue.current_index().ok_or(PlayerError::NoCurrentSelection)?,
        };

        if let Some(name) = player {
            if !self.is_backend_valid(name) {
                return Err(PlayerError::InvalidBackend(name.to_string()));
            }
        }

        self.queue.select(index);
        self.pause(false);

        let station = self.queue.current().ok_or(PlayerError::NoCurrentSelection)?;
        log::info!(
            "Playing {} ({}) with {}",
            station.name,
            station.stream_url,
            player.unwrap_or("default player")
        );

        let started = self.audio.start(&station.stream_url, player);
        match started {
            Ok(handle) => {
                self.active = Some(handle);
                self.notify();
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to start stream: {}", e);
                self.notify();
                Err(e.into())
            }
        }
    }

    /// Play the current station again if it is paused
    pub fn resume(&mut self) -> Result<(), PlayerError> {
        if !self.is_playing() && self.queue.current().is_some() {
            self.play(None, None)?;
        }
        Ok(())
    }

    /// Silence the stream, keeping the selection. The display is refreshed
    /// when `notify` is set, whether or not anything was playing.
    pub fn pause(&mut self, notify: bool) {
        if let Some(handle) = self.active.take() {
            handle.kill();
            log::info!("Paused");
        }

        if notify {
            self.notify();
        }
    }

    /// Silence the stream and clear the selection
    pub fn stop(&mut self) {
        self.queue.reset();
        self.pause(true);
        log::info!("Stopped");
    }

    /// Restart the current stream
    pub fn reload(&mut self) -> Result<(), PlayerError> {
        if self.queue.current().is_some() {
            self.play(None, None)?;
        }
        Ok(())
    }

    /// Play the next station, wrapping around the catalog
    pub fn next(&mut self) -> Result<(), PlayerError> {
        self.queue.next();
        self.play(None, None)
    }

    /// Play the previous station, wrapping around the catalog
    pub fn prev(&mut self) -> Result<(), PlayerError> {
        self.queue.prev();
        self.play(None, None)
    }

    fn notify(&self) {
        let status = self.status();
        log::debug!("State changed: {}", status.state);
        self.listener.on_state_changed(&status);
    }
}

/// Optional sign followed by the leading digits, so `2.5` reads as `2`
fn leading_integer(number: &str) -> Option<i64> {
    let unsigned = number.strip_prefix(['+', '-']).unwrap_or(number);
    let digits = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    number[..number.len() - unsigned.len() + digits].parse().ok()
}

impl Drop for Player {
    fn drop(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.kill();
        }
    }
}
