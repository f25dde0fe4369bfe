use crossbeam_channel::{Receiver, Sender};

use crate::{player::PlaybackState, station::Station};

/// What the display needs to render the prompt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackStatus {
    pub station: Option<Station>,
    pub state: PlaybackState,
}

/// Events sent from the player to the shell
#[derive(Debug, Clone)]
pub enum PlayerEvent {
    /// Playback state or current station changed
    StateChanged(PlaybackStatus),
}

/// Display hook called after any operation that may change what is shown
pub trait StateListener {
    fn on_state_changed(&self, status: &PlaybackStatus);
}

/// Forwards state changes over a channel drained by the shell loop
#[derive(Debug, Clone)]
pub struct ChannelListener {
    event_tx: Sender<PlayerEvent>,
}

impl ChannelListener {
    pub fn new() -> (Self, Receiver<PlayerEvent>) {
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        (Self { event_tx }, event_rx)
    }
}

impl StateListener for ChannelListener {
    fn on_state_changed(&self, status: &PlaybackStatus) {
        if self.event_tx.send(PlayerEvent::StateChanged(status.clone())).is_err() {
            log::debug!("State listener disconnected, dropping update");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_status_to_receiver() {
        let (listener, events) = ChannelListener::new();
        let status = PlaybackStatus {
            station: Some(Station::new("fip", "FIP", "http://fip")),
            state: PlaybackState::Playing,
        };

        listener.on_state_changed(&status);

        match events.try_recv().unwrap() {
            PlayerEvent::StateChanged(received) => assert_eq!(received, status),
        }
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn dropped_receiver_is_ignored() {
        let (listener, events) = ChannelListener::new();
        drop(events);
        listener.on_state_changed(&PlaybackStatus::default());
    }
}
