pub mod backend;
pub mod config;
pub mod error;
pub mod events;
pub mod player;
pub mod queue;
pub mod station;

pub use backend::{AudioBackend, AudioHandle, ProcessBackend};
pub use config::Config;
pub use error::{BackendError, ConfigError, PlayerError};
pub use events::{ChannelListener, PlaybackStatus, PlayerEvent, StateListener};
pub use player::{PlaybackState, Player};
pub use queue::StationQueue;
pub use station::Station;
