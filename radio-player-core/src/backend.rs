//! External audio players
//!
//! Decoding is delegated to a player program running in its own process. The
//! controller only ever starts a stream and later kills it.

use std::{
    io,
    process::{Child, Command, Stdio},
};

use crate::error::BackendError;

/// A running stream, killable exactly once
pub trait AudioHandle {
    fn kill(self: Box<Self>);
}

/// Starts streams without waiting for them to finish
pub trait AudioBackend {
    /// Start playing `stream_url`. With `player` set only that program is used,
    /// otherwise the backend picks one.
    fn start(
        &mut self,
        stream_url: &str,
        player: Option<&str>,
    ) -> Result<Box<dyn AudioHandle>, BackendError>;
}

/// Spawns one of the configured player programs
#[derive(Debug, Clone)]
pub struct ProcessBackend {
    players: Vec<String>,
}

impl ProcessBackend {
    /// `players` is the order in which programs are tried when no player is requested
    pub fn new(players: Vec<String>) -> Self {
        Self { players }
    }

    fn spawn(player: &str, stream_url: &str) -> io::Result<Child> {
        Command::new(player)
            .args(player_args(player))
            .arg(stream_url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
    }
}

impl AudioBackend for ProcessBackend {
    fn start(
        &mut self,
        stream_url: &str,
        player: Option<&str>,
    ) -> Result<Box<dyn AudioHandle>, BackendError> {
        if let Some(player) = player {
            let child = Self::spawn(player, stream_url).map_err(|source| BackendError::Spawn {
                player: player.to_string(),
                source,
            })?;
            return Ok(Box::new(ProcessHandle::new(player, child)));
        }

        for player in &self.players {
            match Self::spawn(player, stream_url) {
                Ok(child) => return Ok(Box::new(ProcessHandle::new(player, child))),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!("{} is not installed, trying the next player", player);
                }
                Err(source) => {
                    return Err(BackendError::Spawn {
                        player: player.clone(),
                        source,
                    });
                }
            }
        }

        Err(BackendError::NoPlayerFound)
    }
}

/// Extra arguments keeping a player quiet and headless
fn player_args(player: &str) -> &'static [&'static str] {
    match player {
        "mpv" => &["--no-video", "--really-quiet"],
        "mplayer" => &["-novideo", "-really-quiet"],
        "ffplay" => &["-nodisp", "-loglevel", "quiet"],
        "cvlc" => &["--no-video", "--quiet"],
        "mpg123" | "mpg321" => &["-q"],
        "play" => &["-q"],
        _ => &[],
    }
}

/// Player process started by [`ProcessBackend`]
#[derive(Debug)]
pub struct ProcessHandle {
    player: String,
    child: Child,
}

impl ProcessHandle {
    fn new(player: &str, child: Child) -> Self {
        log::info!("Started {} (pid {})", player, child.id());
        Self {
            player: player.to_string(),
            child,
        }
    }
}

impl AudioHandle for ProcessHandle {
    fn kill(mut self: Box<Self>) {
        if let Err(e) = self.child.kill() {
            log::warn!("Failed to kill {}: {}", self.player, e);
        }
        // Reap the child so it does not linger as a zombie
        if let Err(e) = self.child.wait() {
            log::warn!("Failed to wait for {}: {}", self.player, e);
        }
        log::debug!("Killed {}", self.player);
    }
}
