//! Configuration for the radio player: built-in catalog, player list and constants

use std::{fs, path::Path};

use crate::{error::ConfigError, station::Station};

/// Base of the shell prompt
pub const PROMPT_BASE: &str = "radio-player";

/// Maximum number of lines kept in the shell scrollback
pub const SCROLLBACK_LIMIT: usize = 1000;

const BUILTIN_STATIONS: &str = include_str!("../data/stations.json");
const BUILTIN_PLAYERS: &str = include_str!("../data/players.json");

/// Catalog and backend list, fixed for the lifetime of the process
#[derive(Debug, Clone)]
pub struct Config {
    pub stations: Vec<Station>,
    /// Player programs in order of preference
    pub players: Vec<String>,
}

impl Config {
    /// Configuration shipped with the binary
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(Self {
            stations: parse_stations(BUILTIN_STATIONS)?,
            players: serde_json::from_str(BUILTIN_PLAYERS)?,
        })
    }

    /// Built-in configuration with optional overrides for the catalog file and the player list
    pub fn load(stations_path: Option<&Path>, players: Option<Vec<String>>) -> Result<Self, ConfigError> {
        let mut config = Self::builtin()?;

        if let Some(path) = stations_path {
            config.stations = load_stations(path)?;
            log::info!("Loaded {} stations from {}", config.stations.len(), path.display());
        }

        if let Some(players) = players {
            config.players = players
                .into_iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
        }

        log::debug!("Players: {:?}", config.players);
        Ok(config)
    }
}

/// Parse a JSON array of stations
pub fn parse_stations(json: &str) -> Result<Vec<Station>, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON catalog file
pub fn load_stations(path: &Path) -> Result<Vec<Station>, ConfigError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_stations(&json)
}
