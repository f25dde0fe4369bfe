use clap::error::ErrorKind;
use radio_player_core::{Player, PlayerError};
use ratatui::text::Line;

use crate::{
    commands::{ShellCommand, parse_line},
    display,
};

/// What the shell should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    ShowLog,
    Quit,
}

/// Parse and run one prompt line, appending any output to `out`
pub fn run_line(line: &str, player: &mut Player, out: &mut Vec<Line<'static>>) -> Outcome {
    match parse_line(line) {
        Ok(Some(command)) => execute(command, player, out),
        Ok(None) => Outcome::Continue,
        Err(e) => {
            let rendered = e.to_string();
            let as_error = !matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
            out.extend(rendered.trim_end().lines().map(|l| {
                if as_error {
                    display::error_line(l)
                } else {
                    Line::from(l.to_string())
                }
            }));
            Outcome::Continue
        }
    }
}

/// Run a parsed command. Player failures are printed, never propagated.
pub fn execute(command: ShellCommand, player: &mut Player, out: &mut Vec<Line<'static>>) -> Outcome {
    log::debug!("Executing {:?}", command);

    let result = match command {
        ShellCommand::Play { radio, player: backend } => {
            match validate_play(player, radio.as_deref(), backend.as_deref()) {
                Ok(true) => player.play(radio.as_deref(), backend.as_deref()),
                Ok(false) => Ok(()),
                Err(e) => Err(e),
            }
        }
        ShellCommand::Pause => {
            player.pause(true);
            Ok(())
        }
        ShellCommand::Resume => player.resume(),
        ShellCommand::Stop => {
            player.stop();
            Ok(())
        }
        ShellCommand::Reload => player.reload(),
        ShellCommand::Prev => player.prev(),
        ShellCommand::Next => player.next(),
        ShellCommand::Current => {
            match player.queue().current_index().zip(player.current_station()) {
                Some((index, station)) => out.extend(display::station_details(index, station)),
                None => out.push(display::error_line(PlayerError::NoCurrentSelection.to_string())),
            }
            Ok(())
        }
        ShellCommand::Radios => {
            out.extend(display::station_list(player.queue().stations()));
            Ok(())
        }
        ShellCommand::Players => {
            out.extend(display::player_list(player.backends()));
            Ok(())
        }
        ShellCommand::Info { radio } => player.station_info(&radio).map(|(index, station)| {
            out.extend(display::station_details(index, station));
        }),
        ShellCommand::Version => {
            out.push(display::info_line(env!("CARGO_PKG_VERSION")));
            Ok(())
        }
        ShellCommand::Log => return Outcome::ShowLog,
        ShellCommand::Exit => {
            player.stop();
            return Outcome::Quit;
        }
    };

    if let Err(e) = result {
        log::warn!("Command failed: {}", e);
        out.push(display::error_line(e.to_string()));
    }
    Outcome::Continue
}

/// Checks done before `play`, in the order the user sees them.
///
/// Returns `Ok(false)` when the command should be ignored: `play` without a
/// radio while something is already playing.
fn validate_play(player: &Player, radio: Option<&str>, backend: Option<&str>) -> Result<bool, PlayerError> {
    match radio {
        Some(radio) => {
            player.station_info(radio)?;
        }
        None if player.current_station().is_none() => return Err(PlayerError::NoCurrentSelection),
        None if player.is_playing() => return Ok(false),
        None => {}
    }

    if let Some(name) = backend {
        if !player.is_backend_valid(name) {
            return Err(PlayerError::InvalidBackend(name.to_string()));
        }
    }

    Ok(true)
}
