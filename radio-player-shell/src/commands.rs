use clap::{CommandFactory, Parser, Subcommand};

/// One line typed at the prompt
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands understood by the shell
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ShellCommand {
    /// Play radio in the queue
    Play {
        /// Radio position or id prefix
        radio: Option<String>,
        /// Player to use
        #[arg(short, long)]
        player: Option<String>,
    },
    /// Pause current radio
    Pause,
    /// Resume current radio
    Resume,
    /// Stop current radio
    Stop,
    /// Reload current radio
    Reload,
    /// Play previous radio in the queue
    Prev,
    /// Play next radio in the queue
    Next,
    /// Print currently playing radio
    Current,
    /// List radios
    Radios,
    /// List compatible players
    Players,
    /// Print radio info
    Info {
        /// Radio position or id prefix
        radio: String,
    },
    /// Print Radio Player version
    Version,
    /// Show the log view
    Log,
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// Parse a prompt line. Blank lines yield `Ok(None)`.
///
/// `help` and `--help` come back as a clap error of kind `DisplayHelp`, which
/// the caller prints as regular output.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    ShellLine::try_parse_from(words).map(|parsed| Some(parsed.command))
}

/// Command names offered by completion
pub fn command_names() -> Vec<String> {
    let mut names: Vec<String> = ShellLine::command()
        .get_subcommands()
        .map(|c| c.get_name().to_string())
        .collect();
    names.push("help".to_string());
    names
}

/// Commands whose first argument is a station identifier
pub fn takes_station_argument(command: &str) -> bool {
    matches!(command, "play" | "info")
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn parses_play_with_radio_and_player() {
        assert_eq!(
            parse_line("play rmc -p mpv").unwrap(),
            Some(ShellCommand::Play {
                radio: Some("rmc".into()),
                player: Some("mpv".into()),
            })
        );
        assert_eq!(
            parse_line("play --player mplayer").unwrap(),
            Some(ShellCommand::Play {
                radio: None,
                player: Some("mplayer".into()),
            })
        );
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!(parse_line("next").unwrap(), Some(ShellCommand::Next));
        assert_eq!(parse_line("  stop  ").unwrap(), Some(ShellCommand::Stop));
        assert_eq!(parse_line("quit").unwrap(), Some(ShellCommand::Exit));
    }

    #[test]
    fn blank_line_is_not_a_command() {
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn info_requires_a_radio() {
        let err = parse_line("info").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(parse_line("dance").is_err());
    }

    #[test]
    fn help_is_reported_as_display_help() {
        let err = parse_line("help").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("radios"));
    }

    #[test]
    fn command_names_cover_all_commands() {
        let names = command_names();
        for name in ["play", "pause", "resume", "stop", "reload", "prev", "next", "info", "help"] {
            assert!(names.iter().any(|n| n == name), "missing {name}");
        }
    }
}
