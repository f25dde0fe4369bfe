use std::io::{BufRead, Write};

use anyhow::Context;
use crossbeam_channel::Receiver;
use radio_player_core::{Player, PlayerEvent};

use crate::{
    display,
    executor::{Outcome, run_line},
};

/// Run commands read line by line, writing unstyled output.
///
/// Used when stdin is not a terminal, e.g. `echo "play fip" | radio-player`.
/// Returns at `exit` or at the end of the input, leaving any stream playing.
pub fn run(
    player: &mut Player,
    events: &Receiver<PlayerEvent>,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        let mut out = Vec::new();
        let outcome = run_line(&line, player, &mut out);

        for rendered in &out {
            writeln!(output, "{}", display::plain(rendered))?;
        }

        while let Ok(PlayerEvent::StateChanged(status)) = events.try_recv() {
            log::info!("{}", display::plain(&display::prompt(&status)).trim_end());
        }

        match outcome {
            Outcome::Quit => break,
            Outcome::ShowLog => {
                writeln!(output, "The log view needs an interactive terminal")?;
            }
            Outcome::Continue => {}
        }
    }

    output.flush()?;
    Ok(())
}

/// Keep the process, and so the stream, alive once the input is exhausted.
/// Returns at once when nothing is playing, otherwise runs until interrupted.
pub fn hold(player: &Player) {
    if !player.is_playing() {
        return;
    }
    log::info!("End of input, playing until interrupted (Ctrl+C)");
    loop {
        std::thread::park();
    }
}
