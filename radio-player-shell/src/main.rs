use std::{
    io::{self, IsTerminal},
    path::PathBuf,
    time::Duration,
};

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::Receiver;
use radio_player_core::{ChannelListener, Config, Player, PlayerEvent, ProcessBackend, StationQueue};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

mod commands;
mod completion;
mod display;
mod executor;
mod logger;
mod router;
mod routes;
mod script;
mod state;
mod ui;

use router::Router;
use routes::console::ConsoleRoute;
use state::AppState;

#[derive(Parser)]
#[command(name = "radio-player", about = "Interactive shell to play internet radio streams", version)]
struct Cli {
    /// JSON catalog replacing the built-in station list
    #[arg(long, value_name = "FILE")]
    stations: Option<PathBuf>,

    /// Player programs to use, in order of preference
    #[arg(long, value_name = "PLAYER", value_delimiter = ',')]
    players: Option<Vec<String>>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let interactive = io::stdin().is_terminal();

    if interactive {
        logger::init_tui_logger(cli.log_level)?;
    } else {
        logger::init_stderr_logger(cli.log_level)?;
    }

    log::info!("Starting radio-player");

    let config = Config::load(cli.stations.as_deref(), cli.players).context("Failed to load configuration")?;

    let (listener, events) = ChannelListener::new();
    let mut player = Player::new(
        StationQueue::new(config.stations),
        config.players.clone(),
        Box::new(ProcessBackend::new(config.players)),
        Box::new(listener),
    );
    log::info!(
        "{} stations, players: {}",
        player.queue().len(),
        player.backends().join(", ")
    );

    if interactive {
        run_tui(&mut player, &events)
    } else {
        script::run(&mut player, &events, io::stdin().lock(), io::stdout().lock())?;
        script::hold(&player);
        Ok(())
    }
}

fn run_tui(player: &mut Player, events: &Receiver<PlayerEvent>) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut state = AppState::new(player.status());
    state.print([display::info_line("Type `help` to list commands, `radios` to list stations.")]);
    let mut router = Router::new(Box::new(ConsoleRoute::new()));

    let result = event_loop(&mut terminal, &mut state, &mut router, player, events);

    // Silence playback before leaving, even on error
    player.stop();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut ratatui::Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    router: &mut Router,
    player: &mut Player,
    events: &Receiver<PlayerEvent>,
) -> anyhow::Result<()> {
    loop {
        // Handle player events
        while let Ok(event) = events.try_recv() {
            state.handle_event(event);
        }

        // Draw UI
        terminal.draw(|f| ui::draw(f, state, router))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(key, state, player, router)? {
                    break;
                }
            }
        }
    }

    log::info!("Leaving radio-player");
    Ok(())
}

/// Handle global keys and delegate route-specific input to router.
/// Returns true when the shell should quit.
fn handle_key(
    key: KeyEvent,
    state: &mut AppState,
    player: &mut Player,
    router: &mut Router,
) -> anyhow::Result<bool> {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(true);
        }
        KeyCode::Esc if router.depth() > 1 => {
            router.pop();
            return Ok(false);
        }
        _ => {}
    }

    let action = router.current_mut().handle_input(key.code, state, player)?;
    Ok(router.execute_action(action))
}
