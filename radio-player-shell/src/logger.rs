use anyhow::Context;
use log::LevelFilter;

/// Route log records to the in-app log view
pub fn init_tui_logger(level: LevelFilter) -> anyhow::Result<()> {
    tui_logger::init_logger(level).context("Failed to init tui_logger")?;
    tui_logger::set_default_level(level);
    Ok(())
}

/// Log to stderr when running without a terminal. `RUST_LOG` overrides `level`.
pub fn init_stderr_logger(level: LevelFilter) -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .try_init()
        .context("Failed to init env_logger")
}
