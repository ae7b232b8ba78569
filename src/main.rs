use anyhow::Context;
use clap::Parser;
use tracing::info;

mod alarm;
mod cli;
mod config;
mod engine;
mod logging;
mod notification;
mod ring;
mod tui;

use alarm::{Alarm, SilentAlarm, SoundAlarm};
use cli::Cli;
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(cli);

    let _log_guard = match config.log_path() {
        Some(path) => Some(
            logging::init(&path)
                .with_context(|| format!("failed to set up logging at {}", path.display()))?,
        ),
        None => None,
    };
    info!(
        tick_ms = config.tick_interval.as_millis() as u64,
        mute = config.mute,
        "ringtimer starting"
    );

    let alarm: Box<dyn Alarm> = if config.mute {
        Box::new(SilentAlarm)
    } else {
        Box::new(SoundAlarm::from_config(&config))
    };

    tui::run_tui(&config, alarm).context("terminal UI failed")?;
    Ok(())
}
