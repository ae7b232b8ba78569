use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ringtimer")]
#[command(about = "Countdown timer with a depleting progress ring", long_about = None)]
pub struct Cli {
    /// Minutes to prefill (free text, anything non-numeric counts as 0)
    #[arg(short, long)]
    pub minutes: Option<String>,

    /// Seconds to prefill
    #[arg(short, long)]
    pub seconds: Option<String>,

    /// Start the countdown right away
    #[arg(long)]
    pub start: bool,

    /// Alarm sound to play when the countdown ends
    #[arg(short, long)]
    pub alarm: Option<PathBuf>,

    /// Do not play any sound on completion
    #[arg(long)]
    pub mute: bool,

    /// Refresh interval in milliseconds
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(20..=1000))]
    pub tick_ms: u64,

    /// Write logs here instead of the platform data directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
