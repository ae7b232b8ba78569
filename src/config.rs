use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

use crate::cli::Cli;

pub const DEFAULT_TICK_MS: u64 = 100;
pub const LOG_FILE_NAME: &str = "ringtimer.log";

/// Runtime settings, built once from the command line
#[derive(Debug, Clone)]
pub struct Config {
    pub minutes: String,
    pub seconds: String,
    pub start_immediately: bool,
    pub alarm_path: Option<PathBuf>,
    pub mute: bool,
    pub tick_interval: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minutes: String::new(),
            seconds: String::new(),
            start_immediately: false,
            alarm_path: None,
            mute: false,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            minutes: cli.minutes.unwrap_or_default(),
            seconds: cli.seconds.unwrap_or_default(),
            start_immediately: cli.start,
            alarm_path: cli.alarm,
            mute: cli.mute,
            tick_interval: Duration::from_millis(cli.tick_ms),
            log_file: cli.log_file,
        }
    }

    /// Directory searched for a user-supplied alarm asset
    pub fn config_dir(&self) -> Option<PathBuf> {
        project_dirs().map(|pd| pd.config_dir().to_path_buf())
    }

    /// Explicit `--log-file`, otherwise the platform data directory
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| project_dirs().map(|pd| pd.data_dir().join(LOG_FILE_NAME)))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "ringtimer", "ringtimer")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_without_arguments() {
        let config = Config::from_cli(Cli::try_parse_from(["ringtimer"]).unwrap());
        assert_eq!(config.minutes, "");
        assert_eq!(config.seconds, "");
        assert!(!config.start_immediately);
        assert!(!config.mute);
        assert_eq!(config.tick_interval, Duration::from_millis(DEFAULT_TICK_MS));
    }

    #[test]
    fn prefilled_duration_and_flags() {
        let cli = Cli::try_parse_from([
            "ringtimer", "-m", "3", "-s", "15", "--start", "--mute", "--tick-ms", "250",
        ])
        .unwrap();
        let config = Config::from_cli(cli);
        assert_eq!(config.minutes, "3");
        assert_eq!(config.seconds, "15");
        assert!(config.start_immediately);
        assert!(config.mute);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
    }

    #[test]
    fn explicit_log_file_wins() {
        let cli = Cli::try_parse_from(["ringtimer", "--log-file", "/tmp/rt.log"]).unwrap();
        let config = Config::from_cli(cli);
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/rt.log")));
    }

    #[test]
    fn tick_interval_is_range_checked() {
        assert!(Cli::try_parse_from(["ringtimer", "--tick-ms", "5"]).is_err());
        assert!(Cli::try_parse_from(["ringtimer", "--tick-ms", "5000"]).is_err());
    }
}
