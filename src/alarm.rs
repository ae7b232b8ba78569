//! Alarm playback on countdown completion
//!
//! The alarm asset is looked up in a fixed order of locations and played on a
//! detached thread. When no asset exists, or playback fails, the generic
//! system alert is used instead. Failures are logged, never surfaced.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::notification;

pub const ALARM_FILE_NAME: &str = "alarm.wav";

#[derive(Debug, Error)]
pub enum AlarmError {
    #[error("alarm asset not found ({} locations searched)", .searched.len())]
    NotFound { searched: Vec<PathBuf> },
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode alarm: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error("no audio output: {0}")]
    Stream(#[from] rodio::StreamError),
    #[error("failed to start playback: {0}")]
    Sink(#[from] rodio::PlayError),
}

/// Capability invoked once per completed countdown run
pub trait Alarm {
    fn play(&self);
}

/// Alarm for `--mute`
pub struct SilentAlarm;

impl Alarm for SilentAlarm {
    fn play(&self) {
        info!("alarm muted");
    }
}

/// Plays the alarm asset, falling back to the system alert
pub struct SoundAlarm {
    candidates: Vec<PathBuf>,
    fallback: fn(),
}

impl SoundAlarm {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            fallback: notification::system_alert,
        }
    }

    /// Replace the alert used when the asset is missing or will not play
    pub fn with_fallback(mut self, fallback: fn()) -> Self {
        self.fallback = fallback;
        self
    }

    /// Lookup order: `--alarm`, config dir, next to the executable, working dir
    pub fn from_config(config: &Config) -> Self {
        let mut candidates = Vec::new();
        if let Some(path) = &config.alarm_path {
            candidates.push(path.clone());
        }
        if let Some(dir) = config.config_dir() {
            candidates.push(dir.join(ALARM_FILE_NAME));
        }
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(dir.join("assets").join(ALARM_FILE_NAME));
        }
        candidates.push(PathBuf::from("assets").join(ALARM_FILE_NAME));
        debug!(?candidates, "alarm lookup order");
        Self::new(candidates)
    }

    pub fn resolve_asset(&self) -> Result<PathBuf, AlarmError> {
        self.candidates
            .iter()
            .find(|p| p.is_file())
            .cloned()
            .ok_or_else(|| AlarmError::NotFound {
                searched: self.candidates.clone(),
            })
    }
}

impl Alarm for SoundAlarm {
    fn play(&self) {
        match self.resolve_asset() {
            Ok(path) => {
                notification::notify_time_up(None);
                let fallback = self.fallback;
                std::thread::spawn(move || {
                    if let Err(e) = play_file(&path) {
                        warn!(
                            error = %e,
                            path = %path.display(),
                            "alarm playback failed, using system alert"
                        );
                        fallback();
                    }
                });
            }
            Err(e) => {
                warn!(error = %e, "using system alert");
                (self.fallback)();
            }
        }
    }
}

/// Decode and play a sound file, blocking until it finishes
fn play_file(path: &Path) -> Result<(), AlarmError> {
    use rodio::{Decoder, OutputStream, Sink};

    let file = File::open(path).map_err(|source| AlarmError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let source = Decoder::new(BufReader::new(file))?;
    let (_stream, stream_handle) = OutputStream::try_default()?;
    let sink = Sink::try_new(&stream_handle)?;
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{Duration, Instant};

    static MISSING_ASSET_ALERTS: AtomicUsize = AtomicUsize::new(0);
    static BROKEN_ASSET_ALERTS: AtomicUsize = AtomicUsize::new(0);

    #[test]
    fn missing_asset_falls_back_to_system_alert_once() {
        let dir = tempfile::tempdir().unwrap();
        let alarm = SoundAlarm::new(vec![dir.path().join("a.wav"), dir.path().join("b.wav")])
            .with_fallback(|| {
                MISSING_ASSET_ALERTS.fetch_add(1, Ordering::SeqCst);
            });

        alarm.play();
        assert_eq!(MISSING_ASSET_ALERTS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unplayable_asset_falls_back_to_system_alert() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alarm.wav");
        std::fs::write(&path, b"not a wav file").unwrap();
        let alarm = SoundAlarm::new(vec![path]).with_fallback(|| {
            BROKEN_ASSET_ALERTS.fetch_add(1, Ordering::SeqCst);
        });

        alarm.play();

        // Playback runs on its own thread
        let deadline = Instant::now() + Duration::from_secs(5);
        while BROKEN_ASSET_ALERTS.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(BROKEN_ASSET_ALERTS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn resolves_first_existing_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.wav");
        let first = dir.path().join("first.wav");
        let second = dir.path().join("second.wav");
        std::fs::write(&first, b"RIFF").unwrap();
        std::fs::write(&second, b"RIFF").unwrap();

        let alarm = SoundAlarm::new(vec![missing, first.clone(), second]);
        assert_eq!(alarm.resolve_asset().unwrap(), first);
    }

    #[test]
    fn directories_are_not_assets() {
        let dir = tempfile::tempdir().unwrap();
        let alarm = SoundAlarm::new(vec![dir.path().to_path_buf()]);
        assert!(alarm.resolve_asset().is_err());
    }

    #[test]
    fn missing_asset_reports_searched_locations() {
        let dir = tempfile::tempdir().unwrap();
        let alarm = SoundAlarm::new(vec![dir.path().join("a.wav"), dir.path().join("b.wav")]);
        match alarm.resolve_asset() {
            Err(AlarmError::NotFound { searched }) => assert_eq!(searched.len(), 2),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn cli_path_is_checked_first() {
        let config = Config {
            alarm_path: Some(PathBuf::from("/tmp/custom-alarm.wav")),
            ..Config::default()
        };
        let alarm = SoundAlarm::from_config(&config);
        assert_eq!(alarm.candidates[0], PathBuf::from("/tmp/custom-alarm.wav"));
        assert_eq!(
            alarm.candidates.last(),
            Some(&PathBuf::from("assets").join(ALARM_FILE_NAME))
        );
    }

    #[test]
    fn undecodable_asset_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alarm.wav");
        std::fs::write(&path, b"not a wav file").unwrap();
        assert!(matches!(play_file(&path), Err(AlarmError::Decode(_))));
    }
}
