//! Countdown engine: owns the timer state and advances it from a recorded
//! start instant.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Timer state for a single countdown run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimerState {
    pub configured_total_seconds: u64,
    pub start_instant: Option<DateTime<Utc>>,
    pub remaining_seconds: Option<u64>,
}

impl TimerState {
    pub fn is_running(&self) -> bool {
        self.remaining_seconds.is_some()
    }
}

/// Result of pressing the start/reset control
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartOutcome {
    Started { total_seconds: u64 },
    /// A run was active, so the control acted as reset
    Reset,
    /// Parsed duration was zero; nothing changed
    Rejected,
}

/// Result of one periodic update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    Idle,
    Running { remaining_seconds: u64 },
    /// Remaining time reached zero on this tick. Emitted once per run.
    Completed,
}

/// Permissive numeric parsing: anything that is not a non-negative integer is 0
pub fn parse_field(text: &str) -> u64 {
    text.trim().parse::<u64>().unwrap_or(0)
}

#[derive(Debug, Default)]
pub struct CountdownEngine {
    state: TimerState,
}

impl CountdownEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn configured_total_seconds(&self) -> u64 {
        self.state.configured_total_seconds
    }

    /// Start a run from the two text fields, or reset if one is active
    pub fn start(
        &mut self,
        minutes_text: &str,
        seconds_text: &str,
        now: DateTime<Utc>,
    ) -> StartOutcome {
        if self.is_running() {
            self.reset();
            return StartOutcome::Reset;
        }

        let total = parse_field(minutes_text)
            .saturating_mul(60)
            .saturating_add(parse_field(seconds_text));
        if total == 0 {
            debug!(
                minutes = minutes_text,
                seconds = seconds_text,
                "start ignored, zero duration"
            );
            return StartOutcome::Rejected;
        }

        self.state = TimerState {
            configured_total_seconds: total,
            start_instant: Some(now),
            remaining_seconds: Some(total),
        };
        info!(total_seconds = total, "countdown started");
        StartOutcome::Started { total_seconds: total }
    }

    pub fn reset(&mut self) {
        if self.state != TimerState::default() {
            info!("countdown reset");
        }
        self.state = TimerState::default();
    }

    /// Recompute remaining time from the start instant
    pub fn tick(&mut self, now: DateTime<Utc>) -> Tick {
        let Some(start) = self.state.start_instant.filter(|_| self.is_running()) else {
            return Tick::Idle;
        };

        // A clock that steps backwards counts as no time elapsed
        let elapsed = (now - start).num_seconds().max(0) as u64;
        let total = self.state.configured_total_seconds;

        if elapsed >= total {
            self.state.remaining_seconds = None;
            self.state.start_instant = None;
            info!(total_seconds = total, "countdown complete");
            Tick::Completed
        } else {
            let remaining = total - elapsed;
            self.state.remaining_seconds = Some(remaining);
            Tick::Running {
                remaining_seconds: remaining,
            }
        }
    }

    pub fn display_label(&self) -> String {
        match self.state.remaining_seconds {
            Some(sec) => format!("{:02}:{:02}", sec / 60, sec % 60),
            None if self.state.configured_total_seconds > 0 => "00:00".to_string(),
            None => "--:--".to_string(),
        }
    }

    /// Fraction of the run still remaining, for the ring fill
    pub fn progress_fraction(&self) -> f64 {
        match self.state.remaining_seconds {
            Some(remaining) if self.state.configured_total_seconds > 0 => {
                (remaining as f64 / self.state.configured_total_seconds as f64).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}
