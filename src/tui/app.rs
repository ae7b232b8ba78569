use chrono::{DateTime, Utc};
use tracing::trace;

use crate::alarm::Alarm;
use crate::config::Config;
use crate::engine::{CountdownEngine, StartOutcome, Tick};

/// Longest value accepted in either duration field
pub const MAX_INPUT_LEN: usize = 4;

/// Running state of the application
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RunningState {
    #[default]
    Running,
    Done,
}

/// Which duration field has focus
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Field {
    #[default]
    Minutes,
    Seconds,
}

impl Field {
    fn other(self) -> Self {
        match self {
            Field::Minutes => Field::Seconds,
            Field::Seconds => Field::Minutes,
        }
    }
}

/// All possible application messages/events
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Quit,
    ToggleHelp,
    ClearStatus,

    // Input fields
    FocusNext,
    FocusPrev,
    InputChar(char),
    DeleteChar,
    ClearField,

    // Countdown
    StartOrReset,
    Reset,
    Tick,
}

/// Main application state
pub struct App {
    pub running_state: RunningState,
    pub engine: CountdownEngine,

    pub minutes_input: String,
    pub seconds_input: String,
    pub focus: Field,

    // UI state
    pub show_help: bool,
    pub status_message: Option<String>,

    alarm: Box<dyn Alarm>,
}

impl App {
    pub fn new(config: &Config, alarm: Box<dyn Alarm>) -> Self {
        Self {
            running_state: RunningState::default(),
            engine: CountdownEngine::new(),
            minutes_input: config.minutes.clone(),
            seconds_input: config.seconds.clone(),
            focus: Field::default(),
            show_help: false,
            status_message: None,
            alarm,
        }
    }

    /// Core update function
    pub fn update(&mut self, msg: Message, now: DateTime<Utc>) -> Option<Message> {
        match msg {
            Message::Quit => {
                self.running_state = RunningState::Done;
                None
            }
            Message::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            Message::ClearStatus => {
                self.status_message = None;
                None
            }

            Message::FocusNext | Message::FocusPrev => {
                self.focus = self.focus.other();
                None
            }
            Message::InputChar(c) => {
                if self.inputs_locked() || !c.is_ascii_digit() {
                    return None;
                }
                let input = self.focused_input_mut();
                if input.len() < MAX_INPUT_LEN {
                    input.push(c);
                }
                Some(Message::ClearStatus)
            }
            Message::DeleteChar => {
                if self.inputs_locked() {
                    return None;
                }
                self.focused_input_mut().pop();
                Some(Message::ClearStatus)
            }
            Message::ClearField => {
                if self.inputs_locked() {
                    return None;
                }
                self.focused_input_mut().clear();
                Some(Message::ClearStatus)
            }

            Message::StartOrReset => {
                let outcome = self
                    .engine
                    .start(&self.minutes_input, &self.seconds_input, now);
                self.status_message = Some(match outcome {
                    StartOutcome::Started { total_seconds } => format!(
                        "Counting down from {:02}:{:02}",
                        total_seconds / 60,
                        total_seconds % 60
                    ),
                    StartOutcome::Reset => "Timer reset".to_string(),
                    StartOutcome::Rejected => "Enter a duration greater than zero".to_string(),
                });
                None
            }
            Message::Reset => {
                if self.engine.is_running() || self.engine.configured_total_seconds() > 0 {
                    self.status_message = Some("Timer reset".to_string());
                }
                self.engine.reset();
                None
            }
            Message::Tick => {
                match self.engine.tick(now) {
                    Tick::Completed => {
                        self.alarm.play();
                        self.status_message = Some("Time's up!".to_string());
                    }
                    Tick::Running { remaining_seconds } => trace!(remaining_seconds, "tick"),
                    Tick::Idle => {}
                }
                None
            }
        }
    }

    /// The configured duration cannot change during a run
    pub fn inputs_locked(&self) -> bool {
        self.engine.is_running()
    }

    pub fn button_label(&self) -> &'static str {
        if self.engine.is_running() {
            "Reset"
        } else {
            "Start"
        }
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Minutes => &mut self.minutes_input,
            Field::Seconds => &mut self.seconds_input,
        }
    }
}
