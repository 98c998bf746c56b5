use chrono::{DateTime, Utc};

use crate::action::Action;
use crate::checker::{Checker, CheckerError, CheckOutcome};
use crate::config::Config;
use crate::roles::{self, RoleEntry};

/// The one piece of page state. A tagged union instead of independent
/// role/error/allowed flags, so invalid combinations (a role shown
/// while denied, say) cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckState {
    Idle,
    Checking,
    Allowed(&'static RoleEntry),
    Denied,
    Failed(CheckFailure),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckFailure {
    /// Input outside 1..=6 or not an integer; blocks the network call
    Validation(String),
    /// A response arrived but no boolean could be extracted
    Indeterminate,
    /// Connection, DNS, or TLS failure; carries the underlying text
    Transport(String),
}

impl std::fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckFailure::Validation(msg) => write!(f, "{}", msg),
            CheckFailure::Indeterminate => {
                write!(f, "Unexpected response from the API. Contact an administrator.")
            }
            CheckFailure::Transport(msg) => write!(f, "Could not reach the API ({})", msg),
        }
    }
}

pub struct App {
    pub config: Config,
    pub input: String,
    pub state: CheckState,
    pub last_checked: Option<DateTime<Utc>>,
    pub animation_frame: usize,
    animation_tick: u64,
    pending_number: Option<u8>,
    checker: Checker,
}

impl App {
    pub fn new(config: Config) -> Result<Self, CheckerError> {
        let checker = Checker::new(config.endpoint.clone())?;
        Ok(Self {
            config,
            input: String::new(),
            state: CheckState::Idle,
            last_checked: None,
            animation_frame: 0,
            animation_tick: 0,
            pending_number: None,
            checker,
        })
    }

    pub fn is_checking(&self) -> bool {
        matches!(self.state, CheckState::Checking)
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Show => self.show(),
            Action::Retry => {
                // The retry control only exists on the denied panel.
                if self.state == CheckState::Denied {
                    self.show();
                }
            }
            Action::Clear => self.clear(),
            Action::Input(c) => {
                if !c.is_control() && self.input.len() < self.config.input_max_len {
                    self.input.push(c);
                }
            }
            Action::Backspace => {
                self.input.pop();
            }
            Action::Paste(text) => {
                for c in text.chars() {
                    self.dispatch(Action::Input(c));
                }
            }
            // Quit is handled by the event loop.
            Action::Quit => {}
        }
    }

    /// Validate the input and kick off the publish check. No-op while
    /// a check is already in flight: the trigger is disabled, there is
    /// no queue.
    fn show(&mut self) {
        if self.is_checking() {
            return;
        }

        match roles::parse_seat_number(&self.input) {
            Ok(n) => {
                self.pending_number = Some(n);
                self.state = CheckState::Checking;
                self.checker.start_check();
            }
            Err(msg) => {
                self.state = CheckState::Failed(CheckFailure::Validation(msg));
            }
        }
    }

    /// Reset to the initial state. Never touches the network. An
    /// in-flight check keeps running; its outcome lands as usual.
    fn clear(&mut self) {
        self.input.clear();
        self.last_checked = None;
        if !self.is_checking() {
            self.state = CheckState::Idle;
            self.pending_number = None;
        }
    }

    /// Drain a finished check from the channel, if any. Called every
    /// tick by the event loop.
    pub fn poll_check(&mut self) {
        if !self.is_checking() {
            return;
        }
        let Some(result) = self.checker.try_poll() else {
            return;
        };

        self.last_checked = Some(result.checked_at);
        self.state = match result.outcome {
            CheckOutcome::Verdict(true) => {
                match self.pending_number.and_then(roles::lookup) {
                    Some(entry) => CheckState::Allowed(entry),
                    // Unreachable for a validated number; fail closed.
                    None => CheckState::Failed(CheckFailure::Validation(
                        "Enter a number from 1 to 6.".to_string(),
                    )),
                }
            }
            CheckOutcome::Verdict(false) => CheckState::Denied,
            CheckOutcome::Indeterminate => CheckState::Failed(CheckFailure::Indeterminate),
            CheckOutcome::Transport(msg) => CheckState::Failed(CheckFailure::Transport(msg)),
        };
    }

    pub fn tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        self.animation_frame = (self.animation_frame + 1) % self.config.animation_frame_mod;
    }
}
