//! Human-readable notification rendering

use crate::control::{Control, ControlValue};
use crate::listener::DeviceListener;

/// Reference listener that renders each change as a notification line
///
/// Prints `Notification: <name> control changed to <value>` to stdout and
/// keeps the last-built message inspectable, so tests can assert on the
/// rendered text without capturing output.
#[derive(Debug, Default)]
pub struct MessageGenerator {
    last_message: String,
}

impl MessageGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered message, empty before the first update
    pub fn last_message(&self) -> &str {
        &self.last_message
    }
}

impl DeviceListener for MessageGenerator {
    fn update(&mut self, control: Control, value: ControlValue) {
        self.last_message = format!("{} control changed to {}", control.name(), value);
        println!("Notification: {}", self.last_message);
    }
}
