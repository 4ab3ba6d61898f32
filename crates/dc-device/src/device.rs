//! Virtual audio interface device
//!
//! Provides a simulated device that publishes a change notification to its
//! listeners whenever a control setter runs.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::control::{Control, ControlValue, MINUS_INFINITY_DB, UNITY_GAIN_DB};
use crate::listener::ListenerHandle;

/// A simulated audio interface with observable control state
///
/// The device stores whatever its setters are given; range checking is the
/// command layer's responsibility. Every setter invocation publishes one
/// notification to all registered listeners, in registration order, even
/// when the new value equals the old one.
pub struct Device {
    /// Immutable model name, set at construction
    model_name: String,
    /// Current preamp gain in dB
    preamp_level_db: i32,
    /// Current 48V phantom power state
    phantom_power: bool,
    /// Registered listeners, notified in insertion order
    listeners: Vec<ListenerHandle>,
}

/// Configuration for creating a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Display name of the simulated model
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Initial preamp gain in dB, clamped into the valid range
    #[serde(default = "default_preamp_level")]
    pub initial_preamp_level_db: i32,
    /// Initial phantom power state
    #[serde(default)]
    pub initial_phantom_power: bool,
}

fn default_model_name() -> String {
    "Scarlett 2i2 4th Gen [virtual]".to_string()
}

fn default_preamp_level() -> i32 {
    MINUS_INFINITY_DB
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            model_name: default_model_name(),
            initial_preamp_level_db: MINUS_INFINITY_DB,
            initial_phantom_power: false,
        }
    }
}

impl Device {
    /// Create a new device with all controls at their defaults
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            preamp_level_db: MINUS_INFINITY_DB,
            phantom_power: false,
            listeners: Vec::new(),
        }
    }

    /// Create a device from configuration
    ///
    /// The initial preamp level is clamped into
    /// [`MINUS_INFINITY_DB`]..=[`UNITY_GAIN_DB`] so the range invariant
    /// holds from construction. No notifications fire for initial values.
    pub fn from_config(config: DeviceConfig) -> Self {
        Self {
            model_name: config.model_name,
            preamp_level_db: config
                .initial_preamp_level_db
                .clamp(MINUS_INFINITY_DB, UNITY_GAIN_DB),
            phantom_power: config.initial_phantom_power,
            listeners: Vec::new(),
        }
    }

    /// Get the device's model name
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Register a listener
    ///
    /// Listeners are notified in registration order. The same handle may be
    /// registered more than once; it then receives one update per entry.
    pub fn add_listener(&mut self, listener: ListenerHandle) {
        self.listeners.push(listener);
    }

    /// Unregister a listener
    ///
    /// Removes every entry that is pointer-equal to `listener`. Silent
    /// no-op when the handle was never registered.
    pub fn remove_listener(&mut self, listener: &ListenerHandle) {
        self.listeners.retain(|l| !Rc::ptr_eq(l, listener));
    }

    /// Number of currently registered listener entries
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Get the current preamp level in dB
    pub fn preamp_level(&self) -> i32 {
        self.preamp_level_db
    }

    /// Set the preamp level and publish the change
    ///
    /// Stores `level_db` unconditionally; callers validate the range.
    pub fn set_preamp_level(&mut self, level_db: i32) {
        self.preamp_level_db = level_db;
        debug!(level_db, "preamp level set");
        self.notify_listeners(Control::PreampLevel, ControlValue::Db(level_db));
    }

    /// Get the current phantom power state
    pub fn phantom_power(&self) -> bool {
        self.phantom_power
    }

    /// Set the phantom power state and publish the change
    pub fn set_phantom_power(&mut self, enabled: bool) {
        self.phantom_power = enabled;
        debug!(enabled, "phantom power set");
        self.notify_listeners(Control::PhantomPower, ControlValue::Switch(enabled));
    }

    /// Blocking, in-order fan-out to every registered listener
    fn notify_listeners(&self, control: Control, value: ControlValue) {
        for listener in &self.listeners {
            listener.borrow_mut().update(control, value);
        }
    }
}
