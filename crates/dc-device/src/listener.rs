//! Listener capability for observing control changes

use std::cell::RefCell;
use std::rc::Rc;

use crate::control::{Control, ControlValue};

/// Capability notified synchronously whenever a device control changes
///
/// Any number of independent implementations may observe the same device;
/// the device holds shared handles and never controls a listener's
/// destruction, only whether it is notified.
///
/// # Reentrancy
///
/// `update` must not add or remove listeners on the device that is
/// notifying it; iteration order and safety during such reentry are
/// undefined.
pub trait DeviceListener {
    /// Called once per setter invocation with the control and its new value
    fn update(&mut self, control: Control, value: ControlValue);
}

/// Shared handle to a listener
///
/// Listeners are reference-counted so a single listener can observe several
/// devices, or outlive any of them. Removal compares handles by pointer
/// identity, never by value.
pub type ListenerHandle = Rc<RefCell<dyn DeviceListener>>;
