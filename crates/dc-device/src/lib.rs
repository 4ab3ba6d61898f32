//! Device Control device model
//!
//! This crate provides the core model for a simulated audio interface:
//!
//! - **Device**: control state holder that publishes every mutation to its
//!   registered listeners
//! - **DeviceListener**: capability implemented by anything that wants to
//!   observe control changes
//! - **MessageGenerator**: reference listener that renders changes as
//!   human-readable notification lines
//!
//! # Architecture
//!
//! The device is a pure state + pub-sub primitive. Setters store whatever
//! they are given and notify listeners synchronously, in registration
//! order, before returning. Range and format validation belong to the
//! command layer (`dc-command`), which keeps the device testable
//! independent of any command syntax.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use dc_device::{Device, MessageGenerator};
//!
//! let mut device = Device::new("Scarlett 2i2 4th Gen [virtual]");
//!
//! let formatter = Rc::new(RefCell::new(MessageGenerator::new()));
//! device.add_listener(formatter.clone());
//!
//! device.set_preamp_level(-6);
//! assert_eq!(
//!     formatter.borrow().last_message(),
//!     "preampLevel control changed to -6"
//! );
//! ```

pub mod control;
pub mod device;
pub mod listener;
pub mod message;

pub use control::{Control, ControlValue, MINUS_INFINITY_DB, UNITY_GAIN_DB};
pub use device::{Device, DeviceConfig};
pub use listener::{DeviceListener, ListenerHandle};
pub use message::MessageGenerator;
