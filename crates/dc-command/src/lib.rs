//! Device Control command layer
//!
//! Turns free-text command lines into validated mutations of a
//! [`dc_device::Device`]. The split mirrors the device model's contract:
//! the device stores whatever its setters receive, so every range and
//! format check lives here.
//!
//! # Example
//!
//! ```rust
//! use dc_command::{process_command, CommandError};
//! use dc_device::Device;
//!
//! let mut device = Device::new("testDevice");
//!
//! process_command("set-preamp-level -6", &mut device).unwrap();
//! assert_eq!(device.preamp_level(), -6);
//!
//! let err = process_command("set-preamp-level 12", &mut device).unwrap_err();
//! assert_eq!(err, CommandError::OutOfRange(12));
//! assert_eq!(device.preamp_level(), -6);
//! ```

pub mod error;
pub mod parser;

pub use error::CommandError;
pub use parser::{process_command, ControlTarget};
