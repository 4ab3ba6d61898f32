//! Error types for command parsing and validation

use thiserror::Error;

use dc_device::{MINUS_INFINITY_DB, UNITY_GAIN_DB};

/// Reasons a command line can be rejected
///
/// All variants are recoverable and local to a single command; the caller
/// renders one line and keeps reading. The device is never mutated on any
/// rejection path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No known command keyword matched the line
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command keyword matched but carried no value
    #[error("missing value")]
    EmptyValue,

    /// The preamp level value did not parse as a base-10 integer
    #[error("not a number: {0}")]
    NotANumber(String),

    /// The preamp level parsed but lies outside the valid range
    #[error("level {0} dB out of range [{MINUS_INFINITY_DB} .. {UNITY_GAIN_DB}]")]
    OutOfRange(i32),

    /// The phantom power value was not one of on/1/off/0
    #[error("invalid switch value: {0}")]
    InvalidSwitchValue(String),
}
