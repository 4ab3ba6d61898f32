//! Command line parsing and validation
//!
//! Maps one raw input line to a validated control mutation or a typed
//! rejection. Keyword matching is a literal, case-sensitive prefix match;
//! only the phantom power *value* is case-insensitive. The non-mutating
//! `status` and `quit` commands are the read loop's business, not ours.

use tracing::trace;

use dc_device::{Device, MINUS_INFINITY_DB, UNITY_GAIN_DB};

use crate::error::CommandError;

/// Command keyword for setting the preamp level
const SET_PREAMP_LEVEL: &str = "set-preamp-level";

/// Command keyword for setting phantom power
const SET_PHANTOM_POWER: &str = "set-phantom-power";

/// Mutation seam between the command layer and the device
///
/// The parser validates and then calls exactly one of these on success.
/// Implemented by [`Device`]; tests substitute recording targets.
pub trait ControlTarget {
    /// Store a validated preamp level in dB
    fn set_preamp_level(&mut self, level_db: i32);

    /// Store a validated phantom power state
    fn set_phantom_power(&mut self, enabled: bool);
}

impl ControlTarget for Device {
    fn set_preamp_level(&mut self, level_db: i32) {
        Device::set_preamp_level(self, level_db);
    }

    fn set_phantom_power(&mut self, enabled: bool) {
        Device::set_phantom_power(self, enabled);
    }
}

/// Parse one command line and apply it to `target`
///
/// On success exactly one setter has run; on any error the target is
/// untouched.
pub fn process_command(line: &str, target: &mut dyn ControlTarget) -> Result<(), CommandError> {
    if let Some(value) = extract_value(line, SET_PREAMP_LEVEL) {
        let level_db = parse_preamp_level(&value?)?;
        target.set_preamp_level(level_db);
        trace!(line, level_db, "preamp level command accepted");
        return Ok(());
    }

    if let Some(value) = extract_value(line, SET_PHANTOM_POWER) {
        let enabled = parse_switch(&value?)?;
        target.set_phantom_power(enabled);
        trace!(line, enabled, "phantom power command accepted");
        return Ok(());
    }

    Err(CommandError::UnknownCommand(line.to_string()))
}

/// Extract the value following a command keyword
///
/// `None` when the keyword does not prefix the line. Otherwise deletes
/// every whitespace character from the remainder, not only the ends
/// (`"set-preamp-level -1 2"` yields `-12`), and rejects an empty result
/// with [`CommandError::EmptyValue`].
fn extract_value(line: &str, keyword: &str) -> Option<Result<String, CommandError>> {
    let rest = line.strip_prefix(keyword)?;
    let value: String = rest.chars().filter(|c| !c.is_whitespace()).collect();

    if value.is_empty() {
        return Some(Err(CommandError::EmptyValue));
    }

    Some(Ok(value))
}

/// Validate a preamp level value: base-10 integer within the dB range
fn parse_preamp_level(value: &str) -> Result<i32, CommandError> {
    let level_db = value
        .parse::<i32>()
        .map_err(|_| CommandError::NotANumber(value.to_string()))?;

    if !(MINUS_INFINITY_DB..=UNITY_GAIN_DB).contains(&level_db) {
        return Err(CommandError::OutOfRange(level_db));
    }

    Ok(level_db)
}

/// Validate a phantom power value: on/1/off/0, case-insensitive
fn parse_switch(value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "1" => Ok(true),
        "off" | "0" => Ok(false),
        _ => Err(CommandError::InvalidSwitchValue(value.to_string())),
    }
}
