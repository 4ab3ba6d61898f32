//! Control identifiers and values
//!
//! Every device setting is a named control with exactly one concrete value
//! type. The closed [`ControlValue`] sum type keeps handling exhaustive at
//! each listener instead of pushing a dynamically-typed value around.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Preamp gain floor in dB, rendered as "minus infinity" (effective silence)
pub const MINUS_INFINITY_DB: i32 = -127;

/// Preamp gain ceiling in dB (unity gain)
pub const UNITY_GAIN_DB: i32 = 0;

/// Identifies a device control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    /// Preamp gain in dB
    PreampLevel,
    /// 48V phantom power switch
    PhantomPower,
}

impl Control {
    /// Returns the control's wire-facing name, as published to listeners
    pub fn name(&self) -> &'static str {
        match self {
            Control::PreampLevel => "preampLevel",
            Control::PhantomPower => "phantomPower",
        }
    }
}

/// Value carried by a control change notification
///
/// Exactly one variant applies per control: [`Control::PreampLevel`] carries
/// [`ControlValue::Db`], [`Control::PhantomPower`] carries
/// [`ControlValue::Switch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlValue {
    /// Integer value in decibels
    Db(i32),
    /// On/off switch state
    Switch(bool),
}

impl fmt::Display for ControlValue {
    /// Integers render as decimal, switches as `on`/`off`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlValue::Db(db) => write!(f, "{}", db),
            ControlValue::Switch(on) => write!(f, "{}", if *on { "on" } else { "off" }),
        }
    }
}
