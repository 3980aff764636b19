//! Interaction logic for a dual-handle range slider.
//!
//! The [`RangeController`] turns pointer and touch positions on a horizontal
//! track into quantized handle percentages and reports the selection back in
//! the caller's value space. [`components::RangeInput`] renders it with Yew and
//! [`bindings::RangeSlider`] exposes it to plain JavaScript hosts.

use std::fmt;

pub mod bindings;
pub mod components;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod hooks;
pub mod range;

pub use config::RangeConfig;
pub use controller::{
    ControllerSlot, DragState, Handle, RangeController, RangeValues, ReleaseOutcome, TrackGeometry,
};
pub use range::RangeScale;

/// Reasons a range cannot be built from its configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeError {
    /// Both boundary values are equal; the control is disabled.
    DegenerateRange { value: f64 },
    NonFiniteBound,
    /// A configuration object from the host could not be read.
    InvalidConfig(String),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::DegenerateRange { value } => write!(
                f,
                "Range is empty: begin and end value are both {}",
                value
            ),
            RangeError::NonFiniteBound => {
                write!(f, "Range boundaries must be finite numbers")
            }
            RangeError::InvalidConfig(reason) => {
                write!(f, "Invalid range configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for RangeError {}
