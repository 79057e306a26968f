//! Components of user interface, passing user input to DSP.
//!
//! The control side runs in a slower, non-realtime loop. It translates user
//! facing units into DSP attributes and publishes them to the audio loop as
//! whole snapshots:
//!
//! ```text
//!    [ Host messages ]
//!            |
//!            | (ControlAction)
//!            V
//!   [ Reducer {Cache} ]
//!            |
//!            | (Attributes)
//!            V
//!        [ Link ] --------> [ DSPLoop {Processor} ]
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]

#[cfg(test)]
#[macro_use]
extern crate approx;

mod arguments;
mod cache;
pub mod link;
mod log;
mod reconcile;

pub use peakcomp_dsp::processor::Attributes;

pub use crate::arguments::Arguments;
pub use crate::cache::{Cache, Inputs};
pub use crate::reconcile::db_to_linear;

/// Parameter change requested by the user, in user facing units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlAction {
    /// Decibels.
    SetThreshold(f32),
    SetRatio(f32),
    /// Milliseconds.
    SetAttack(f32),
    /// Milliseconds.
    SetRelease(f32),
    /// Decibels.
    SetMakeup(f32),
    /// Normalized between 0.0 (hard) and 1.0 (soft).
    SetKnee(f32),
}

/// Outcome of applying a parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Validation {
    Accepted,
    /// The value was out of range and replaced by a fallback.
    Clamped,
    /// The value was out of range and the previous state was kept.
    Ignored,
}

#[must_use]
pub fn reduce_control_action(action: ControlAction, cache: &mut Cache) -> Attributes {
    cache.apply_control_action(action);
    cache.attributes
}
