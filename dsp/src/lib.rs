//! Digital signal processing components that must run in real-time.
//!
//! Nothing in this crate allocates or blocks. Parameters are prepared by the
//! control layer and installed into the [`processor::Processor`] between
//! blocks as complete [`processor::Attributes`].

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod coefficients;
pub mod compressor;
pub mod one_pole_filter;
pub mod processor;
