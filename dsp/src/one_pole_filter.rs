//! Building blocks of a one-pole low-pass filter.
//!
//! The filter follows `y[n] = (1 - c) * x[n] + c * y[n - 1]`. Coefficients are
//! derived from a time constant, so they can be shared by the stages of the
//! compressor while each stage keeps its own two-slot memory.

use libm::expf;

/// Coefficient pair of a one-pole filter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OnePoleCoefficients {
    pub coefficient: f32,
    pub complement: f32,
}

impl Default for OnePoleCoefficients {
    fn default() -> Self {
        Self::instant()
    }
}

impl OnePoleCoefficients {
    /// Coefficients letting the input through without any smoothing.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            coefficient: 0.0,
            complement: 1.0,
        }
    }

    /// Derive coefficients for time constant `tau` given in seconds.
    ///
    /// Non-positive time constant responds instantly.
    #[must_use]
    pub fn from_time_constant(inv_sample_rate: f32, tau: f32) -> Self {
        if tau.is_nan() || tau <= 0.0 {
            return Self::instant();
        }
        let coefficient = expf(-inv_sample_rate / tau).clamp(0.0, 1.0);
        Self {
            coefficient,
            complement: 1.0 - coefficient,
        }
    }
}

/// Memory of a single filter stage.
///
/// `current` is written while processing a sample, `previous` holds the
/// output of the sample before. They are only synchronized by `advance`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterCell {
    pub current: f32,
    pub previous: f32,
}

impl FilterCell {
    pub fn advance(&mut self) {
        self.previous = self.current;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
