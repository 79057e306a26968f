//! Coefficients of the three smoothing stages.

use crate::one_pole_filter::OnePoleCoefficients;

/// All coefficients used by the compressor.
///
/// They are always built together, so a change of a single time constant
/// or of the sample rate never leaves the others stale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coefficients {
    pub attack: OnePoleCoefficients,
    pub release: OnePoleCoefficients,
    pub knee: OnePoleCoefficients,
}

impl Coefficients {
    /// Time constants are in seconds.
    #[must_use]
    pub fn new(inv_sample_rate: f32, attack: f32, release: f32, knee: f32) -> Self {
        Self {
            attack: OnePoleCoefficients::from_time_constant(inv_sample_rate, attack),
            release: OnePoleCoefficients::from_time_constant(inv_sample_rate, release),
            knee: OnePoleCoefficients::from_time_constant(inv_sample_rate, knee),
        }
    }
}
