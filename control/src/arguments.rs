//! Parameters given when the compressor is created.

/// Creation arguments in user facing units.
///
/// Omitted arguments default to zero, and are then validated the same way as
/// control actions. That gives 0 dB threshold, 1:1 ratio, the shortest
/// attack and release, hard knee and no makeup gain.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Arguments {
    /// Decibels.
    pub threshold: f32,
    pub ratio: f32,
    /// Milliseconds.
    pub attack: f32,
    /// Milliseconds.
    pub release: f32,
    /// Decibels.
    pub makeup: f32,
    /// Normalized between 0.0 and 1.0, hard knee if omitted.
    pub knee: Option<f32>,
}
