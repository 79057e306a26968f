//! Main interface for the DSP loop.

use crate::coefficients::Coefficients;
use crate::compressor::{Attributes as CompressorAttributes, Block, BlockMut, Compressor};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Processor {
    sample_rate: f32,
    inv_sample_rate: f32,
    attributes: Attributes,
    compressor_attributes: CompressorAttributes,
    coefficients: Coefficients,
    compressor: Compressor,
}

/// Complete set of parameters in internal units.
///
/// Gains are linear and time constants are in seconds. The attributes are
/// always passed as a whole, so the DSP loop never observes a half-applied
/// change.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attributes {
    pub threshold: f32,
    /// Inverse of the ratio, within (0, 1].
    pub ratio: f32,
    pub attack: f32,
    pub release: f32,
    pub knee: f32,
    pub makeup: f32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            threshold: 1.0,
            ratio: 1.0,
            attack: 0.000_001,
            release: 0.000_001,
            knee: 0.0,
            makeup: 1.0,
        }
    }
}

impl Attributes {
    fn time_constants(&self) -> (f32, f32, f32) {
        (self.attack, self.release, self.knee)
    }
}

impl Processor {
    #[must_use]
    pub fn new(sample_rate: f32) -> Self {
        let attributes = Attributes::default();
        let inv_sample_rate = 1.0 / sample_rate;
        Self {
            sample_rate,
            inv_sample_rate,
            attributes,
            compressor_attributes: attributes.into(),
            coefficients: coefficients(inv_sample_rate, &attributes),
            compressor: Compressor::new(),
        }
    }

    /// Prepare for a new processing session.
    ///
    /// This must be called before the first block and whenever the host
    /// reconfigures the stream. All filter memory is discarded.
    #[allow(clippy::float_cmp)]
    pub fn setup(&mut self, sample_rate: f32) {
        self.compressor.reset();

        if sample_rate != self.sample_rate {
            self.sample_rate = sample_rate;
            self.inv_sample_rate = 1.0 / sample_rate;
            self.coefficients = coefficients(self.inv_sample_rate, &self.attributes);
        }
    }

    /// Install a new set of attributes. Call it between blocks.
    pub fn set_attributes(&mut self, attributes: Attributes) {
        let time_constants_changed =
            attributes.time_constants() != self.attributes.time_constants();
        self.attributes = attributes;
        self.compressor_attributes = attributes.into();
        if time_constants_changed {
            self.coefficients = coefficients(self.inv_sample_rate, &self.attributes);
        }
    }

    pub fn process(&mut self, input: Block<'_>, output: BlockMut<'_>) {
        self.compressor.process(
            &self.coefficients,
            &self.compressor_attributes,
            input,
            output,
        );
    }

    pub fn process_in_place(
        &mut self,
        buffer_left: &mut [f32],
        buffer_right: &mut [f32],
        buffer_gain: &mut [f32],
    ) {
        self.compressor.process_in_place(
            &self.coefficients,
            &self.compressor_attributes,
            buffer_left,
            buffer_right,
            buffer_gain,
        );
    }

    #[must_use]
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    #[must_use]
    pub fn attributes(&self) -> Attributes {
        self.attributes
    }

    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }
}

fn coefficients(inv_sample_rate: f32, attributes: &Attributes) -> Coefficients {
    Coefficients::new(
        inv_sample_rate,
        attributes.attack,
        attributes.release,
        attributes.knee,
    )
}

impl From<Attributes> for CompressorAttributes {
    fn from(other: Attributes) -> Self {
        Self {
            threshold: other.threshold,
            ratio: other.ratio,
            makeup: other.makeup,
        }
    }
}
