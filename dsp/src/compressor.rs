//! Stereo peak compressor.
//!
//! Both channels are summed into a single peak detector, so they are always
//! attenuated by the same amount. The detector passes through three cascaded
//! one-pole stages:
//!
//! 1. Release, holding peaks instantly and letting them decay slowly.
//! 2. Attack, smoothing the held envelope.
//! 3. Knee, smoothing the gain computed from the envelope.
//!
//! Inspired by
//! <http://www.eecs.qmul.ac.uk/~josh/documents/GiannoulisMassbergReiss-dynamicrangecompression-JAES2012.pdf>
//! and <https://ccrma.stanford.edu/~jos/filters/Nonlinear_Filter_Example_Dynamic.htm>.

use libm::fabsf;

use crate::coefficients::Coefficients;
use crate::one_pole_filter::FilterCell;

/// Gain curve parameters, all in linear units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Attributes {
    pub threshold: f32,
    /// Inverse of the ratio, within (0, 1].
    pub ratio: f32,
    pub makeup: f32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            threshold: 1.0,
            ratio: 1.0,
            makeup: 1.0,
        }
    }
}

/// Output of a single processed sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub left: f32,
    pub right: f32,
    /// Applied gain before makeup, 1.0 means no reduction.
    pub gain: f32,
}

/// Input streams of a block.
#[derive(Clone, Copy, Debug)]
pub struct Block<'a> {
    pub left: &'a [f32],
    pub right: &'a [f32],
}

/// Output streams of a block.
#[derive(Debug)]
pub struct BlockMut<'a> {
    pub left: &'a mut [f32],
    pub right: &'a mut [f32],
    pub gain: &'a mut [f32],
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Compressor {
    release: FilterCell,
    attack: FilterCell,
    knee: FilterCell,
}

impl Compressor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all history. Must not be called in the middle of a stream.
    pub fn reset(&mut self) {
        self.release.reset();
        self.attack.reset();
        self.knee.reset();
    }

    pub fn process_sample(
        &mut self,
        coefficients: &Coefficients,
        attributes: &Attributes,
        left: f32,
        right: f32,
    ) -> Frame {
        let peak = fabsf(left) + fabsf(right);

        self.release.current = coefficients.release.complement * peak
            + coefficients.release.coefficient * f32::max(peak, self.release.previous);

        self.attack.current = coefficients.attack.complement * self.release.current
            + coefficients.attack.coefficient * self.attack.previous;

        let gain = gain_curve(self.attack.current, attributes.threshold, attributes.ratio);
        // Clamped so rounding of the complement never pushes it past unity.
        self.knee.current = (coefficients.knee.complement * gain
            + coefficients.knee.coefficient * self.knee.previous)
            .clamp(0.0, 1.0);

        let amplification = self.knee.current * attributes.makeup;
        let frame = Frame {
            left: left * amplification,
            right: right * amplification,
            gain: self.knee.current,
        };

        // All stages have read their history by now.
        self.release.advance();
        self.attack.advance();
        self.knee.advance();

        frame
    }

    /// Process a block. Streams are processed up to the shortest of them.
    pub fn process(
        &mut self,
        coefficients: &Coefficients,
        attributes: &Attributes,
        input: Block<'_>,
        output: BlockMut<'_>,
    ) {
        debug_assert_eq!(input.left.len(), input.right.len());
        debug_assert_eq!(input.left.len(), output.left.len());

        let inputs = input.left.iter().zip(input.right);
        let outputs = output
            .left
            .iter_mut()
            .zip(output.right.iter_mut())
            .zip(output.gain.iter_mut());
        for ((l, r), ((out_l, out_r), out_gain)) in inputs.zip(outputs) {
            let frame = self.process_sample(coefficients, attributes, *l, *r);
            *out_l = frame.left;
            *out_r = frame.right;
            *out_gain = frame.gain;
        }
    }

    /// Process a block overwriting the input buffers.
    pub fn process_in_place(
        &mut self,
        coefficients: &Coefficients,
        attributes: &Attributes,
        buffer_left: &mut [f32],
        buffer_right: &mut [f32],
        buffer_gain: &mut [f32],
    ) {
        debug_assert_eq!(buffer_left.len(), buffer_right.len());

        for ((l, r), g) in buffer_left
            .iter_mut()
            .zip(buffer_right.iter_mut())
            .zip(buffer_gain.iter_mut())
        {
            let frame = self.process_sample(coefficients, attributes, *l, *r);
            *l = frame.left;
            *r = frame.right;
            *g = frame.gain;
        }
    }
}

/// Gain needed to bring `envelope` onto the compression curve.
///
/// Zero envelope has nothing to reduce, so it is defined as unity gain
/// instead of leaving it to `0.0 / 0.0`.
fn gain_curve(envelope: f32, threshold: f32, ratio: f32) -> f32 {
    if envelope <= 0.0 {
        return 1.0;
    }
    let gain = (threshold + ratio * (envelope - threshold)) / envelope;
    if gain.is_nan() {
        1.0
    } else {
        gain.clamp(0.0, 1.0)
    }
}
