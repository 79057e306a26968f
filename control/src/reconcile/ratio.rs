use crate::log;
use crate::{Cache, Validation};

impl Cache {
    /// Ratios below 1:1 fall back to 1:1, no compression.
    pub fn set_ratio(&mut self, ratio: f32) -> Validation {
        self.inputs.ratio = ratio;
        if ratio >= 1.0 {
            self.attributes.ratio = 1.0 / ratio;
            Validation::Accepted
        } else {
            log::warning!("Ratio {} is below 1, falling back to 1", ratio);
            self.attributes.ratio = 1.0;
            Validation::Clamped
        }
    }
}
