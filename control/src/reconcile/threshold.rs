use super::db_to_linear;
use crate::log;
use crate::{Cache, Validation};

impl Cache {
    /// Set threshold in decibels.
    ///
    /// Threshold above 0 dB is not clamped to unity. It is forced to zero
    /// instead, so the whole signal above silence gets compressed.
    pub fn set_threshold(&mut self, db: f32) -> Validation {
        self.inputs.threshold = db;
        if db <= 0.0 {
            self.attributes.threshold = db_to_linear(db);
            Validation::Accepted
        } else {
            log::warning!("Threshold {} dB is above zero, compressing everything", db);
            self.attributes.threshold = 0.0;
            Validation::Clamped
        }
    }
}
