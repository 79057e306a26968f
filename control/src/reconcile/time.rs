use crate::log;
use crate::{Cache, Validation};

// Attack and release shorter than this are replaced by a fixed floor.
const MIN_TIME_IN_MS: f32 = 0.001;
const FLOOR_IN_SECONDS: f32 = 0.000_001;

// Knee 0.0 is hard, knee 1.0 smoothens gain changes over 20 ms.
const KNEE_RANGE: (f32, f32) = (0.0, 1.0);
const KNEE_MAX_IN_SECONDS: f32 = 0.02;

impl Cache {
    pub fn set_attack(&mut self, ms: f32) -> Validation {
        self.inputs.attack = ms;
        let (seconds, validation) = time_in_seconds(ms);
        self.attributes.attack = seconds;
        validation
    }

    pub fn set_release(&mut self, ms: f32) -> Validation {
        self.inputs.release = ms;
        let (seconds, validation) = time_in_seconds(ms);
        self.attributes.release = seconds;
        validation
    }

    /// Values outside of the knee range are ignored, keeping the previous knee.
    pub fn set_knee(&mut self, knee: f32) -> Validation {
        if (KNEE_RANGE.0..=KNEE_RANGE.1).contains(&knee) {
            self.inputs.knee = knee;
            self.attributes.knee = knee * KNEE_MAX_IN_SECONDS;
            Validation::Accepted
        } else {
            log::warning!("Knee {} is out of range, ignoring", knee);
            Validation::Ignored
        }
    }
}

fn time_in_seconds(ms: f32) -> (f32, Validation) {
    if ms >= MIN_TIME_IN_MS {
        (ms * 0.001, Validation::Accepted)
    } else {
        log::warning!("Time {} ms is too short, using the minimum", ms);
        (FLOOR_IN_SECONDS, Validation::Clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_and_release_are_converted_to_seconds() {
        let mut cache = Cache::default();
        assert_eq!(cache.set_attack(10.0), Validation::Accepted);
        assert_eq!(cache.set_release(100.0), Validation::Accepted);
        assert_relative_eq!(cache.attributes.attack, 0.01, max_relative = 1e-6);
        assert_relative_eq!(cache.attributes.release, 0.1, max_relative = 1e-6);
    }

    #[test]
    fn minimal_time_is_accepted() {
        let mut cache = Cache::default();
        assert_eq!(cache.set_attack(0.001), Validation::Accepted);
        assert_relative_eq!(cache.attributes.attack, 0.000_001, max_relative = 1e-6);
    }

    #[test]
    fn too_short_time_uses_fixed_floor() {
        let mut cache = Cache::default();
        assert_eq!(cache.set_attack(0.000_5), Validation::Clamped);
        assert_relative_eq!(cache.attributes.attack, FLOOR_IN_SECONDS);
        assert_eq!(cache.set_release(-50.0), Validation::Clamped);
        assert_relative_eq!(cache.attributes.release, FLOOR_IN_SECONDS);
    }

    #[test]
    fn knee_scales_up_to_twenty_milliseconds() {
        let mut cache = Cache::default();
        assert_eq!(cache.set_knee(1.0), Validation::Accepted);
        assert_relative_eq!(cache.attributes.knee, 0.02, max_relative = 1e-6);
        assert_eq!(cache.set_knee(0.5), Validation::Accepted);
        assert_relative_eq!(cache.attributes.knee, 0.01, max_relative = 1e-6);
        assert_eq!(cache.set_knee(0.0), Validation::Accepted);
        assert_eq!(cache.attributes.knee, 0.0);
    }

    #[test]
    fn knee_out_of_range_is_ignored() {
        let mut cache = Cache::default();
        cache.set_knee(0.5);
        for knee in [-0.1, 1.1, f32::NAN] {
            assert_eq!(cache.set_knee(knee), Validation::Ignored);
            assert_relative_eq!(cache.attributes.knee, 0.01, max_relative = 1e-6);
            assert_relative_eq!(cache.inputs.knee, 0.5);
        }
    }
}
