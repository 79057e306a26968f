use peakcomp_dsp::processor::Attributes;

use crate::arguments::Arguments;
use crate::log;
use crate::{ControlAction, Validation};

/// Cache keeping the state of user parameters.
///
/// This information is sufficient to build attributes for DSP.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cache {
    pub inputs: Inputs,
    pub attributes: Attributes,
}

/// Last values received from the user, before validation.
///
/// Knee is only updated when it was accepted.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Inputs {
    pub threshold: f32,
    pub ratio: f32,
    pub attack: f32,
    pub release: f32,
    pub makeup: f32,
    pub knee: f32,
}

impl Default for Cache {
    fn default() -> Self {
        Self::new(Arguments::default())
    }
}

impl Cache {
    #[must_use]
    pub fn new(arguments: Arguments) -> Self {
        log::info!("peakcomp v{}", env!("CARGO_PKG_VERSION"));

        let mut cache = Self {
            inputs: Inputs::default(),
            attributes: Attributes::default(),
        };
        cache.set_threshold(arguments.threshold);
        cache.set_ratio(arguments.ratio);
        cache.set_attack(arguments.attack);
        cache.set_release(arguments.release);
        cache.set_makeup(arguments.makeup);
        cache.set_knee(arguments.knee.unwrap_or(0.0));
        cache
    }

    pub fn apply_control_action(&mut self, action: ControlAction) -> Validation {
        #[allow(clippy::enum_glob_use)]
        use ControlAction::*;
        match action {
            SetThreshold(x) => self.set_threshold(x),
            SetRatio(x) => self.set_ratio(x),
            SetAttack(x) => self.set_attack(x),
            SetRelease(x) => self.set_release(x),
            SetMakeup(x) => self.set_makeup(x),
            SetKnee(x) => self.set_knee(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_arguments_fall_back_to_neutral_attributes() {
        let cache = Cache::new(Arguments::default());
        assert_eq!(cache.attributes, Attributes::default());
    }

    #[test]
    fn arguments_are_validated_like_actions() {
        let cache = Cache::new(Arguments {
            threshold: -20.0,
            ratio: 4.0,
            attack: 10.0,
            release: 100.0,
            makeup: 0.0,
            knee: Some(0.5),
        });
        assert_relative_eq!(cache.attributes.threshold, 0.1, max_relative = 1e-6);
        assert_relative_eq!(cache.attributes.ratio, 0.25);
        assert_relative_eq!(cache.attributes.attack, 0.01, max_relative = 1e-6);
        assert_relative_eq!(cache.attributes.release, 0.1, max_relative = 1e-6);
        assert_relative_eq!(cache.attributes.makeup, 1.0);
        assert_relative_eq!(cache.attributes.knee, 0.01, max_relative = 1e-6);
    }

    #[test]
    fn invalid_knee_argument_keeps_hard_knee() {
        let cache = Cache::new(Arguments {
            knee: Some(3.0),
            ..Arguments::default()
        });
        assert_eq!(cache.attributes.knee, 0.0);
    }

    #[test]
    fn action_reports_validation_outcome() {
        let mut cache = Cache::default();
        assert_eq!(
            cache.apply_control_action(ControlAction::SetThreshold(-6.0)),
            Validation::Accepted
        );
        assert_eq!(
            cache.apply_control_action(ControlAction::SetRatio(0.2)),
            Validation::Clamped
        );
        assert_eq!(
            cache.apply_control_action(ControlAction::SetKnee(-1.0)),
            Validation::Ignored
        );
        assert_relative_eq!(cache.inputs.threshold, -6.0);
        assert_relative_eq!(cache.inputs.ratio, 0.2);
    }
}
