//! Drawing a concrete action from an action distribution.

use super::{
    DecisionConfig, PersonalityProfile,
    probability::ActionDistribution,
    sizer::{RaiseClass, choose_raise_class},
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level action classes of the distribution.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ActionClass {
    Fold,
    Call,
    Raise,
}

/// Possible AI actions, with raises split by size.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum AiAction {
    Fold,
    Call,
    /// Raise by 25% of the bet (at least 25)
    RaiseSmall,
    /// Raise by 50% of the bet (at least 50)
    RaiseMedium,
    /// Raise by 100% of the bet (at least 100)
    RaiseLarge,
    AllIn,
}

impl AiAction {
    pub fn is_raise(&self) -> bool {
        matches!(
            self,
            Self::RaiseSmall | Self::RaiseMedium | Self::RaiseLarge | Self::AllIn
        )
    }
}

impl From<RaiseClass> for AiAction {
    fn from(class: RaiseClass) -> Self {
        match class {
            RaiseClass::Small => Self::RaiseSmall,
            RaiseClass::Medium => Self::RaiseMedium,
            RaiseClass::Large => Self::RaiseLarge,
            RaiseClass::AllIn => Self::AllIn,
        }
    }
}

impl fmt::Display for AiAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Fold => "fold",
            Self::Call => "call",
            Self::RaiseSmall => "small raise",
            Self::RaiseMedium => "medium raise",
            Self::RaiseLarge => "large raise",
            Self::AllIn => "all-in",
        };
        write!(f, "{repr}")
    }
}

/// Draw one action class with a single uniform roll in `[0, 1)`.
pub fn sample_class<R: Rng + ?Sized>(distribution: &ActionDistribution, rng: &mut R) -> ActionClass {
    let roll: f64 = rng.random();
    if roll < distribution.fold {
        ActionClass::Fold
    } else if roll < distribution.fold + distribution.call {
        ActionClass::Call
    } else {
        ActionClass::Raise
    }
}

/// Draw a concrete action.
///
/// The class roll always happens first; a raise then takes its size from
/// the personality via [`choose_raise_class`], drawing from the same RNG.
pub fn sample<R: Rng + ?Sized>(
    config: &DecisionConfig,
    distribution: &ActionDistribution,
    profile: &PersonalityProfile,
    hand_strength: f64,
    rng: &mut R,
) -> AiAction {
    match sample_class(distribution, rng) {
        ActionClass::Fold => AiAction::Fold,
        ActionClass::Call => AiAction::Call,
        ActionClass::Raise => choose_raise_class(config, profile, hand_strength, rng).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::PersonalityTable;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_certain_distributions() {
        let mut rng = StdRng::seed_from_u64(11);
        let always_fold = ActionDistribution {
            fold: 1.0,
            call: 0.0,
            raise: 0.0,
        };
        let always_raise = ActionDistribution {
            fold: 0.0,
            call: 0.0,
            raise: 1.0,
        };

        for _ in 0..100 {
            assert_eq!(sample_class(&always_fold, &mut rng), ActionClass::Fold);
            assert_eq!(
                sample_class(&ActionDistribution::ALWAYS_CALL, &mut rng),
                ActionClass::Call
            );
            assert_eq!(sample_class(&always_raise, &mut rng), ActionClass::Raise);
        }
    }

    #[test]
    fn test_frequencies_follow_distribution() {
        let mut rng = StdRng::seed_from_u64(12);
        let dist = ActionDistribution {
            fold: 0.2,
            call: 0.5,
            raise: 0.3,
        };

        let trials = 10_000;
        let mut folds = 0;
        let mut calls = 0;
        for _ in 0..trials {
            match sample_class(&dist, &mut rng) {
                ActionClass::Fold => folds += 1,
                ActionClass::Call => calls += 1,
                ActionClass::Raise => {}
            }
        }

        assert!((1700..2300).contains(&folds), "folds: {}", folds);
        assert!((4600..5400).contains(&calls), "calls: {}", calls);
    }

    #[test]
    fn test_same_seed_same_actions() {
        let config = DecisionConfig::default();
        let table = PersonalityTable::standard();
        let profile = table.get("Lively").expect("preset");
        let dist = ActionDistribution {
            fold: 0.1,
            call: 0.3,
            raise: 0.6,
        };

        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(
                sample(&config, &dist, profile, 0.9, &mut a),
                sample(&config, &dist, profile, 0.9, &mut b)
            );
        }
    }

    #[test]
    fn test_raise_class_maps_to_action() {
        assert_eq!(AiAction::from(RaiseClass::Small), AiAction::RaiseSmall);
        assert_eq!(AiAction::from(RaiseClass::AllIn), AiAction::AllIn);
        assert!(AiAction::AllIn.is_raise());
        assert!(!AiAction::Call.is_raise());
    }
}
