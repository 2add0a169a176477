//! Raise sub-decision and chip amounts for each action.

use super::{DecisionConfig, PersonalityProfile, sampler::AiAction};
use crate::entities::Chips;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raise size tiers.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RaiseClass {
    Small,
    Medium,
    Large,
    AllIn,
}

impl fmt::Display for RaiseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::AllIn => "all-in",
        };
        write!(f, "{repr}")
    }
}

/// Choose how big to raise from personality and hand strength.
///
/// Bold players (aggressiveness or confidence at the bold threshold) shove
/// some strong hands and otherwise lean large; assertive players lean
/// medium; everyone else raises small without touching the RNG.
pub fn choose_raise_class<R: Rng + ?Sized>(
    config: &DecisionConfig,
    profile: &PersonalityProfile,
    hand_strength: f64,
    rng: &mut R,
) -> RaiseClass {
    let aggressiveness = profile.aggressiveness();
    let confidence = profile.confidence();

    if aggressiveness >= config.bold_trait_threshold || confidence >= config.bold_trait_threshold {
        if hand_strength >= config.all_in_hand_threshold
            && rng.random::<f64>() < config.all_in_probability
        {
            RaiseClass::AllIn
        } else if rng.random::<f64>() < config.bold_large_probability {
            RaiseClass::Large
        } else {
            RaiseClass::Medium
        }
    } else if aggressiveness >= config.assertive_trait_threshold
        || confidence >= config.assertive_trait_threshold
    {
        if rng.random::<f64>() < config.assertive_medium_probability {
            RaiseClass::Medium
        } else {
            RaiseClass::Large
        }
    } else {
        RaiseClass::Small
    }
}

/// Chip amount for an action, capped at the player's stack.
///
/// Folding still returns a forced minimum of `min(bet, chips / 10)`; the
/// caller is responsible for marking the player as folded.
///
/// # Examples
///
/// ```
/// use pokermon::ai::{AiAction, DecisionConfig, sizer::bet_for_action};
///
/// let config = DecisionConfig::default();
/// assert_eq!(bet_for_action(&config, AiAction::RaiseLarge, 1000, 100), 200);
/// assert_eq!(bet_for_action(&config, AiAction::Fold, 1000, 200), 100);
/// ```
pub fn bet_for_action(
    config: &DecisionConfig,
    action: AiAction,
    chips: Chips,
    current_bet: Chips,
) -> Chips {
    match action {
        AiAction::Fold => current_bet.min(chips / config.fold_stack_divisor.max(1)),
        AiAction::Call => current_bet.min(chips),
        AiAction::RaiseSmall => {
            let raise = config
                .small_raise_floor
                .max(current_bet / config.small_raise_divisor.max(1));
            current_bet.saturating_add(raise).min(chips)
        }
        AiAction::RaiseMedium => {
            let raise = config
                .medium_raise_floor
                .max(current_bet / config.medium_raise_divisor.max(1));
            current_bet.saturating_add(raise).min(chips)
        }
        AiAction::RaiseLarge => {
            let raise = config.large_raise_floor.max(current_bet);
            current_bet.saturating_add(raise).min(chips)
        }
        AiAction::AllIn => chips,
    }
}
