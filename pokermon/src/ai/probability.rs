//! Fold/call/raise weights and their normalized distribution.
//!
//! Everything here is pure. The only random input, whether a bluff fired,
//! is drawn by the caller and passed in, so the weights for a given input
//! can be asserted exactly.

use super::{DecisionConfig, GameContext, PersonalityProfile};
use serde::Serialize;

/// Un-normalized action weights (each >= 0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ActionWeights {
    pub fold: f64,
    pub call: f64,
    pub raise: f64,
}

impl ActionWeights {
    pub fn total(&self) -> f64 {
        self.fold + self.call + self.raise
    }

    /// Scale the weights into a probability distribution.
    ///
    /// A non-positive total cannot be divided through, so it resolves to
    /// [`ActionDistribution::ALWAYS_CALL`].
    pub fn normalize(&self) -> ActionDistribution {
        let total = self.total();
        if total <= 0.0 || !total.is_finite() {
            return ActionDistribution::ALWAYS_CALL;
        }
        ActionDistribution {
            fold: self.fold / total,
            call: self.call / total,
            raise: self.raise / total,
        }
    }
}

/// Probability of each action class, summing to 1.0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ActionDistribution {
    pub fold: f64,
    pub call: f64,
    pub raise: f64,
}

impl ActionDistribution {
    /// Fallback distribution for degenerate weights.
    pub const ALWAYS_CALL: Self = Self {
        fold: 0.0,
        call: 1.0,
        raise: 0.0,
    };
}

/// Whether a hand is weak enough for the bluff trigger to be rolled.
pub fn can_bluff(config: &DecisionConfig, hand_strength: f64) -> bool {
    hand_strength < config.bluff_hand_threshold
}

/// Chance that the bluff trigger fires for this personality.
pub fn bluff_probability(config: &DecisionConfig, profile: &PersonalityProfile) -> f64 {
    (profile.bluff_tendency() / config.bluff_tendency_divisor).clamp(0.0, 1.0)
}

/// Fold weight from fold tendency, hand weakness and bet pressure.
pub fn fold_weight(
    config: &DecisionConfig,
    profile: &PersonalityProfile,
    ctx: &GameContext,
    hand_strength: f64,
) -> f64 {
    let base = profile.fold_tendency() / config.fold_tendency_divisor;
    let weakness = (1.0 - hand_strength) * config.weak_hand_fold_multiplier;
    let pressure = ctx.bet_pressure(config.bet_pressure_cap);
    let caution = profile.caution() / config.caution_pressure_divisor;

    (base + weakness + pressure * caution).max(0.0)
}

/// Call weight from gullibility, caution and medium-strength hands.
pub fn call_weight(
    config: &DecisionConfig,
    profile: &PersonalityProfile,
    hand_strength: f64,
) -> f64 {
    let gullibility = profile.gullibility() / config.gullibility_call_divisor;
    let medium_hand = if (config.medium_hand_min..=config.medium_hand_max).contains(&hand_strength)
    {
        config.medium_hand_call_bonus
    } else {
        0.0
    };
    let conservative = profile.caution() / config.caution_call_divisor;

    config.base_call_weight + gullibility + medium_hand + conservative
}

/// Raise weight from aggressiveness, hand strength, bluffing and confidence.
pub fn raise_weight(
    config: &DecisionConfig,
    profile: &PersonalityProfile,
    hand_strength: f64,
    bluffed: bool,
) -> f64 {
    let base = profile.aggressiveness() / config.aggressiveness_raise_divisor;
    let strength = hand_strength * config.strong_hand_raise_multiplier;
    let bluff = if bluffed && can_bluff(config, hand_strength) {
        config.bluff_raise_bonus
    } else {
        0.0
    };
    let confidence = profile.confidence() / config.confidence_raise_divisor;

    base + strength + bluff + confidence
}

/// All three weights for one decision.
///
/// `bluffed` is the outcome of the bluff trigger; it only counts for hands
/// below the bluff threshold.
pub fn compute_weights(
    config: &DecisionConfig,
    profile: &PersonalityProfile,
    ctx: &GameContext,
    hand_strength: f64,
    bluffed: bool,
) -> ActionWeights {
    ActionWeights {
        fold: fold_weight(config, profile, ctx, hand_strength),
        call: call_weight(config, profile, hand_strength),
        raise: raise_weight(config, profile, hand_strength, bluffed),
    }
}
