//! Tunable constants for the AI decision model.

use serde::{Deserialize, Serialize};

/// Configuration for AI betting weights and raise sizing.
///
/// Trait values are on the 0.0-10.0 personality scale; hand strength is in
/// `[0.0, 1.0]`. The defaults reproduce the game's stock AI behavior.
///
/// # Examples
///
/// ```
/// use pokermon::ai::DecisionConfig;
///
/// let config = DecisionConfig::default();
/// assert_eq!(config.bet_pressure_cap, 2.0);
/// assert_eq!(config.base_call_weight, 0.4);
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DecisionConfig {
    // === Fold weight ===
    /// Fold tendency is divided by this for the base fold weight.
    pub fold_tendency_divisor: f64,

    /// Multiplier on hand weakness `(1 - strength)`.
    ///
    /// **Effect**: 1.5 = a hopeless hand adds 1.5 to the fold weight
    pub weak_hand_fold_multiplier: f64,

    /// Upper bound for `current_bet / pot`.
    pub bet_pressure_cap: f64,

    /// Caution is divided by this and scaled by bet pressure (0.0-0.5).
    pub caution_pressure_divisor: f64,

    // === Call weight ===
    /// Base tendency to call.
    pub base_call_weight: f64,

    /// Gullibility is divided by this for the call bonus (0.0-0.5).
    pub gullibility_call_divisor: f64,

    /// Hands in `[medium_hand_min, medium_hand_max]` get the call bonus.
    pub medium_hand_min: f64,

    /// Upper end of the medium hand band.
    pub medium_hand_max: f64,

    /// Call bonus for medium hands.
    pub medium_hand_call_bonus: f64,

    /// Caution is divided by this for the conservative call bonus (0.0-0.4).
    pub caution_call_divisor: f64,

    // === Raise weight ===
    /// Aggressiveness is divided by this for the base raise weight.
    pub aggressiveness_raise_divisor: f64,

    /// Multiplier on hand strength for the raise weight.
    pub strong_hand_raise_multiplier: f64,

    /// Hands below this strength may trigger a bluff.
    pub bluff_hand_threshold: f64,

    /// Raise bonus when the bluff fires.
    pub bluff_raise_bonus: f64,

    /// Bluff tendency is divided by this for the bluff probability.
    pub bluff_tendency_divisor: f64,

    /// Confidence is divided by this for the raise bonus (0.0-0.5).
    pub confidence_raise_divisor: f64,

    // === Raise class selection ===
    /// Aggressiveness or confidence at or above this prefers big raises.
    pub bold_trait_threshold: f64,

    /// Aggressiveness or confidence at or above this prefers medium raises.
    pub assertive_trait_threshold: f64,

    /// Minimum hand strength before a bold player considers going all-in.
    pub all_in_hand_threshold: f64,

    /// Chance of all-in once the bold player has the hand for it.
    pub all_in_probability: f64,

    /// Chance a bold player picks a large raise over a medium one.
    pub bold_large_probability: f64,

    /// Chance an assertive player picks a medium raise over a large one.
    pub assertive_medium_probability: f64,

    // === Raise amounts ===
    /// Small raise: `bet + max(small_raise_floor, bet / small_raise_divisor)`
    pub small_raise_floor: u32,
    pub small_raise_divisor: u32,

    /// Medium raise: `bet + max(medium_raise_floor, bet / medium_raise_divisor)`
    pub medium_raise_floor: u32,
    pub medium_raise_divisor: u32,

    /// Large raise: `bet + max(large_raise_floor, bet)`
    pub large_raise_floor: u32,

    /// Fold returns `min(bet, chips / fold_stack_divisor)` as the forced minimum.
    pub fold_stack_divisor: u32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            // Folding
            fold_tendency_divisor: 10.0,
            weak_hand_fold_multiplier: 1.5,
            bet_pressure_cap: 2.0,
            caution_pressure_divisor: 20.0,
            // Calling
            base_call_weight: 0.4,
            gullibility_call_divisor: 20.0,
            medium_hand_min: 0.3,
            medium_hand_max: 0.7,
            medium_hand_call_bonus: 0.3,
            caution_call_divisor: 25.0,
            // Raising
            aggressiveness_raise_divisor: 10.0,
            strong_hand_raise_multiplier: 0.8,
            bluff_hand_threshold: 0.3,
            bluff_raise_bonus: 0.4,
            bluff_tendency_divisor: 10.0,
            confidence_raise_divisor: 20.0,
            // Raise class
            bold_trait_threshold: 8.0,
            assertive_trait_threshold: 6.0,
            all_in_hand_threshold: 0.8,
            all_in_probability: 0.3,
            bold_large_probability: 0.6,
            assertive_medium_probability: 0.7,
            // Raise amounts
            small_raise_floor: 25,
            small_raise_divisor: 4,
            medium_raise_floor: 50,
            medium_raise_divisor: 2,
            large_raise_floor: 100,
            fold_stack_divisor: 10,
        }
    }
}
