//! AI betting decisions driven by personality and table context.

use super::{
    DecisionConfig, GameContext, PersonalityProfile, hand_strength,
    probability::{self, ActionDistribution, ActionWeights},
    sampler::{self, AiAction},
    sizer,
};
use crate::entities::{Chips, TablePlayer};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;

/// Outcome of one betting decision.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Decision {
    /// Action the AI picked
    pub action: AiAction,

    /// Chips to put in for that action
    pub amount: Chips,

    /// Normalized hand strength the decision was based on
    pub hand_strength: f64,

    /// Raw action weights
    pub weights: ActionWeights,

    /// Normalized action probabilities
    pub distribution: ActionDistribution,

    /// Whether the bluff trigger fired
    pub bluffed: bool,
}

/// AI decision engine.
///
/// Owns one random stream; every random draw of a decision comes from it in
/// a fixed order (bluff trigger, action roll, raise size), so two engines
/// built from the same seed make identical decisions for identical inputs.
pub struct DecisionEngine<R = StdRng> {
    /// Random number generator
    rng: R,
    /// Model constants
    config: DecisionConfig,
}

impl DecisionEngine<StdRng> {
    /// Create an engine seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a reproducible engine.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokermon::ai::{DecisionEngine, GameContext, PersonalityProfile};
    /// use pokermon::entities::Player;
    ///
    /// let player = Player::ai("Bot", 1000);
    /// let profile = PersonalityProfile::default();
    /// let ctx = GameContext::simple(50, 100);
    ///
    /// let mut a = DecisionEngine::with_seed(12345);
    /// let mut b = DecisionEngine::with_seed(12345);
    /// assert_eq!(
    ///     a.decide_bet(&player, &profile, &ctx, 0.5),
    ///     b.decide_bet(&player, &profile, &ctx, 0.5),
    /// );
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Normalized strength for a raw hand score.
    ///
    /// Same as [`hand_strength::assess`].
    pub fn assess_hand_strength(raw_score: i32) -> f64 {
        hand_strength::assess(raw_score)
    }
}

impl Default for DecisionEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DecisionEngine<R> {
    /// Create an engine around an existing random source.
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            config: DecisionConfig::default(),
        }
    }

    /// Replace the model constants.
    pub fn with_config(mut self, config: DecisionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Decide an action and its chip amount.
    ///
    /// Returns `None` without drawing from the RNG when the player has no
    /// chips left to act with.
    ///
    /// # Arguments
    ///
    /// * `chips` - Player's current stack
    /// * `profile` - Player's personality
    /// * `ctx` - Betting situation
    /// * `hand_strength` - Normalized hand strength (0.0 to 1.0)
    pub fn decide(
        &mut self,
        chips: Chips,
        profile: &PersonalityProfile,
        ctx: &GameContext,
        hand_strength: f64,
    ) -> Option<Decision> {
        if chips == 0 {
            return None;
        }

        let config = &self.config;

        // Bluff trigger is only rolled for weak hands
        let bluffed = probability::can_bluff(config, hand_strength)
            && self.rng.random::<f64>() < probability::bluff_probability(config, profile);

        let weights = probability::compute_weights(config, profile, ctx, hand_strength, bluffed);
        let distribution = weights.normalize();
        let action = sampler::sample(config, &distribution, profile, hand_strength, &mut self.rng);
        let amount = sizer::bet_for_action(config, action, chips, ctx.current_bet);

        log::debug!(
            "{} decided {} for ${} (strength {:.2}, fold {:.2} / call {:.2} / raise {:.2}{})",
            profile,
            action,
            amount,
            hand_strength,
            distribution.fold,
            distribution.call,
            distribution.raise,
            if bluffed { ", bluffing" } else { "" }
        );

        Some(Decision {
            action,
            amount,
            hand_strength,
            weights,
            distribution,
            bluffed,
        })
    }

    /// Chip amount the AI wants to put in.
    ///
    /// A player without chips cannot act, so the current bet comes back
    /// unchanged.
    pub fn decide_bet<P: TablePlayer + ?Sized>(
        &mut self,
        player: &P,
        profile: &PersonalityProfile,
        ctx: &GameContext,
        hand_strength: f64,
    ) -> Chips {
        self.decide(player.chips(), profile, ctx, hand_strength)
            .map_or(ctx.current_bet, |decision| decision.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ai::PersonalityTable, entities::Player};

    fn preset(name: &str) -> PersonalityProfile {
        PersonalityTable::standard()
            .get(name)
            .cloned()
            .expect("preset should exist")
    }

    #[test]
    fn test_no_chips_returns_current_bet() {
        let mut engine = DecisionEngine::with_seed(12345);
        let broke = Player::ai("Broke", 0);
        let ctx = GameContext::simple(50, 100);

        assert_eq!(engine.decide_bet(&broke, &preset("Brash"), &ctx, 0.9), 50);
        assert!(engine.decide(0, &preset("Brash"), &ctx, 0.9).is_none());
    }

    #[test]
    fn test_bets_within_chip_constraints() {
        let mut engine = DecisionEngine::with_seed(12345);
        let ctx = GameContext::simple(50, 100);
        let foolhardy = preset("Foolhardy");

        for _ in 0..200 {
            assert!(engine.decide_bet(&Player::ai("Bot", 75), &foolhardy, &ctx, 0.9) <= 75);
            assert!(engine.decide_bet(&Player::ai("Bot", 10), &foolhardy, &ctx, 0.9) <= 10);
        }
    }

    #[test]
    fn test_same_seed_same_bets() {
        let mut a = DecisionEngine::with_seed(12345);
        let mut b = DecisionEngine::with_seed(12345);
        let player = Player::ai("Bot", 1000);
        let ctx = GameContext::simple(50, 100);

        for profile in PersonalityTable::standard().iter() {
            for strength in [0.1, 0.2, 0.5, 0.9] {
                assert_eq!(
                    a.decide(player.chips, profile, &ctx, strength),
                    b.decide(player.chips, profile, &ctx, strength)
                );
            }
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = DecisionEngine::with_seed(12345);
        let mut b = DecisionEngine::with_seed(54321);
        let player = Player::ai("Bot", 1000);
        let ctx = GameContext::simple(50, 100);
        let indecisive = preset("Indecisive");

        let differs = (0..50).any(|_| {
            a.decide_bet(&player, &indecisive, &ctx, 0.5)
                != b.decide_bet(&player, &indecisive, &ctx, 0.5)
        });
        assert!(differs, "different seeds should eventually produce different bets");
    }

    #[test]
    fn test_decision_amount_matches_action() {
        let mut engine = DecisionEngine::with_seed(7);
        let ctx = GameContext::simple(100, 300);
        let brash = preset("Brash");

        for _ in 0..200 {
            let decision = engine
                .decide(1000, &brash, &ctx, 0.9)
                .expect("player has chips");
            let expected = sizer::bet_for_action(engine.config(), decision.action, 1000, 100);
            assert_eq!(decision.amount, expected);
            assert!(!decision.bluffed, "strong hands never bluff");
        }
    }

    #[test]
    fn test_strong_bold_player_raises_often() {
        let mut engine = DecisionEngine::with_seed(21);
        let ctx = GameContext::simple(100, 300);
        let brash = preset("Brash");

        let raises = (0..1000)
            .filter_map(|_| engine.decide(1000, &brash, &ctx, 0.9))
            .filter(|d| d.action.is_raise())
            .count();
        assert!(raises > 400, "Brash raised {} of 1000 strong hands", raises);
    }

    #[test]
    fn test_weak_timid_player_folds_under_pressure() {
        let mut engine = DecisionEngine::with_seed(22);
        let ctx = GameContext::simple(200, 50);
        let meek = preset("Meek");

        let folds = (0..1000)
            .filter_map(|_| engine.decide(1000, &meek, &ctx, 0.1))
            .filter(|d| d.action == AiAction::Fold)
            .count();
        assert!(folds > 550, "Meek folded {} of 1000 weak hands", folds);
    }

    #[test]
    fn test_assess_hand_strength() {
        assert_eq!(DecisionEngine::<StdRng>::assess_hand_strength(0), 0.1);
        assert_eq!(DecisionEngine::<StdRng>::assess_hand_strength(100), 1.0);
    }
}
