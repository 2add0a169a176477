//! Snapshot of the betting situation for one decision.

use crate::entities::Chips;
use serde::{Deserialize, Serialize};

/// Context for one AI betting decision.
///
/// Built fresh for every decision and never mutated afterwards.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameContext {
    /// Current bet to match
    pub current_bet: Chips,

    /// Current pot size
    pub pot_size: Chips,

    /// Number of players still in the hand (>= 1)
    pub players_remaining: usize,

    /// Betting round, 1 = first round
    pub betting_round: u32,

    /// Whether this player acts last in the round
    pub last_to_act: bool,

    /// Player chips divided by the table's average chips (> 0)
    pub chip_ratio: f64,
}

impl GameContext {
    pub fn new(
        current_bet: Chips,
        pot_size: Chips,
        players_remaining: usize,
        betting_round: u32,
        last_to_act: bool,
        chip_ratio: f64,
    ) -> Self {
        Self {
            current_bet,
            pot_size,
            players_remaining,
            betting_round,
            last_to_act,
            chip_ratio,
        }
    }

    /// Context for callers that only know the bet and the pot.
    ///
    /// Assumes heads-up, first round, not last to act, average stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokermon::ai::GameContext;
    ///
    /// let ctx = GameContext::simple(100, 200);
    /// assert_eq!(ctx.players_remaining, 2);
    /// assert_eq!(ctx.betting_round, 1);
    /// assert!(!ctx.last_to_act);
    /// ```
    pub fn simple(current_bet: Chips, pot_size: Chips) -> Self {
        Self::new(current_bet, pot_size, 2, 1, false, 1.0)
    }

    /// Ratio of the current bet to the pot, capped at `cap`.
    ///
    /// Zero when there is no bet. An empty pot counts as one chip.
    pub fn bet_pressure(&self, cap: f64) -> f64 {
        if self.current_bet == 0 {
            return 0.0;
        }
        let pot = self.pot_size.max(1);
        (self.current_bet as f64 / pot as f64).min(cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_values() {
        let ctx = GameContext::new(75, 300, 4, 2, true, 3.0);
        assert_eq!(ctx.current_bet, 75);
        assert_eq!(ctx.pot_size, 300);
        assert_eq!(ctx.players_remaining, 4);
        assert_eq!(ctx.betting_round, 2);
        assert!(ctx.last_to_act);
        assert_eq!(ctx.chip_ratio, 3.0);
    }

    #[test]
    fn test_simple_context() {
        let ctx = GameContext::simple(100, 200);
        assert_eq!(ctx, GameContext::new(100, 200, 2, 1, false, 1.0));
    }

    #[test]
    fn test_bet_pressure() {
        assert_eq!(GameContext::simple(0, 100).bet_pressure(2.0), 0.0);
        assert_eq!(GameContext::simple(50, 100).bet_pressure(2.0), 0.5);
        assert_eq!(GameContext::simple(200, 50).bet_pressure(2.0), 2.0);
    }

    #[test]
    fn test_bet_pressure_with_empty_pot() {
        // An empty pot is treated as one chip, so any bet saturates the cap
        assert_eq!(GameContext::simple(1, 0).bet_pressure(2.0), 1.0);
        assert_eq!(GameContext::simple(10, 0).bet_pressure(2.0), 2.0);
    }
}
