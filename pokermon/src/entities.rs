use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ai::GameContext;

/// Type alias for whole chips. Stacks, bets and pots are all counted in
/// whole chips.
pub type Chips = u32;

/// What the decision engine needs to know about a seated player.
pub trait TablePlayer {
    /// Stable identifier, unique within a session.
    fn id(&self) -> &str;

    /// Current stack.
    fn chips(&self) -> Chips;

    /// Raw score from the hand ranker.
    fn hand_score(&self) -> i32;

    fn is_human(&self) -> bool;
}

/// A plain seated player.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub chips: Chips,
    pub hand_score: i32,
    pub human: bool,
}

impl Player {
    pub fn ai(name: impl Into<String>, chips: Chips) -> Self {
        Self {
            name: name.into(),
            chips,
            hand_score: 0,
            human: false,
        }
    }

    pub fn human(name: impl Into<String>, chips: Chips) -> Self {
        Self {
            name: name.into(),
            chips,
            hand_score: 0,
            human: true,
        }
    }

    pub fn with_hand_score(mut self, hand_score: i32) -> Self {
        self.hand_score = hand_score;
        self
    }
}

impl TablePlayer for Player {
    fn id(&self) -> &str {
        &self.name
    }

    fn chips(&self) -> Chips {
        self.chips
    }

    fn hand_score(&self) -> i32 {
        self.hand_score
    }

    fn is_human(&self) -> bool {
        self.human
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.human { "human" } else { "ai" };
        write!(f, "{} ({kind}, ${})", self.name, self.chips)
    }
}

/// Table-level betting state as seen by the acting player.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TableState {
    pub current_bet: Chips,
    pub pot_size: Chips,
    pub players_remaining: usize,
    pub betting_round: u32,
    pub last_to_act: bool,
    /// Average stack across active players
    pub average_chips: f64,
}

impl TableState {
    /// Build the decision context for `player` at this table.
    ///
    /// The chip ratio is the player's stack over the table average. An empty
    /// table average counts as an average stack (ratio 1.0), and a ratio is
    /// never reported as zero so it stays strictly positive.
    pub fn context_for<P: TablePlayer + ?Sized>(&self, player: &P) -> GameContext {
        let chip_ratio = if self.average_chips > 0.0 {
            (player.chips() as f64 / self.average_chips).max(f64::MIN_POSITIVE)
        } else {
            1.0
        };

        GameContext::new(
            self.current_bet,
            self.pot_size,
            self.players_remaining.max(1),
            self.betting_round.max(1),
            self.last_to_act,
            chip_ratio,
        )
    }
}
