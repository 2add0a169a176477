//! A game session: one assignment registry and one decision stream.

use super::assignment::PersonalityAssignment;
use crate::{
    ai::{Decision, DecisionEngine, DecisionError, DecisionResult, GameContext, hand_strength},
    entities::{Chips, TablePlayer, TableState},
};

/// State shared by every AI decision of one game.
///
/// Sessions never share registries or random streams, so several tables can
/// run side by side without coordination.
pub struct GameSession {
    assignment: PersonalityAssignment,
    engine: DecisionEngine,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            assignment: PersonalityAssignment::new(),
            engine: DecisionEngine::new(),
        }
    }

    /// Reproducible session. Companion picks and decisions draw from
    /// separate streams derived from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            assignment: PersonalityAssignment::with_seed(seed.wrapping_add(1)),
            engine: DecisionEngine::with_seed(seed),
        }
    }

    /// Session built from explicit parts.
    pub fn from_parts(assignment: PersonalityAssignment, engine: DecisionEngine) -> Self {
        Self { assignment, engine }
    }

    /// Start a new game, dropping every assignment of the previous one.
    pub fn new_game(&mut self) {
        log::info!("Starting new game");
        self.assignment.clear();
    }

    pub fn assignment(&self) -> &PersonalityAssignment {
        &self.assignment
    }

    pub fn assignment_mut(&mut self) -> &mut PersonalityAssignment {
        &mut self.assignment
    }

    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Assign companions to every unassigned AI player.
    pub fn auto_assign<P: TablePlayer>(&mut self, players: &[P]) -> usize {
        self.assignment.auto_assign(players)
    }

    /// Chips an AI player puts in, given only the bet and the pot.
    ///
    /// Assumes a heads-up first round with an average stack.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::HumanPlayer`] for a human player.
    pub fn calculate_bet<P: TablePlayer + ?Sized>(
        &mut self,
        player: &P,
        current_bet: Chips,
        pot_size: Chips,
    ) -> DecisionResult<Chips> {
        self.bet_with_context(player, &GameContext::simple(current_bet, pot_size))
    }

    /// Chips an AI player puts in at a fully described table.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::HumanPlayer`] for a human player.
    pub fn calculate_bet_at<P: TablePlayer + ?Sized>(
        &mut self,
        player: &P,
        table: &TableState,
    ) -> DecisionResult<Chips> {
        self.bet_with_context(player, &table.context_for(player))
    }

    /// Full decision for an AI player, or `None` when they have no chips.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::HumanPlayer`] for a human player.
    pub fn decide<P: TablePlayer + ?Sized>(
        &mut self,
        player: &P,
        ctx: &GameContext,
    ) -> DecisionResult<Option<Decision>> {
        ensure_ai(player)?;
        let profile = self.assignment.get(player.id());
        let strength = hand_strength::assess(player.hand_score());
        Ok(self.engine.decide(player.chips(), profile, ctx, strength))
    }

    fn bet_with_context<P: TablePlayer + ?Sized>(
        &mut self,
        player: &P,
        ctx: &GameContext,
    ) -> DecisionResult<Chips> {
        ensure_ai(player)?;
        let profile = self.assignment.get(player.id());
        let strength = hand_strength::assess(player.hand_score());
        Ok(self.engine.decide_bet(player, profile, ctx, strength))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_ai<P: TablePlayer + ?Sized>(player: &P) -> DecisionResult<()> {
    if player.is_human() {
        return Err(DecisionError::HumanPlayer(player.id().to_string()));
    }
    Ok(())
}
