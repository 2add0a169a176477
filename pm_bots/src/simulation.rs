//! Console table simulation.
//!
//! Every hand: antes go in, each seat gets a raw hand score, then one orbit
//! of AI betting runs through the session. The best score still in the hand
//! takes the pot.

use crate::config::SimConfig;
use pokermon::{
    Chips, GameSession, PersonalityProfile, Player, TableState,
    ai::AiAction,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fmt,
    sync::atomic::{AtomicBool, Ordering},
};

/// Highest raw hand score dealt.
const MAX_HAND_SCORE: i32 = 100;

/// Action counts for one personality.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PersonalityStats {
    pub decisions: u32,
    pub folds: u32,
    pub calls: u32,
    pub raises: u32,
    pub all_ins: u32,
    pub bluffs: u32,
    pub hands_won: u32,
}

impl PersonalityStats {
    fn record(&mut self, action: AiAction, bluffed: bool) {
        self.decisions += 1;
        match action {
            AiAction::Fold => self.folds += 1,
            AiAction::Call => self.calls += 1,
            AiAction::AllIn => self.all_ins += 1,
            AiAction::RaiseSmall | AiAction::RaiseMedium | AiAction::RaiseLarge => {
                self.raises += 1
            }
        }
        if bluffed {
            self.bluffs += 1;
        }
    }
}

/// Final state of one seat.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeatSummary {
    pub info: String,
    pub personality: String,
    pub chips: Chips,
    pub net: i64,
}

/// Result of a simulation run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub seed: Option<u64>,
    pub hands_played: usize,
    pub interrupted: bool,
    pub seats: Vec<SeatSummary>,
    pub personalities: BTreeMap<String, PersonalityStats>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hands played: {}", self.hands_played)?;
        if let Some(seed) = self.seed {
            writeln!(f, "Seed: {seed}")?;
        }
        if self.interrupted {
            writeln!(f, "(interrupted)")?;
        }

        writeln!(f, "\nSeats:")?;
        for seat in &self.seats {
            writeln!(f, "  {:<40} ${:>7} ({:+})", seat.info, seat.chips, seat.net)?;
        }

        writeln!(f, "\nPersonalities:")?;
        for (name, stats) in &self.personalities {
            writeln!(
                f,
                "  {:<14} decisions {:>5}  fold {:>4}  call {:>4}  raise {:>4}  all-in {:>4}  bluff {:>4}  won {:>4}",
                name,
                stats.decisions,
                stats.folds,
                stats.calls,
                stats.raises,
                stats.all_ins,
                stats.bluffs,
                stats.hands_won
            )?;
        }
        Ok(())
    }
}

/// A simulated table of AI players.
pub struct Simulation {
    config: SimConfig,
    session: GameSession,
    players: Vec<Player>,
    deck_rng: StdRng,
    stats: BTreeMap<String, PersonalityStats>,
}

impl Simulation {
    /// Seat the players and give them companions.
    ///
    /// `custom` personalities, if any, are dealt to the seats in order and
    /// override the companions' defaults.
    pub fn new(config: SimConfig, custom: &[PersonalityProfile]) -> Self {
        let (session, deck_rng) = match config.seed {
            Some(seed) => (
                GameSession::with_seed(seed),
                StdRng::seed_from_u64(seed.wrapping_add(2)),
            ),
            None => (GameSession::new(), StdRng::from_os_rng()),
        };

        let players = (1..=config.players)
            .map(|seat| Player::ai(format!("Bot{seat}"), config.buy_in))
            .collect();

        let mut sim = Self {
            config,
            session,
            players,
            deck_rng,
            stats: BTreeMap::new(),
        };
        sim.seat_players(custom);
        sim
    }

    fn seat_players(&mut self, custom: &[PersonalityProfile]) {
        self.session.new_game();
        let assigned = self.session.auto_assign(&self.players);
        log::info!("Seated {} AI players", assigned);

        for (player, profile) in self.players.iter().zip(custom) {
            self.session
                .assignment_mut()
                .set_custom_personality(&player.name, profile);
        }
    }

    /// Play up to the configured number of hands.
    ///
    /// Stops early once fewer than two players have chips or `stop` is set.
    /// The flag is checked between hands only.
    pub fn run(&mut self, stop: &AtomicBool) -> Summary {
        let mut hands_played = 0;
        let mut interrupted = false;

        for hand in 1..=self.config.hands {
            if stop.load(Ordering::SeqCst) {
                log::info!("Stopping after {} hands", hands_played);
                interrupted = true;
                break;
            }
            if self.players.iter().filter(|p| p.chips > 0).count() < 2 {
                log::info!("Only one player has chips left");
                break;
            }
            self.play_hand(hand);
            hands_played += 1;
        }

        self.summary(hands_played, interrupted)
    }

    fn play_hand(&mut self, hand: usize) {
        let seats: Vec<usize> = (0..self.players.len())
            .filter(|&i| self.players[i].chips > 0)
            .collect();

        let mut pot: Chips = 0;
        for &i in &seats {
            let player = &mut self.players[i];
            let ante = self.config.ante.min(player.chips);
            player.chips -= ante;
            pot = pot.saturating_add(ante);
            player.hand_score = self.deck_rng.random_range(0..=MAX_HAND_SCORE);
        }

        let mut current_bet = self.config.ante.max(1).saturating_mul(2);
        let mut in_hand = seats.clone();

        for (turn, &i) in seats.iter().enumerate() {
            if in_hand.len() == 1 {
                break;
            }
            if !in_hand.contains(&i) {
                continue;
            }

            let table = TableState {
                current_bet,
                pot_size: pot,
                players_remaining: in_hand.len(),
                betting_round: 1,
                last_to_act: turn + 1 == seats.len(),
                average_chips: self.average_chips(&in_hand),
            };

            let player = &self.players[i];
            let ctx = table.context_for(player);
            let decision = match self.session.decide(player, &ctx) {
                Ok(Some(decision)) => decision,
                // All-in from the ante, stays in for the showdown
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("Skipping {}: {}", player.name, e);
                    continue;
                }
            };

            let personality = self.session.assignment().get(&player.name).name().to_string();
            self.stats
                .entry(personality)
                .or_default()
                .record(decision.action, decision.bluffed);

            if decision.action == AiAction::Fold {
                in_hand.retain(|&seat| seat != i);
                continue;
            }

            let player = &mut self.players[i];
            let paid = decision.amount.min(player.chips);
            player.chips -= paid;
            pot = pot.saturating_add(paid);
            current_bet = current_bet.max(paid);
        }

        let winner = in_hand
            .iter()
            .copied()
            .max_by_key(|&i| (self.players[i].hand_score, std::cmp::Reverse(i)));

        if let Some(i) = winner {
            let player = &mut self.players[i];
            player.chips = player.chips.saturating_add(pot);
            log::debug!("Hand {}: {} wins ${}", hand, player.name, pot);

            let personality = self.session.assignment().get(&player.name).name().to_string();
            self.stats.entry(personality).or_default().hands_won += 1;
        }
    }

    fn average_chips(&self, seats: &[usize]) -> f64 {
        if seats.is_empty() {
            return 0.0;
        }
        let total: f64 = seats.iter().map(|&i| self.players[i].chips as f64).sum();
        total / seats.len() as f64
    }

    fn summary(&self, hands_played: usize, interrupted: bool) -> Summary {
        let seats = self
            .players
            .iter()
            .map(|player| SeatSummary {
                info: self.session.assignment().player_ai_info(&player.name),
                personality: self.session.assignment().get(&player.name).name().to_string(),
                chips: player.chips,
                net: i64::from(player.chips) - i64::from(self.config.buy_in),
            })
            .collect();

        Summary {
            seed: self.config.seed,
            hands_played,
            interrupted,
            seats,
            personalities: self.stats.clone(),
        }
    }
}
