//! # Pokermon
//!
//! AI opponents for a casual poker game where every computer player travels
//! with a companion monster.
//!
//! Each AI turn runs through a fixed pipeline:
//!
//! - **Hand strength**: the raw score from the hand ranker is bucketed into
//!   a strength between 0.0 and 1.0
//! - **Weights**: personality, table context and strength produce fold, call
//!   and raise weights, normalized into a distribution
//! - **Sampling**: one draw picks the action; raises are sized by personality
//! - **Sizing**: the action becomes a chip amount capped by the stack
//!
//! ## Core Modules
//!
//! - [`ai`]: Decision engine, personalities and the probability model
//! - [`companion`]: Companion monsters and the built-in catalog
//! - [`entities`]: Players and table state consumed from the game engine
//! - [`session`]: Per-game assignment registry and decision stream
//!
//! ## Example
//!
//! ```
//! use pokermon::{GameSession, entities::Player};
//!
//! let mut session = GameSession::with_seed(7);
//! let players = vec![Player::human("Alice", 1000), Player::ai("Bot", 1000).with_hand_score(72)];
//! assert_eq!(session.auto_assign(&players), 1);
//!
//! let bet = session.calculate_bet(&players[1], 50, 150).unwrap();
//! assert!(bet <= 1000);
//! assert!(session.calculate_bet(&players[0], 50, 150).is_err());
//! ```

/// Decision engine, personalities and the probability model.
pub mod ai;
pub use ai::{Decision, DecisionEngine, DecisionError, GameContext, PersonalityProfile, PersonalityTable};

/// Companion monsters.
pub mod companion;
pub use companion::{Companion, CompanionCatalog, Rarity};

/// Players and table state.
pub mod entities;
pub use entities::{Chips, Player, TablePlayer, TableState};

/// Game sessions.
pub mod session;
pub use session::{GameSession, PersonalityAssignment};
