//! Personality-driven AI betting.
//!
//! One decision runs through these stages:
//! - **Hand strength**: raw hand score bucketed into `[0.0, 1.0]`
//! - **Weights**: fold/call/raise weights from personality, context and
//!   strength, normalized into a distribution
//! - **Sampling**: one roll picks fold, call or raise; a raise is sized from
//!   the personality (small, medium, large or all-in)
//! - **Sizing**: the action becomes a chip amount bounded by the stack
//!
//! ## Personalities
//!
//! 24 presets ship with the game (Foolhardy, Brash, Meek, ...). Each stores
//! ten base traits; aggressiveness, bluff tendency, fold tendency and
//! deception are derived from them.
//!
//! ## Example
//!
//! ```
//! use pokermon::ai::{DecisionEngine, GameContext, PersonalityTable};
//! use pokermon::entities::Player;
//!
//! let table = PersonalityTable::standard();
//! let brash = table.get("Brash").unwrap();
//! let player = Player::ai("Bot", 1000);
//!
//! let mut engine = DecisionEngine::with_seed(42);
//! let strength = DecisionEngine::assess_hand_strength(90);
//! let bet = engine.decide_bet(&player, brash, &GameContext::simple(100, 300), strength);
//! assert!(bet <= 1000);
//! ```

pub mod config;
pub mod context;
pub mod decision;
pub mod errors;
pub mod hand_strength;
pub mod personality;
pub mod probability;
pub mod sampler;
pub mod sizer;

pub use config::DecisionConfig;
pub use context::GameContext;
pub use decision::{Decision, DecisionEngine};
pub use errors::{DecisionError, DecisionResult, PersonalityError, PersonalityResult};
pub use personality::{BaseTraits, PersonalityProfile, PersonalityTable, PersonalityTraits};
pub use probability::{ActionDistribution, ActionWeights};
pub use sampler::{ActionClass, AiAction};
pub use sizer::RaiseClass;
