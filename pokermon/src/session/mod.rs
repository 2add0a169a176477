//! Game sessions.
//!
//! A [`GameSession`] owns the [`PersonalityAssignment`] registry and the
//! decision engine's random stream for one game. Start every game with
//! [`GameSession::new_game`] so assignments never leak between games.

pub mod assignment;
pub mod game;

pub use assignment::{AssignmentRecord, PersonalityAssignment, RANDOM_COMPANION_ROSTER};
pub use game::GameSession;
