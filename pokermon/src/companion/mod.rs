//! Companion monsters.
//!
//! Each AI player may travel with a companion from the catalog. A companion
//! carries a rarity, a gameplay effect and a default personality, which the
//! session uses when a player is auto-assigned.

pub mod catalog;
pub mod errors;
pub mod models;

pub use catalog::CompanionCatalog;
pub use errors::{CompanionError, CompanionResult};
pub use models::{Companion, EffectType, Rarity};
