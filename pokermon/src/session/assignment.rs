//! Per-session personality and companion assignments.

use crate::{
    ai::PersonalityProfile,
    companion::{Companion, CompanionCatalog},
    entities::TablePlayer,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{collections::HashMap, sync::Arc};

/// Companions handed out when a player gets a random one.
pub const RANDOM_COMPANION_ROSTER: [&str; 10] = [
    "PixelPup",
    "ByteBird",
    "CodeCat",
    "DataDog",
    "FireFox.exe",
    "AquaApp",
    "TechTurtle",
    "CloudCrawler",
    "NeuralNinja",
    "QuantumQuokka",
];

/// Catalog entry tried when a roster name is missing.
const FALLBACK_COMPANION: &str = "PixelPup";

/// What a player was assigned.
#[derive(Clone, Debug, PartialEq)]
pub struct AssignmentRecord {
    pub personality: PersonalityProfile,
    pub companion: Option<Companion>,
    /// Personality was set explicitly rather than taken from the companion
    pub custom: bool,
}

/// Registry of personality assignments for one game session.
///
/// Records are keyed by player id. An unassigned player reads as the
/// default profile, so lookups never fail.
pub struct PersonalityAssignment {
    /// player id -> record
    records: HashMap<String, AssignmentRecord>,

    /// Companions available for assignment
    catalog: Arc<CompanionCatalog>,

    /// Profile returned for unassigned players
    default_profile: PersonalityProfile,

    /// Random source for companion picks
    rng: StdRng,
}

impl PersonalityAssignment {
    pub fn new() -> Self {
        Self::with_rng(Arc::new(CompanionCatalog::standard()), StdRng::from_os_rng())
    }

    /// Reproducible registry over the standard catalog.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(
            Arc::new(CompanionCatalog::standard()),
            StdRng::seed_from_u64(seed),
        )
    }

    /// Registry over a shared catalog.
    pub fn with_rng(catalog: Arc<CompanionCatalog>, rng: StdRng) -> Self {
        Self {
            records: HashMap::new(),
            catalog,
            default_profile: PersonalityProfile::default(),
            rng,
        }
    }

    pub fn catalog(&self) -> &CompanionCatalog {
        &self.catalog
    }

    /// Assign a companion and personality to a player.
    ///
    /// A missing companion is drawn from [`RANDOM_COMPANION_ROSTER`]; a
    /// missing personality is taken from the companion. Replaces any
    /// existing record. Blank ids are ignored.
    ///
    /// # Arguments
    ///
    /// * `player_id` - Player identifier
    /// * `companion` - Catalog name of the companion, if chosen
    /// * `personality` - Personality override, if any
    pub fn assign(
        &mut self,
        player_id: &str,
        companion: Option<&str>,
        personality: Option<&PersonalityProfile>,
    ) {
        let Some(player_id) = normalize_id(player_id) else {
            return;
        };

        let companion = match companion {
            Some(name) => self.catalog.get_or_fallback(name),
            None => self.random_companion(),
        };
        let custom = personality.is_some();
        let personality = personality
            .cloned()
            .unwrap_or_else(|| companion.personality().clone());

        log::info!(
            "Assigned {} to {} with {} personality",
            companion.name(),
            player_id,
            personality
        );

        self.records.insert(
            player_id.to_string(),
            AssignmentRecord {
                personality,
                companion: Some(companion),
                custom,
            },
        );
    }

    /// Force a personality onto a player, keeping any companion.
    ///
    /// Used for boss encounters; takes precedence over the companion's
    /// personality. Blank ids are ignored.
    pub fn set_custom_personality(&mut self, player_id: &str, personality: &PersonalityProfile) {
        let Some(player_id) = normalize_id(player_id) else {
            return;
        };

        log::info!("Set custom {} personality for {}", personality, player_id);

        self.records
            .entry(player_id.to_string())
            .and_modify(|record| {
                record.personality = personality.clone();
                record.custom = true;
            })
            .or_insert_with(|| AssignmentRecord {
                personality: personality.clone(),
                companion: None,
                custom: true,
            });
    }

    /// Personality of a player, or the default profile when unassigned.
    pub fn get(&self, player_id: &str) -> &PersonalityProfile {
        self.record(player_id)
            .map_or(&self.default_profile, |record| &record.personality)
    }

    pub fn record(&self, player_id: &str) -> Option<&AssignmentRecord> {
        self.records.get(player_id.trim())
    }

    pub fn companion(&self, player_id: &str) -> Option<&Companion> {
        self.record(player_id)
            .and_then(|record| record.companion.as_ref())
    }

    pub fn has_assignment(&self, player_id: &str) -> bool {
        self.record(player_id).is_some()
    }

    /// Drop every record. Call at the start of each game.
    pub fn clear(&mut self) {
        if !self.records.is_empty() {
            log::info!("Cleared {} personality assignments", self.records.len());
        }
        self.records.clear();
    }

    /// Give a random companion to every AI player without a record.
    ///
    /// Humans and players that already have a record are left alone, so
    /// repeated calls are no-ops. Returns the number of new assignments.
    pub fn auto_assign<P: TablePlayer>(&mut self, players: &[P]) -> usize {
        let mut assigned = 0;
        for player in players {
            if player.is_human() || self.has_assignment(player.id()) {
                continue;
            }
            if normalize_id(player.id()).is_none() {
                continue;
            }
            self.assign(player.id(), None, None);
            assigned += 1;
        }
        assigned
    }

    /// One-line description of a player's AI setup.
    ///
    /// `"Name (Companion, Personality)"` with a companion, otherwise
    /// `"Name (Personality personality)"`.
    pub fn player_ai_info(&self, player_id: &str) -> String {
        match self.companion(player_id) {
            Some(companion) => format!(
                "{} ({}, {})",
                player_id,
                companion.name(),
                self.get(player_id)
            ),
            None => format!("{} ({} personality)", player_id, self.get(player_id)),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn random_companion(&mut self) -> Companion {
        let idx = self.rng.random_range(0..RANDOM_COMPANION_ROSTER.len());
        let name = RANDOM_COMPANION_ROSTER[idx];

        if let Some(companion) = self.catalog.get(name) {
            return companion.clone();
        }
        log::warn!("Companion {} missing from catalog, trying {}", name, FALLBACK_COMPANION);
        self.catalog
            .get(FALLBACK_COMPANION)
            .cloned()
            .unwrap_or_else(|| Companion::fallback(name))
    }
}

impl Default for PersonalityAssignment {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_id(player_id: &str) -> Option<&str> {
    let trimmed = player_id.trim();
    (!trimmed.is_empty()).then_some(trimmed)
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
    fn test_unassigned_player_gets_default() {
        let registry = PersonalityAssignment::with_seed(1);
        assert_eq!(registry.get("Nobody").name(), "Happy");
        assert!(!registry.has_assignment("Nobody"));
        assert!(registry.companion("Nobody").is_none());
    }

    #[test]
    fn test_blank_id_is_ignored() {
        let mut registry = PersonalityAssignment::with_seed(1);
        registry.assign("", None, None);
        registry.assign("   ", Some("PixelPup"), Some(&preset("Brash")));
        registry.set_custom_personality(" ", &preset("Meek"));

        assert!(registry.is_empty());
    }

    #[test]
    fn test_assign_uses_companion_personality() {
        let mut registry = PersonalityAssignment::with_seed(1);
        registry.assign("Bot", Some("CyberShark"), None);

        let record = registry.record("Bot").expect("assigned");
        assert_eq!(record.personality.name(), "Brash");
        assert!(!record.custom);
        assert_eq!(registry.companion("Bot").map(Companion::name), Some("CyberShark"));
    }

    #[test]
    fn test_assign_with_explicit_personality() {
        let mut registry = PersonalityAssignment::with_seed(1);
        registry.assign("Bot", Some("PixelPup"), Some(&preset("Brash")));

        assert_eq!(registry.get("Bot").name(), "Brash");
        assert!(registry.record("Bot").expect("assigned").custom);
    }

    #[test]
    fn test_assign_overwrites() {
        let mut registry = PersonalityAssignment::with_seed(1);
        registry.assign("Bot", Some("PixelPup"), None);
        registry.assign("Bot", Some("TechTurtle"), None);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Bot").name(), "Defensive");
    }

    #[test]
    fn test_random_companion_from_roster() {
        let mut registry = PersonalityAssignment::with_seed(3);
        for i in 0..50 {
            let id = format!("Bot{}", i);
            registry.assign(&id, None, None);
            let name = registry.companion(&id).map(Companion::name).expect("companion");
            assert!(RANDOM_COMPANION_ROSTER.contains(&name), "{} not in roster", name);
        }
    }

    #[test]
    fn test_unknown_companion_falls_back() {
        let mut registry = PersonalityAssignment::with_seed(1);
        registry.assign("Bot", Some("MissingNo"), None);

        let companion = registry.companion("Bot").expect("companion");
        assert_eq!(companion.name(), "MissingNo");
        assert_eq!(registry.get("Bot").name(), "Happy");
    }

    #[test]
    fn test_empty_catalog_uses_basic_companion() {
        let catalog = Arc::new(CompanionCatalog::new(Vec::new()).expect("valid"));
        let mut registry = PersonalityAssignment::with_rng(catalog, StdRng::seed_from_u64(1));
        registry.assign("Bot", None, None);

        let companion = registry.companion("Bot").expect("companion");
        assert!(RANDOM_COMPANION_ROSTER.contains(&companion.name()));
        assert_eq!(companion.description(), "A digital companion");
    }

    #[test]
    fn test_custom_personality_overrides() {
        let mut registry = PersonalityAssignment::with_seed(1);
        registry.assign("Boss", Some("DataDog"), None);
        registry.set_custom_personality("Boss", &preset("Condescending"));

        assert_eq!(registry.get("Boss").name(), "Condescending");
        assert_eq!(registry.companion("Boss").map(Companion::name), Some("DataDog"));

        registry.set_custom_personality("Solo", &preset("Gullible"));
        assert!(registry.has_assignment("Solo"));
        assert!(registry.companion("Solo").is_none());
    }

    #[test]
    fn test_clear() {
        let mut registry = PersonalityAssignment::with_seed(1);
        registry.assign("A", None, None);
        registry.assign("B", None, None);
        registry.set_custom_personality("C", &preset("Gullible"));
        assert_eq!(registry.len(), 3);

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.get("A").name(), "Happy");
    }

    #[test]
    fn test_auto_assign_skips_humans_and_is_idempotent() {
        let mut registry = PersonalityAssignment::with_seed(1);
        let players = vec![
            Player::human("Alice", 1000),
            Player::ai("Bot1", 1000),
            Player::ai("Bot2", 1000),
        ];

        assert_eq!(registry.auto_assign(&players), 2);
        assert!(!registry.has_assignment("Alice"));
        let first = registry.record("Bot1").cloned();

        assert_eq!(registry.auto_assign(&players), 0);
        assert_eq!(registry.record("Bot1").cloned(), first);
        assert_eq!(registry.auto_assign::<Player>(&[]), 0);
    }

    #[test]
    fn test_player_ai_info() {
        let mut registry = PersonalityAssignment::with_seed(1);
        registry.assign("Bot", Some("PixelPup"), Some(&preset("Brash")));

        assert_eq!(registry.player_ai_info("Bot"), "Bot (PixelPup, Brash)");
        assert_eq!(registry.player_ai_info("Ghost"), "Ghost (Happy personality)");
    }

    #[test]
    fn test_same_seed_same_companions() {
        let mut a = PersonalityAssignment::with_seed(77);
        let mut b = PersonalityAssignment::with_seed(77);
        for i in 0..20 {
            let id = format!("Bot{}", i);
            a.assign(&id, None, None);
            b.assign(&id, None, None);
            assert_eq!(a.record(&id), b.record(&id));
        }
    }
}
