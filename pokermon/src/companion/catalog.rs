//! Built-in companion catalog.

use super::{
    errors::{CompanionError, CompanionResult},
    models::{Companion, EffectType, Rarity},
};
use crate::ai::{PersonalityProfile, PersonalityTable};
use rand::Rng;

/// Row of the built-in catalog: name, rarity, base health, effect, effect
/// power, description and default personality.
type CatalogEntry = (
    &'static str,
    Rarity,
    u32,
    EffectType,
    u32,
    &'static str,
    &'static str,
);

const STANDARD_COMPANIONS: [CatalogEntry; 18] = [
    (
        "PixelPup",
        Rarity::Common,
        100,
        EffectType::ChipBonus,
        50,
        "A loyal digital companion that boosts your starting chips",
        "Happy",
    ),
    (
        "ByteBird",
        Rarity::Common,
        80,
        EffectType::CardAdvantage,
        1,
        "Swift pixelated flyer that grants an extra card draw",
        "Lively",
    ),
    (
        "CodeCat",
        Rarity::Common,
        90,
        EffectType::LuckEnhancement,
        5,
        "Curious feline program that slightly improves your luck",
        "Pensive",
    ),
    (
        "DataDog",
        Rarity::Common,
        110,
        EffectType::BettingBoost,
        10,
        "Faithful digital hound that enhances betting effectiveness",
        "Trusting",
    ),
    (
        "FireFox.exe",
        Rarity::Uncommon,
        150,
        EffectType::ChipBonus,
        100,
        "Blazing browser spirit that significantly boosts starting chips",
        "Foolhardy",
    ),
    (
        "AquaApp",
        Rarity::Uncommon,
        140,
        EffectType::CardAdvantage,
        2,
        "Fluid application that grants multiple extra draws",
        "Blissful",
    ),
    (
        "TechTurtle",
        Rarity::Uncommon,
        180,
        EffectType::BettingBoost,
        20,
        "Slow but steady shell program with strong betting bonuses",
        "Defensive",
    ),
    (
        "CloudCrawler",
        Rarity::Uncommon,
        130,
        EffectType::LuckEnhancement,
        15,
        "Floating data creature that substantially improves fortune",
        "Unaware",
    ),
    (
        "NeuralNinja",
        Rarity::Rare,
        250,
        EffectType::CardAdvantage,
        3,
        "Stealthy AI warrior with superior card manipulation abilities",
        "Insincere",
    ),
    (
        "QuantumQuokka",
        Rarity::Rare,
        220,
        EffectType::LuckEnhancement,
        25,
        "Quantum marsupial that bends probability in your favor",
        "Indecisive",
    ),
    (
        "CyberShark",
        Rarity::Rare,
        280,
        EffectType::BettingBoost,
        40,
        "Predatory program that dominates betting rounds",
        "Brash",
    ),
    (
        "RoboRaven",
        Rarity::Rare,
        240,
        EffectType::ChipBonus,
        200,
        "Mechanical corvid that hoards substantial digital currency",
        "Smarmy",
    ),
    (
        "MegaMind.AI",
        Rarity::Epic,
        400,
        EffectType::CardAdvantage,
        4,
        "Supreme artificial intelligence with unparalleled card control",
        "Brainy",
    ),
    (
        "DragonDrive",
        Rarity::Epic,
        450,
        EffectType::ChipBonus,
        350,
        "Ancient storage dragon guarding vast digital treasures",
        "Confident",
    ),
    (
        "PhoenixProtocol",
        Rarity::Epic,
        380,
        EffectType::LuckEnhancement,
        40,
        "Self-reviving program that brings incredible fortune",
        "Self-assured",
    ),
    (
        "The Compiler",
        Rarity::Legendary,
        600,
        EffectType::CardAdvantage,
        5,
        "Legendary code transformer with ultimate card mastery",
        "Condescending",
    ),
    (
        "Daemon.exe",
        Rarity::Legendary,
        650,
        EffectType::BettingBoost,
        100,
        "Mythical system process with overwhelming betting power",
        "Muscle-headed",
    ),
    (
        "The Algorithm",
        Rarity::Legendary,
        700,
        EffectType::LuckEnhancement,
        75,
        "The ultimate mathematical entity that controls all probability",
        "Fighter",
    ),
];

/// Rarity pick weights in percent, in [`Rarity::ALL`] order.
const RARITY_WEIGHTS: [u32; 5] = [50, 25, 15, 8, 2];

/// Collection of companions, looked up by name.
#[derive(Clone, Debug)]
pub struct CompanionCatalog {
    companions: Vec<Companion>,
}

impl CompanionCatalog {
    /// Catalog of the 18 built-in companions.
    ///
    /// Default personalities come from `personalities`; a missing preset
    /// falls back to the table's default profile.
    pub fn standard_with(personalities: &PersonalityTable) -> Self {
        let companions = STANDARD_COMPANIONS
            .iter()
            .filter_map(|&(name, rarity, health, effect, power, description, personality)| {
                let profile = personalities
                    .get(personality)
                    .cloned()
                    .unwrap_or_else(|| personalities.default_profile());
                Companion::new(name, rarity, health, effect, power, description, profile).ok()
            })
            .collect();
        Self { companions }
    }

    pub fn standard() -> Self {
        Self::standard_with(&PersonalityTable::standard())
    }

    /// Build a catalog from arbitrary companions.
    ///
    /// # Errors
    ///
    /// Returns [`CompanionError::Duplicate`] if two companions share a name.
    pub fn new(companions: Vec<Companion>) -> CompanionResult<Self> {
        let mut catalog = Self {
            companions: Vec::with_capacity(companions.len()),
        };
        for companion in companions {
            catalog.insert(companion)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, companion: Companion) -> CompanionResult<()> {
        if self.contains(companion.name()) {
            return Err(CompanionError::Duplicate(companion.name().to_string()));
        }
        self.companions.push(companion);
        Ok(())
    }

    /// Look up a companion by exact name.
    pub fn get(&self, name: &str) -> Option<&Companion> {
        let name = name.trim();
        self.companions.iter().find(|c| c.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn by_rarity(&self, rarity: Rarity) -> Vec<&Companion> {
        self.companions
            .iter()
            .filter(|c| c.rarity() == rarity)
            .collect()
    }

    /// Names starting with `prefix`, ignoring case, sorted.
    pub fn names_starting_with(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.trim().to_lowercase();
        let mut names: Vec<&str> = self
            .companions
            .iter()
            .map(Companion::name)
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .collect();
        names.sort_unstable();
        names
    }

    /// Pick a companion, first drawing a rarity (50/25/15/8/2 percent) and
    /// then a companion of that rarity uniformly.
    ///
    /// An empty rarity tier falls back to a uniform pick over the whole
    /// catalog. Returns `None` only for an empty catalog.
    pub fn random_weighted<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Companion> {
        if self.companions.is_empty() {
            return None;
        }

        let total: u32 = RARITY_WEIGHTS.iter().sum();
        let mut roll = rng.random_range(0..total);
        let mut rarity = Rarity::Common;
        for (tier, weight) in Rarity::ALL.into_iter().zip(RARITY_WEIGHTS) {
            if roll < weight {
                rarity = tier;
                break;
            }
            roll -= weight;
        }

        let tier = self.by_rarity(rarity);
        if tier.is_empty() {
            let idx = rng.random_range(0..self.companions.len());
            return self.companions.get(idx);
        }
        let idx = rng.random_range(0..tier.len());
        tier.get(idx).copied()
    }

    /// Companion for `name`, or a basic common companion carrying that name.
    pub fn get_or_fallback(&self, name: &str) -> Companion {
        self.get(name).cloned().unwrap_or_else(|| {
            log::warn!("Unknown companion '{}', using a basic one", name);
            Companion::fallback(name)
        })
    }

    /// Default personality of a catalog companion.
    pub fn personality_of(&self, name: &str) -> Option<&PersonalityProfile> {
        self.get(name).map(Companion::personality)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Companion> {
        self.companions.iter()
    }

    pub fn len(&self) -> usize {
        self.companions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companions.is_empty()
    }
}

impl Default for CompanionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
