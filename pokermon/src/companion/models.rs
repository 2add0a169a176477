//! Companion monster models.

use super::errors::{CompanionError, CompanionResult};
use crate::ai::PersonalityProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rarity tiers, from most to least common.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Multiplier applied to health and effect power.
    pub fn power_multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.5,
            Rarity::Rare => 2.0,
            Rarity::Epic => 3.0,
            Rarity::Legendary => 5.0,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        };
        write!(f, "{repr}")
    }
}

/// Gameplay effect a companion grants.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum EffectType {
    /// Increases starting chips
    ChipBonus,
    /// Provides extra card draws
    CardAdvantage,
    /// Improves betting effectiveness
    BettingBoost,
    /// Increases chance of good hands
    LuckEnhancement,
    /// Changes game appearance
    VisualTheme,
}

/// A collectible companion monster.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Companion {
    name: String,
    rarity: Rarity,
    base_health: u32,
    effect: EffectType,
    effect_power: u32,
    description: String,
    personality: PersonalityProfile,
}

impl Companion {
    /// Create a companion.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the health is zero.
    pub fn new(
        name: &str,
        rarity: Rarity,
        base_health: u32,
        effect: EffectType,
        effect_power: u32,
        description: &str,
        personality: PersonalityProfile,
    ) -> CompanionResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CompanionError::EmptyName);
        }
        if base_health == 0 {
            return Err(CompanionError::InvalidHealth);
        }

        Ok(Self {
            name: name.to_string(),
            rarity,
            base_health,
            effect,
            effect_power,
            description: description.trim().to_string(),
            personality,
        })
    }

    /// Last-resort companion when no catalog entry can be found.
    pub fn fallback(name: &str) -> Self {
        let name = match name.trim() {
            "" => "PixelPup",
            trimmed => trimmed,
        };
        Self {
            name: name.to_string(),
            rarity: Rarity::Common,
            base_health: 100,
            effect: EffectType::ChipBonus,
            effect_power: 10,
            description: "A digital companion".to_string(),
            personality: PersonalityProfile::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn base_health(&self) -> u32 {
        self.base_health
    }

    pub fn effect(&self) -> EffectType {
        self.effect
    }

    pub fn effect_power(&self) -> u32 {
        self.effect_power
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Personality used when none is assigned explicitly.
    pub fn personality(&self) -> &PersonalityProfile {
        &self.personality
    }

    /// Health scaled by rarity (truncated).
    pub fn effective_health(&self) -> u32 {
        (self.base_health as f64 * self.rarity.power_multiplier()) as u32
    }

    /// Effect power scaled by rarity (truncated).
    pub fn effective_effect_power(&self) -> u32 {
        (self.effect_power as f64 * self.rarity.power_multiplier()) as u32
    }
}

impl fmt::Display for Companion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) - Health: {}, Effect: {:?} (+{})",
            self.name,
            self.rarity,
            self.personality,
            self.effective_health(),
            self.effect,
            self.effective_effect_power()
        )
    }
}
