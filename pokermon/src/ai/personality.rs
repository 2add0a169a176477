//! Personality profiles that parameterize AI betting behavior.
//!
//! Profiles are plain data: a name plus ten base traits scored from 0.0
//! (almost never) to 10.0 (almost always). The poker-facing quantities
//! (aggressiveness, bluff tendency, fold tendency, deception) are derived
//! from the base traits on demand, so new presets never require changes to
//! the decision logic.

use super::errors::{PersonalityError, PersonalityResult};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest allowed trait score
pub const TRAIT_MIN: f64 = 0.0;

/// Highest allowed trait score
pub const TRAIT_MAX: f64 = 10.0;

/// Name of the balanced profile used when nothing else is known
pub const DEFAULT_PERSONALITY: &str = "Happy";

/// Clamp a trait score into `[TRAIT_MIN, TRAIT_MAX]`.
pub fn clamp_trait(value: f64) -> f64 {
    value.clamp(TRAIT_MIN, TRAIT_MAX)
}

/// Stored base traits of a personality.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct BaseTraits {
    /// Willingness to take risks and face challenges
    pub courage: f64,
    /// How easily influenced or deceived
    pub gullibility: f64,
    /// Cunning and tactical cleverness
    pub guile: f64,
    /// Self-assurance
    pub confidence: f64,
    /// Careful consideration and prudence
    pub caution: f64,
    /// Ability to read others
    pub empathy: f64,
    /// Tendency to avoid confrontation
    pub timidness: f64,
    /// Tolerance for waiting
    pub patience: f64,
    /// Drive to take initiative
    pub ambition: f64,
    /// Analytical thinking
    pub intelligence: f64,
}

impl BaseTraits {
    /// Build traits from an array ordered as the struct fields.
    pub const fn from_array(values: [f64; 10]) -> Self {
        Self {
            courage: values[0],
            gullibility: values[1],
            guile: values[2],
            confidence: values[3],
            caution: values[4],
            empathy: values[5],
            timidness: values[6],
            patience: values[7],
            ambition: values[8],
            intelligence: values[9],
        }
    }

    /// Copy with every trait clamped into range.
    pub fn clamped(&self) -> Self {
        Self {
            courage: clamp_trait(self.courage),
            gullibility: clamp_trait(self.gullibility),
            guile: clamp_trait(self.guile),
            confidence: clamp_trait(self.confidence),
            caution: clamp_trait(self.caution),
            empathy: clamp_trait(self.empathy),
            timidness: clamp_trait(self.timidness),
            patience: clamp_trait(self.patience),
            ambition: clamp_trait(self.ambition),
            intelligence: clamp_trait(self.intelligence),
        }
    }

    #[cfg(test)]
    fn as_array(&self) -> [f64; 10] {
        [
            self.courage,
            self.gullibility,
            self.guile,
            self.confidence,
            self.caution,
            self.empathy,
            self.timidness,
            self.patience,
            self.ambition,
            self.intelligence,
        ]
    }
}

/// An immutable, named personality.
///
/// Deserialized profiles go through [`PersonalityProfile::new`], so traits
/// are clamped however they were stored.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(from = "StoredProfile")]
pub struct PersonalityProfile {
    name: String,
    traits: BaseTraits,
}

/// Profile as written in preset files, before clamping.
#[derive(Deserialize)]
struct StoredProfile {
    name: String,
    traits: BaseTraits,
}

impl From<StoredProfile> for PersonalityProfile {
    fn from(stored: StoredProfile) -> Self {
        Self::new(stored.name, stored.traits)
    }
}

impl PersonalityProfile {
    /// Create a profile, clamping every trait into range.
    pub fn new(name: impl Into<String>, traits: BaseTraits) -> Self {
        Self {
            name: name.into(),
            traits: traits.clamped(),
        }
    }

    /// Build a profile back from a composite trait set.
    ///
    /// Traits the composite keeps verbatim are copied; the rest are solved
    /// from the averaging formulas in [`PersonalityTraits::from_profile`],
    /// and the two traits the composite does not capture (ambition and
    /// gullibility) are averaged from their neighbours.
    pub fn from_traits(name: impl Into<String>, composite: &PersonalityTraits) -> Self {
        let guile = clamp_trait(2.0 * composite.adaptability - composite.intelligence);
        let caution = 2.0 * composite.tactfulness - guile;
        let timidness = TRAIT_MAX - (2.0 * composite.tenacity - composite.confidence);
        let ambition = (composite.bravery + composite.tenacity) / 2.0;
        let gullibility = TRAIT_MAX - (composite.intelligence + composite.adaptability) / 2.0;

        Self::new(
            name,
            BaseTraits {
                courage: composite.bravery,
                gullibility,
                guile,
                confidence: composite.confidence,
                caution,
                empathy: composite.empathy,
                timidness,
                patience: composite.patience,
                ambition,
                intelligence: composite.intelligence,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn traits(&self) -> &BaseTraits {
        &self.traits
    }

    pub fn caution(&self) -> f64 {
        self.traits.caution
    }

    pub fn confidence(&self) -> f64 {
        self.traits.confidence
    }

    pub fn gullibility(&self) -> f64 {
        self.traits.gullibility
    }

    /// Effective aggressiveness (0.0-10.0)
    pub fn aggressiveness(&self) -> f64 {
        let t = &self.traits;
        clamp_trait(t.courage * 0.4 + t.ambition * 0.3 + t.confidence * 0.3)
    }

    /// Effective bluff tendency (0.0-10.0)
    pub fn bluff_tendency(&self) -> f64 {
        let t = &self.traits;
        clamp_trait(t.guile * 0.5 + t.confidence * 0.3 + t.courage * 0.2)
    }

    /// Effective fold tendency (0.0-10.0)
    pub fn fold_tendency(&self) -> f64 {
        let t = &self.traits;
        clamp_trait(t.timidness * 0.4 + t.caution * 0.3 + (TRAIT_MAX - t.confidence) * 0.3)
    }

    /// Effective deception (0.0-10.0)
    pub fn deception(&self) -> f64 {
        let t = &self.traits;
        clamp_trait(t.guile * 0.6 + t.intelligence * 0.2 + (TRAIT_MAX - t.empathy) * 0.2)
    }

    /// Whether `query` names this profile, ignoring case and `_`/`-`.
    pub fn matches_name(&self, query: &str) -> bool {
        normalize_name(&self.name) == normalize_name(query)
    }
}

impl Default for PersonalityProfile {
    fn default() -> Self {
        PRESETS
            .iter()
            .find(|(name, _)| *name == DEFAULT_PERSONALITY)
            .map(|&(name, values)| Self::new(name, BaseTraits::from_array(values)))
            .unwrap_or_else(|| Self::new(DEFAULT_PERSONALITY, BaseTraits::from_array([5.0; 10])))
    }
}

impl fmt::Display for PersonalityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace('_', "-")
}

/// Composite traits derived from a profile, reusable outside poker.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PersonalityTraits {
    pub bravery: f64,
    pub tenacity: f64,
    pub intelligence: f64,
    pub confidence: f64,
    pub tactfulness: f64,
    pub empathy: f64,
    pub patience: f64,
    pub adaptability: f64,
}

impl PersonalityTraits {
    /// Create a composite, clamping every trait into range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        bravery: f64,
        tenacity: f64,
        intelligence: f64,
        confidence: f64,
        tactfulness: f64,
        empathy: f64,
        patience: f64,
        adaptability: f64,
    ) -> Self {
        Self {
            bravery: clamp_trait(bravery),
            tenacity: clamp_trait(tenacity),
            intelligence: clamp_trait(intelligence),
            confidence: clamp_trait(confidence),
            tactfulness: clamp_trait(tactfulness),
            empathy: clamp_trait(empathy),
            patience: clamp_trait(patience),
            adaptability: clamp_trait(adaptability),
        }
    }

    /// Derive the composite from a profile's base traits.
    pub fn from_profile(profile: &PersonalityProfile) -> Self {
        let t = profile.traits();
        Self::new(
            t.courage,
            (t.confidence + (TRAIT_MAX - t.timidness)) / 2.0,
            t.intelligence,
            t.confidence,
            (t.guile + t.caution) / 2.0,
            t.empathy,
            t.patience,
            (t.guile + t.intelligence) / 2.0,
        )
    }

    /// Mean of all eight traits, used as a difficulty estimate.
    pub fn overall_strength(&self) -> f64 {
        (self.bravery
            + self.tenacity
            + self.intelligence
            + self.confidence
            + self.tactfulness
            + self.empathy
            + self.patience
            + self.adaptability)
            / 8.0
    }

    /// Scale every trait, e.g. for rarity bonuses. Results are re-clamped.
    pub fn apply_multiplier(&self, multiplier: f64) -> Self {
        Self::new(
            self.bravery * multiplier,
            self.tenacity * multiplier,
            self.intelligence * multiplier,
            self.confidence * multiplier,
            self.tactfulness * multiplier,
            self.empathy * multiplier,
            self.patience * multiplier,
            self.adaptability * multiplier,
        )
    }
}

impl fmt::Display for PersonalityTraits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bravery={:.1}, tenacity={:.1}, intelligence={:.1}, confidence={:.1}, \
             tactfulness={:.1}, empathy={:.1}, patience={:.1}, adaptability={:.1}",
            self.bravery,
            self.tenacity,
            self.intelligence,
            self.confidence,
            self.tactfulness,
            self.empathy,
            self.patience,
            self.adaptability
        )
    }
}

/// The 24 built-in presets.
///
/// Columns: courage, gullibility, guile, confidence, caution, empathy,
/// timidness, patience, ambition, intelligence.
pub const PRESETS: [(&str, [f64; 10]); 24] = [
    ("Foolhardy", [9.0, 3.0, 8.0, 7.0, 2.0, 7.0, 1.0, 3.0, 8.5, 4.0]),
    ("Gullible", [4.0, 8.5, 3.0, 4.0, 7.0, 6.0, 6.0, 5.0, 3.0, 5.0]),
    ("Brash", [8.5, 4.0, 7.5, 8.0, 3.0, 5.0, 2.0, 4.0, 8.0, 6.0]),
    ("Pensive", [4.0, 3.0, 4.0, 3.5, 8.5, 8.0, 8.0, 7.5, 4.0, 8.5]),
    ("Meek", [2.5, 6.0, 2.5, 2.0, 6.0, 7.0, 8.5, 6.0, 2.0, 5.0]),
    ("Anxious", [3.0, 5.0, 3.0, 2.5, 7.0, 6.5, 8.0, 5.5, 3.5, 6.0]),
    ("Happy", [6.5, 5.0, 6.5, 6.0, 5.0, 7.5, 3.0, 6.0, 6.5, 6.0]),
    ("Doubtful", [3.5, 4.0, 3.5, 3.0, 7.5, 6.0, 7.0, 6.5, 3.0, 7.0]),
    ("Trusting", [5.5, 7.5, 5.5, 5.0, 4.0, 8.0, 4.0, 7.0, 5.0, 6.0]),
    ("Blissful", [7.5, 6.0, 7.5, 7.0, 2.0, 8.5, 2.0, 5.0, 7.0, 4.0]),
    ("Unaware", [5.5, 8.0, 6.0, 5.5, 2.5, 6.0, 4.0, 3.0, 5.0, 3.5]),
    ("Insincere", [6.0, 2.0, 8.5, 7.5, 6.0, 4.0, 5.0, 4.0, 6.5, 7.5]),
    ("Shy", [2.0, 4.0, 2.0, 2.5, 6.5, 6.0, 8.5, 5.5, 2.5, 5.0]),
    ("Brainy", [4.5, 2.5, 5.0, 4.5, 9.0, 7.0, 6.0, 8.0, 4.0, 9.5]),
    ("Muscle-headed", [8.5, 6.0, 4.0, 8.0, 2.5, 3.0, 1.5, 3.0, 8.0, 3.0]),
    ("Fighter", [8.0, 3.0, 6.5, 7.5, 5.0, 5.0, 3.0, 5.5, 7.5, 6.0]),
    ("Lively", [7.5, 5.5, 7.0, 7.0, 4.0, 7.0, 2.5, 7.5, 7.0, 6.5]),
    ("Indecisive", [4.0, 5.0, 4.5, 4.0, 6.0, 5.0, 6.5, 4.0, 4.0, 6.0]),
    ("Defensive", [3.0, 3.5, 3.0, 3.5, 7.0, 5.0, 7.5, 6.0, 3.0, 6.5]),
    ("Self-assured", [7.5, 3.0, 7.0, 8.0, 6.0, 6.0, 2.5, 6.5, 7.0, 7.0]),
    ("Confident", [8.0, 3.5, 6.5, 8.5, 6.5, 6.5, 2.0, 7.0, 7.5, 7.5]),
    ("Smarmy", [6.0, 2.5, 8.0, 7.0, 7.0, 4.5, 4.0, 5.0, 6.0, 7.0]),
    ("Condescending", [5.5, 2.0, 7.5, 8.0, 7.5, 4.0, 3.5, 4.5, 5.5, 8.0]),
    ("Humble", [4.5, 5.0, 3.0, 4.0, 6.5, 7.5, 6.0, 7.0, 4.0, 6.5]),
];

/// An ordered table of personality profiles.
#[derive(Clone, Debug)]
pub struct PersonalityTable {
    profiles: Vec<PersonalityProfile>,
}

impl PersonalityTable {
    /// Table holding the 24 built-in presets.
    pub fn standard() -> Self {
        let profiles = PRESETS
            .iter()
            .map(|&(name, values)| PersonalityProfile::new(name, BaseTraits::from_array(values)))
            .collect();
        Self { profiles }
    }

    /// Look up a profile by display name or identifier form, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokermon::ai::PersonalityTable;
    ///
    /// let table = PersonalityTable::standard();
    /// assert!(table.get("MUSCLE_HEADED").is_some());
    /// assert!(table.get("muscle-headed").is_some());
    /// assert!(table.get("Nonexistent").is_none());
    /// ```
    pub fn get(&self, name: &str) -> Option<&PersonalityProfile> {
        self.profiles.iter().find(|p| p.matches_name(name))
    }

    /// Pick a profile uniformly at random.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&PersonalityProfile> {
        if self.profiles.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.profiles.len());
        self.profiles.get(idx)
    }

    /// The profile used when a lookup has nothing better.
    pub fn default_profile(&self) -> PersonalityProfile {
        self.get(DEFAULT_PERSONALITY)
            .cloned()
            .unwrap_or_default()
    }

    /// Add one profile. Names must be non-blank and unique.
    pub fn insert(&mut self, profile: PersonalityProfile) -> PersonalityResult<()> {
        if profile.name().trim().is_empty() {
            return Err(PersonalityError::EmptyName);
        }
        if self.get(profile.name()).is_some() {
            return Err(PersonalityError::Duplicate(profile.name().to_string()));
        }
        self.profiles.push(profile);
        Ok(())
    }

    /// Load extra presets from a JSON array of profiles.
    ///
    /// Traits are clamped on load. Returns the number of profiles added; on
    /// error the table is left unchanged.
    pub fn extend_from_json(&mut self, json: &str) -> PersonalityResult<usize> {
        let parsed: Vec<PersonalityProfile> = serde_json::from_str(json)?;

        let mut staged = self.clone();
        for profile in &parsed {
            staged.insert(PersonalityProfile::new(profile.name.trim(), profile.traits))?;
        }

        let added = parsed.len();
        *self = staged;
        log::info!("Loaded {} custom personalities", added);
        Ok(added)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonalityProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for PersonalityTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn preset(name: &str) -> PersonalityProfile {
        PersonalityTable::standard()
            .get(name)
            .cloned()
            .expect("preset should exist")
    }

    #[test]
    fn test_standard_table_has_24_presets() {
        let table = PersonalityTable::standard();
        assert_eq!(table.len(), 24);
    }

    #[test]
    fn test_all_traits_in_range() {
        for profile in PersonalityTable::standard().iter() {
            for value in profile.traits().as_array() {
                assert!((TRAIT_MIN..=TRAIT_MAX).contains(&value), "{}", profile);
            }
            for derived in [
                profile.aggressiveness(),
                profile.bluff_tendency(),
                profile.fold_tendency(),
                profile.deception(),
            ] {
                assert!((TRAIT_MIN..=TRAIT_MAX).contains(&derived), "{}", profile);
            }
        }
    }

    #[test]
    fn test_derived_traits_for_brash() {
        let brash = preset("Brash");
        // 8.5*0.4 + 8.0*0.3 + 8.0*0.3
        assert!((brash.aggressiveness() - 8.2).abs() < 1e-9);
        assert_eq!(brash.confidence(), 8.0);
        // 7.5*0.5 + 8.0*0.3 + 8.5*0.2
        assert!((brash.bluff_tendency() - 7.85).abs() < 1e-9);
        // 2.0*0.4 + 3.0*0.3 + 2.0*0.3
        assert!((brash.fold_tendency() - 2.3).abs() < 1e-9);
    }

    #[test]
    fn test_meek_is_timid() {
        let meek = preset("Meek");
        assert!(meek.aggressiveness() < 3.0);
        assert!(meek.fold_tendency() > 6.0);
    }

    #[test]
    fn test_new_clamps_traits() {
        let profile = PersonalityProfile::new(
            "Wild",
            BaseTraits::from_array([15.0, -3.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 11.0, 5.0]),
        );
        assert_eq!(profile.traits().courage, 10.0);
        assert_eq!(profile.traits().gullibility, 0.0);
        assert_eq!(profile.traits().ambition, 10.0);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = PersonalityTable::standard();
        assert_eq!(table.get("brash").map(|p| p.name()), Some("Brash"));
        assert_eq!(
            table.get("SELF_ASSURED").map(|p| p.name()),
            Some("Self-assured")
        );
        assert!(table.get("").is_none());
    }

    #[test]
    fn test_default_profile_is_happy() {
        assert_eq!(PersonalityProfile::default().name(), "Happy");
        assert_eq!(PersonalityTable::standard().default_profile(), preset("Happy"));
    }

    #[test]
    fn test_random_is_reproducible() {
        let table = PersonalityTable::standard();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(table.random(&mut a), table.random(&mut b));
        }
    }

    #[test]
    fn test_composite_from_profile() {
        let traits = PersonalityTraits::from_profile(&preset("Brash"));
        assert_eq!(traits.bravery, 8.5);
        assert_eq!(traits.tenacity, 8.0); // (8.0 + (10 - 2.0)) / 2
        assert_eq!(traits.tactfulness, 5.25); // (7.5 + 3.0) / 2
        assert_eq!(traits.adaptability, 6.75); // (7.5 + 6.0) / 2
    }

    #[test]
    fn test_composite_round_trip_keeps_solvable_traits() {
        for original in PersonalityTable::standard().iter() {
            let composite = PersonalityTraits::from_profile(original);
            let rebuilt = PersonalityProfile::from_traits(original.name(), &composite);
            let (a, b) = (original.traits(), rebuilt.traits());
            assert!((a.courage - b.courage).abs() < 1e-9);
            assert!((a.guile - b.guile).abs() < 1e-9);
            assert!((a.caution - b.caution).abs() < 1e-9);
            assert!((a.timidness - b.timidness).abs() < 1e-9);
            assert!((a.confidence - b.confidence).abs() < 1e-9);
        }
    }

    #[test]
    fn test_overall_strength_and_multiplier() {
        let traits = PersonalityTraits::new(8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0);
        assert_eq!(traits.overall_strength(), 8.0);

        let boosted = traits.apply_multiplier(2.0);
        assert_eq!(boosted.bravery, 10.0);
        assert_eq!(boosted.overall_strength(), 10.0);

        let halved = traits.apply_multiplier(0.5);
        assert_eq!(halved.patience, 4.0);
    }

    #[test]
    fn test_extend_from_json() {
        let mut table = PersonalityTable::standard();
        let json = r#"[{"name": "Boss", "traits": {
            "courage": 12.0, "gullibility": 1.0, "guile": 9.0, "confidence": 9.5,
            "caution": 4.0, "empathy": 3.0, "timidness": 0.5, "patience": 6.0,
            "ambition": 9.0, "intelligence": 8.0
        }}]"#;

        let added = table.extend_from_json(json).expect("valid json");
        assert_eq!(added, 1);
        assert_eq!(table.len(), 25);

        let boss = table.get("boss").expect("loaded preset");
        assert_eq!(boss.traits().courage, 10.0);
    }

    #[test]
    fn test_deserialize_clamps_traits() {
        let json = r#"{"name": "Wild", "traits": {
            "courage": 5.0, "gullibility": -20.0, "guile": 5.0, "confidence": 99.0,
            "caution": 40.0, "empathy": 5.0, "timidness": 5.0, "patience": 5.0,
            "ambition": 5.0, "intelligence": 5.0
        }}"#;

        let profile: PersonalityProfile = serde_json::from_str(json).expect("valid json");
        assert_eq!(profile.caution(), 10.0, "caution should be clamped to the maximum");
        assert_eq!(profile.confidence(), 10.0, "confidence should be clamped to the maximum");
        assert_eq!(profile.gullibility(), 0.0, "gullibility should be clamped to the minimum");
        for value in profile.traits().as_array() {
            assert!((TRAIT_MIN..=TRAIT_MAX).contains(&value), "trait {} out of range", value);
        }
    }

    #[test]
    fn test_extend_from_json_rejects_duplicates() {
        let mut table = PersonalityTable::standard();
        let json = r#"[{"name": "brash", "traits": {
            "courage": 1.0, "gullibility": 1.0, "guile": 1.0, "confidence": 1.0,
            "caution": 1.0, "empathy": 1.0, "timidness": 1.0, "patience": 1.0,
            "ambition": 1.0, "intelligence": 1.0
        }}]"#;

        let err = table.extend_from_json(json).unwrap_err();
        assert!(matches!(err, PersonalityError::Duplicate(_)));
        assert_eq!(table.len(), 24);
    }

    #[test]
    fn test_extend_from_json_rejects_garbage() {
        let mut table = PersonalityTable::standard();
        let err = table.extend_from_json("not json").unwrap_err();
        assert!(matches!(err, PersonalityError::Parse(_)));
    }
}
