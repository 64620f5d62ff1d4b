//! Food vocabulary and classification lookup.
//!
//! All tables are embedded JSON parsed once at first use. The vocabulary
//! (modifier stoplist, plural table, compound identities, synonyms, non-food
//! reject list) is expected to grow over time, so it lives in data files
//! rather than in match arms.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use thiserror::Error;

// =============================================================================
// Public types
// =============================================================================

/// Coarse nutrition category used for portion defaults and density scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodClass {
    Protein,
    Starch,
    Veg,
    Leafy,
    Other,
}

impl FoodClass {
    /// All classes, used to validate that every class has a calibration profile.
    pub const ALL: &'static [FoodClass] = &[
        FoodClass::Protein,
        FoodClass::Starch,
        FoodClass::Veg,
        FoodClass::Leafy,
        FoodClass::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodClass::Protein => "protein",
            FoodClass::Starch => "starch",
            FoodClass::Veg => "veg",
            FoodClass::Leafy => "leafy",
            FoodClass::Other => "other",
        }
    }
}

/// Portion calibration for one food class.
///
/// `base_grams` is the default portion when no geometry is available.
/// `density_factor` scales the area-based estimate (denser classes weigh
/// more per unit of plate area).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClassProfile {
    pub base_grams: u32,
    pub density_factor: f64,
}

#[derive(Error, Debug)]
pub enum TaxonomyError {
    #[error("invalid taxonomy JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing calibration profile for class '{0}'")]
    MissingProfile(&'static str),

    #[error("implausible calibration for class '{class}': {detail}")]
    Calibration {
        class: &'static str,
        detail: String,
    },
}

// =============================================================================
// Data loading
// =============================================================================

/// Raw vocabulary file structure.
#[derive(Deserialize)]
struct VocabularyFile {
    modifiers: Vec<String>,
    irregular_plurals: HashMap<String, String>,
    compounds: Vec<String>,
    synonyms: HashMap<String, String>,
    non_food: Vec<String>,
}

/// Raw classification file structure.
#[derive(Deserialize)]
struct ClassesFile {
    classes: HashMap<String, FoodClass>,
    profiles: HashMap<FoodClass, ClassProfile>,
}

/// Embedded JSON data files.
static VOCABULARY_JSON: &str = include_str!("data/vocabulary.json");
static CLASSES_JSON: &str = include_str!("data/classes.json");

struct TaxonomyData {
    modifiers: HashSet<String>,
    irregular_plurals: HashMap<String, String>,
    compounds: HashSet<String>,
    synonyms: HashMap<String, String>,
    non_food: HashSet<String>,
    classes: HashMap<String, FoodClass>,
    profiles: HashMap<FoodClass, ClassProfile>,
}

/// Non-protein class defaults must stay in a plausible single-serving range.
const BASE_GRAMS_MIN: u32 = 40;
const BASE_GRAMS_MAX: u32 = 300;

fn load() -> Result<TaxonomyData, TaxonomyError> {
    let vocabulary: VocabularyFile = serde_json::from_str(VOCABULARY_JSON)?;
    let classes: ClassesFile = serde_json::from_str(CLASSES_JSON)?;

    for class in FoodClass::ALL {
        let profile = classes
            .profiles
            .get(class)
            .ok_or(TaxonomyError::MissingProfile(class.as_str()))?;

        if profile.base_grams < BASE_GRAMS_MIN || profile.base_grams > BASE_GRAMS_MAX {
            return Err(TaxonomyError::Calibration {
                class: class.as_str(),
                detail: format!(
                    "base_grams {} outside [{BASE_GRAMS_MIN}, {BASE_GRAMS_MAX}]",
                    profile.base_grams
                ),
            });
        }
        if !profile.density_factor.is_finite() || profile.density_factor <= 0.0 {
            return Err(TaxonomyError::Calibration {
                class: class.as_str(),
                detail: format!("density_factor {} must be finite and positive", profile.density_factor),
            });
        }
    }

    Ok(TaxonomyData {
        modifiers: vocabulary.modifiers.into_iter().collect(),
        irregular_plurals: vocabulary.irregular_plurals,
        compounds: vocabulary.compounds.into_iter().collect(),
        synonyms: vocabulary.synonyms,
        non_food: vocabulary.non_food.into_iter().collect(),
        classes: classes.classes,
        profiles: classes.profiles,
    })
}

static DATA: LazyLock<TaxonomyData> =
    LazyLock::new(|| load().expect("embedded taxonomy data should be valid"));

// =============================================================================
// Public API
// =============================================================================

/// Check whether a token is a preparation/freshness/cut modifier that carries
/// no food identity ("grilled", "fresh", "breast").
pub fn is_modifier(token: &str) -> bool {
    DATA.modifiers.contains(token)
}

/// Look up the singular form of an irregular plural token.
///
/// Entries may map a token to itself ("fries") to block suffix stripping
/// that would destroy a known identity.
pub fn irregular_singular(token: &str) -> Option<&'static str> {
    DATA.irregular_plurals.get(token).map(String::as_str)
}

/// Check whether a phrase is a multi-word food identity that must not be
/// decomposed ("french fries", "hot dog").
pub fn is_compound(phrase: &str) -> bool {
    DATA.compounds.contains(phrase)
}

/// Look up the canonical consolidation for a phrase ("soda" -> "soft drink").
pub fn synonym(phrase: &str) -> Option<&'static str> {
    DATA.synonyms.get(phrase).map(String::as_str)
}

/// Check whether a lowercase detection name is tableware or another
/// non-food object the recognizer commonly reports.
pub fn is_non_food(name: &str) -> bool {
    DATA.non_food.contains(name)
}

/// Classify a canonical food key into a coarse nutrition category.
///
/// Tries an exact match first, then falls back to the key's tokens in order
/// ("chicken curry" classifies via "chicken"). Unrecognized keys are `Other`.
pub fn classify(key: &str) -> FoodClass {
    if let Some(&class) = DATA.classes.get(key) {
        return class;
    }
    for token in key.split_whitespace() {
        if let Some(&class) = DATA.classes.get(token) {
            return class;
        }
    }
    FoodClass::Other
}

/// Portion calibration profile for a class. Every class has one; this is
/// validated when the tables load.
pub fn class_profile(class: FoodClass) -> ClassProfile {
    DATA.profiles[&class]
}

// =============================================================================
// Tests
// =============================================================================
