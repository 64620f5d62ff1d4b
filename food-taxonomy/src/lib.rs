//! Static food vocabulary and classification data.
//!
//! This crate owns the lookup tables the fusion engine depends on: the
//! modifier stoplist, irregular-plural table, compound-identity table,
//! synonym table, non-food reject list, food-class table, and the per-class
//! portion calibration profiles.
//!
//! All data is embedded JSON (`src/data/`) parsed once at first use, so the
//! vocabulary can grow without touching the algorithms that consume it.
//!
//! # Example
//!
//! ```
//! use food_taxonomy::{classify, class_profile, FoodClass};
//!
//! assert_eq!(classify("salmon"), FoodClass::Protein);
//! let profile = class_profile(FoodClass::Protein);
//! assert_eq!(profile.base_grams, 135);
//! ```

mod taxonomy;

pub use taxonomy::{
    class_profile, classify, irregular_singular, is_compound, is_modifier, is_non_food, synonym,
    ClassProfile, FoodClass, TaxonomyError,
};
