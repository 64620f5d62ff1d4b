//! Multi-source food-detection fusion and portion estimation.
//!
//! Given detections from an image recognizer and food names extracted by a
//! language model reading the same scene, this crate normalizes every name
//! to a canonical food identity, merges detections that refer to the same
//! physical item, classifies each item into a coarse nutrition category, and
//! estimates a gram portion — geometric when plate context is available,
//! calibrated default otherwise.
//!
//! The engine is a pure, synchronous transformation: no I/O, no shared
//! mutable state beyond read-only lookup tables, and no failure modes for
//! malformed-but-type-valid input. Hosts run it per scan request; calls are
//! independently safe to issue concurrently.
//!
//! ```
//! use platefuse_core::{estimate_portions, fuse, DetectionSource, RawDetection};
//!
//! let vision = vec![RawDetection {
//!     name: "salmon".into(),
//!     source: DetectionSource::Object,
//!     score: 0.8,
//!     bbox: None,
//! }];
//! let fused = fuse(&vision, &["grilled salmon", "asparagus spears"]);
//! let portions = estimate_portions(&fused, None, None);
//! assert_eq!(portions.len(), 2);
//! ```

pub mod canonicalize;
pub mod fuse;
pub mod portion;
pub mod similarity;
pub mod types;

pub use canonicalize::{canonicalize, GENERIC_KEY};
pub use fuse::{filter_non_food, fuse};
pub use portion::{estimate_portions, MAX_GRAMS, MIN_GRAMS, PLATE_FULL_GRAMS};
pub use similarity::{similar, MATCH_THRESHOLD};
pub use types::{
    BBox, Confidence, DetectionSource, FusedItem, ImageSize, Origin, PortionSource, PortionedItem,
    RawDetection, SourceTag,
};
