use std::collections::BTreeSet;

use food_taxonomy::FoodClass;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Pixel dimensions of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

/// Which recognizer feature produced a vision detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionSource {
    Object,
    Label,
}

/// A detection produced by the image-recognition collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    pub name: String,
    pub source: DetectionSource,
    /// Recognizer confidence in [0, 1]. Carried for forward compatibility;
    /// not used for matching or portioning.
    pub score: f32,
    /// Pixel bounding box. Label detections have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BBox>,
}

/// Which pipeline contributed evidence for a fused item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTag {
    Vision,
    Gpt,
}

/// Provenance of a fused item, derived from its source tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Vision,
    Gpt,
    Both,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Vision => "vision",
            Origin::Gpt => "gpt",
            Origin::Both => "both",
        }
    }
}

/// One physical food item, merged across detection sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedItem {
    pub canonical_name: String,
    /// Never empty; `origin` is `Both` iff both tags are present.
    pub sources: BTreeSet<SourceTag>,
    pub origin: Origin,
    /// Present iff a vision detection with a bounding box contributed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BBox>,
}

/// Confidence tier of a portion estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Low => "low",
        }
    }
}

/// How a gram estimate was produced: plate-area geometry or a per-class default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortionSource {
    Area,
    Base,
}

impl PortionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortionSource::Area => "area",
            PortionSource::Base => "base",
        }
    }
}

/// A fused item with its estimated portion, ready for downstream review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionedItem {
    pub name: String,
    /// Always within [MIN_GRAMS, MAX_GRAMS].
    pub grams_est: u32,
    /// Plausible bracket around the estimate, clamped to the same bounds.
    pub grams_range: (u32, u32),
    pub confidence: Confidence,
    pub food_class: FoodClass,
    pub source: Origin,
    pub portion_source: PortionSource,
}
