//! Golden file tests for the scan fusion pipeline.
//!
//! Each case is a JSON file in `tests/fixtures/fusion/curated/` describing a
//! full scan scenario: vision detections, text mentions, optional plate
//! geometry, and the expected portioned items.
//!
//! Test format:
//! ```json
//! {
//!   "vision": [{ "name": "salmon", "source": "object", "score": 0.8, "bbox": {...} }],
//!   "text": ["grilled salmon"],
//!   "plate_bbox": { "x": 20, "y": 30, "width": 500, "height": 400 },
//!   "image": { "width": 800, "height": 600 },
//!   "expected": [
//!     { "name": "salmon", "grams_est": 108, "grams_range": [81, 135],
//!       "confidence": "high", "food_class": "protein", "source": "both",
//!       "portion_source": "area" }
//!   ]
//! }
//! ```

use glob::glob;
use platefuse_core::{
    estimate_portions, filter_non_food, fuse, BBox, ImageSize, PortionedItem, RawDetection,
};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// A test case loaded from a JSON fixture file.
#[derive(Debug, Deserialize)]
struct TestCase {
    #[serde(default)]
    vision: Vec<RawDetection>,
    #[serde(default)]
    text: Vec<String>,
    #[serde(default)]
    plate_bbox: Option<BBox>,
    #[serde(default)]
    image: Option<ImageSize>,
    expected: Vec<Expected>,
}

/// Expected output for one portioned item.
#[derive(Debug, Deserialize, PartialEq, Clone)]
struct Expected {
    name: String,
    grams_est: u32,
    grams_range: (u32, u32),
    confidence: String,
    food_class: String,
    source: String,
    portion_source: String,
}

impl From<&PortionedItem> for Expected {
    fn from(item: &PortionedItem) -> Self {
        Self {
            name: item.name.clone(),
            grams_est: item.grams_est,
            grams_range: item.grams_range,
            confidence: item.confidence.as_str().to_string(),
            food_class: item.food_class.as_str().to_string(),
            source: item.source.as_str().to_string(),
            portion_source: item.portion_source.as_str().to_string(),
        }
    }
}

/// Run the full pipeline on a test case: reject filter, fusion, portioning.
fn run_pipeline(case: &TestCase) -> Vec<Expected> {
    let detections = filter_non_food(&case.vision);
    let fused = fuse(&detections, &case.text);
    estimate_portions(&fused, case.plate_bbox, case.image)
        .iter()
        .map(Expected::from)
        .collect()
}

fn load_test_cases() -> Vec<(String, TestCase)> {
    let fixtures_dir =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/fusion/curated");
    let pattern = fixtures_dir.join("*.json");

    let mut cases = Vec::new();
    for entry in glob(&pattern.to_string_lossy()).expect("Failed to read glob pattern") {
        let path = entry.expect("Failed to read directory entry");
        let name = path.file_stem().unwrap().to_string_lossy().to_string();
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        let case: TestCase = serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
        cases.push((name, case));
    }

    assert!(!cases.is_empty(), "no fixture files found in {}", fixtures_dir.display());
    cases.sort_by(|a, b| a.0.cmp(&b.0));
    cases
}

#[test]
fn golden_fusion_cases() {
    let mut failures = Vec::new();

    for (name, case) in load_test_cases() {
        let actual = run_pipeline(&case);
        if actual != case.expected {
            failures.push(format!(
                "{name}:\n  expected: {:?}\n  actual:   {:?}",
                case.expected, actual
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} golden case(s) failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}
