//! Portion estimation from fused items and optional plate geometry.
//!
//! Uses the item's bounding-box-to-plate area ratio when the scene supplies
//! full geometry, and a per-class calibrated default otherwise. Every
//! estimate is clamped to [`MIN_GRAMS`, `MAX_GRAMS`] so pathological
//! geometry (a box larger than the plate) cannot produce absurd values.

use food_taxonomy::{class_profile, classify};

use crate::types::{BBox, Confidence, FusedItem, ImageSize, PortionSource, PortionedItem};

pub const MIN_GRAMS: u32 = 10;
pub const MAX_GRAMS: u32 = 600;

/// Grams assigned to a food covering the entire plate at density factor 1.0.
/// Calibrated to the upper clamp bound.
pub const PLATE_FULL_GRAMS: f64 = 600.0;

/// Half-width of the reported plausible range, as a fraction of the estimate.
const RANGE_FRACTION: f64 = 0.25;

/// Estimate a gram portion for every fused item.
///
/// Geometry is used only when the item has a bounding box and both the plate
/// box and image dimensions were supplied; anything less degrades to the
/// per-class default at low confidence. Never fails.
pub fn estimate_portions(
    items: &[FusedItem],
    plate_bbox: Option<BBox>,
    image: Option<ImageSize>,
) -> Vec<PortionedItem> {
    items
        .iter()
        .map(|item| estimate_portion(item, plate_bbox, image))
        .collect()
}

fn estimate_portion(
    item: &FusedItem,
    plate_bbox: Option<BBox>,
    image: Option<ImageSize>,
) -> PortionedItem {
    let food_class = classify(&item.canonical_name);
    let profile = class_profile(food_class);

    let geometry = match (item.bbox, plate_bbox, image) {
        (Some(bbox), Some(plate), Some(_))
            if plate.area().is_finite() && plate.area() > 0.0 =>
        {
            Some((bbox, plate))
        }
        _ => None,
    };

    let (grams_est, confidence, portion_source) = match geometry {
        Some((bbox, plate)) => {
            let area_ratio = bbox.area() / plate.area();
            let raw = (area_ratio * PLATE_FULL_GRAMS * profile.density_factor).round();
            let clamped = clamp_grams(raw);
            if f64::from(clamped) != raw {
                tracing::debug!(
                    name = %item.canonical_name,
                    raw,
                    clamped,
                    "area-based portion estimate clamped"
                );
            }
            (clamped, Confidence::High, PortionSource::Area)
        }
        None => (
            clamp_grams(f64::from(profile.base_grams)),
            Confidence::Low,
            PortionSource::Base,
        ),
    };

    PortionedItem {
        name: item.canonical_name.clone(),
        grams_est,
        grams_range: portion_range(grams_est),
        confidence,
        food_class,
        source: item.origin,
        portion_source,
    }
}

fn clamp_grams(raw: f64) -> u32 {
    if !raw.is_finite() {
        return MIN_GRAMS;
    }
    (raw as i64).clamp(i64::from(MIN_GRAMS), i64::from(MAX_GRAMS)) as u32
}

/// Plausible bracket around an estimate, kept inside the global bounds and
/// always containing the estimate itself.
fn portion_range(grams: u32) -> (u32, u32) {
    let low = (f64::from(grams) * (1.0 - RANGE_FRACTION)).round() as u32;
    let high = (f64::from(grams) * (1.0 + RANGE_FRACTION)).round() as u32;
    (low.clamp(MIN_GRAMS, grams), high.clamp(grams, MAX_GRAMS))
}
