//! Cross-source fusion of vision detections and text mentions.
//!
//! Merges detections that refer to the same physical food item regardless of
//! which pipeline produced them, using greedy first-match one-to-one pairing
//! in original order. Detection sets are small (usually under ten per side),
//! so a full assignment algorithm buys nothing here.

use std::collections::BTreeSet;

use food_taxonomy::is_non_food;

use crate::canonicalize::canonicalize;
use crate::similarity::{similar, MATCH_THRESHOLD};
use crate::types::{FusedItem, Origin, RawDetection, SourceTag};

/// Drop detections the recognizer commonly reports that are not food:
/// tableware, containers, empty names. Text mentions are not filtered; the
/// language model is prompted to return foods only.
pub fn filter_non_food(detections: &[RawDetection]) -> Vec<RawDetection> {
    detections
        .iter()
        .filter(|detection| {
            let name = detection.name.trim().to_lowercase();
            !name.is_empty() && !is_non_food(&name)
        })
        .cloned()
        .collect()
}

/// Fuse vision detections with text mentions into one deduplicated list.
///
/// Every input is canonicalized independently. Each vision detection then
/// scans the still-unconsumed text mentions in order and pairs with the
/// first one whose key is equal or scores at least [`MATCH_THRESHOLD`];
/// a paired mention is consumed and cannot match a second detection.
/// Unmatched detections and mentions pass through as single-source items,
/// vision-ordered items first.
///
/// Never fails: empty inputs yield items purely from the other source, or
/// an empty result.
pub fn fuse<S: AsRef<str>>(vision: &[RawDetection], text: &[S]) -> Vec<FusedItem> {
    let canonical_text: Vec<String> = text
        .iter()
        .map(|mention| canonicalize(mention.as_ref()))
        .collect();
    let mut consumed = vec![false; canonical_text.len()];
    let mut fused = Vec::with_capacity(vision.len() + canonical_text.len());

    for detection in vision {
        let key = canonicalize(&detection.name);

        let mut matched = None;
        for (i, candidate) in canonical_text.iter().enumerate() {
            if consumed[i] {
                continue;
            }
            if *candidate == key || similar(&key, candidate) >= MATCH_THRESHOLD {
                matched = Some(i);
                break;
            }
        }

        match matched {
            Some(i) => {
                consumed[i] = true;
                tracing::debug!(
                    vision = %key,
                    text = %canonical_text[i],
                    "merged cross-source detection"
                );
                fused.push(FusedItem {
                    canonical_name: key,
                    sources: BTreeSet::from([SourceTag::Vision, SourceTag::Gpt]),
                    origin: Origin::Both,
                    bbox: detection.bbox,
                });
            }
            None => fused.push(FusedItem {
                canonical_name: key,
                sources: BTreeSet::from([SourceTag::Vision]),
                origin: Origin::Vision,
                bbox: detection.bbox,
            }),
        }
    }

    for (i, key) in canonical_text.into_iter().enumerate() {
        if consumed[i] {
            continue;
        }
        fused.push(FusedItem {
            canonical_name: key,
            sources: BTreeSet::from([SourceTag::Gpt]),
            origin: Origin::Gpt,
            bbox: None,
        });
    }

    fused
}
