//! Similarity scoring between canonical food keys.
//!
//! Drives cross-source matching: two keys above [`MATCH_THRESHOLD`] are
//! treated as the same physical food item.

use std::collections::HashSet;

use crate::canonicalize::GENERIC_KEY;

/// Minimum score for two keys to be considered the same item.
pub const MATCH_THRESHOLD: f64 = 0.5;

/// Score how likely two canonical keys name the same food, in [0, 1].
///
/// Exact equality scores 1.0. Otherwise the score is the larger of
/// token-set Jaccard overlap and a containment score that fires when one
/// key's tokens occur contiguously inside the other's ("salmon" inside
/// "grilled salmon"). The generic low-information key never matches a
/// specific food.
pub fn similar(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a == GENERIC_KEY || b == GENERIC_KEY {
        return 0.0;
    }

    let tokens_a: Vec<&str> = a.split_whitespace().collect();
    let tokens_b: Vec<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    jaccard(&tokens_a, &tokens_b).max(containment(&tokens_a, &tokens_b))
}

/// Word-token Jaccard overlap: |a ∩ b| / |a ∪ b|.
fn jaccard(a: &[&str], b: &[&str]) -> f64 {
    let set_a: HashSet<&str> = a.iter().copied().collect();
    let set_b: HashSet<&str> = b.iter().copied().collect();
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Token-count Dice ratio when the shorter key appears contiguously inside
/// the longer one, 0.0 otherwise. A one-token key inside a two-token key
/// scores 2/3, clearing the match threshold that a raw length ratio would
/// miss.
fn containment(a: &[&str], b: &[&str]) -> f64 {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let contiguous = long.windows(short.len()).any(|window| window == short);
    if contiguous {
        2.0 * short.len() as f64 / (short.len() + long.len()) as f64
    } else {
        0.0
    }
}
