//! Food-name canonicalization.
//!
//! Reduces a raw surface string ("Grilled Chicken Breast", "cherry tomatoes")
//! to a canonical food key ("chicken", "tomato") used as the join key for
//! deduplication and classification. Pure and idempotent: canonicalizing a
//! canonical key returns it unchanged.

use food_taxonomy::{irregular_singular, is_compound, is_modifier, synonym};

/// Canonical key for inputs that carry no food identity at all (empty
/// strings, bare modifier words, the recognizer's generic "food" label).
/// Defined to never similarity-match a specific food key.
pub const GENERIC_KEY: &str = "food";

/// Canonicalize a raw food name.
pub fn canonicalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    if tokens.is_empty() {
        return GENERIC_KEY.to_string();
    }

    // Compound identities may contain tokens that double as modifiers
    // ("green bean", "hash brown"), so scan for them before any stripping,
    // in both surface and singular form.
    if let Some(compound) = find_compound(&tokens) {
        return compound;
    }
    let singular_surface: Vec<String> = tokens.iter().map(|token| singularize(token)).collect();
    if let Some(compound) = find_compound_owned(&singular_surface) {
        return compound;
    }

    let content: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|token| !is_modifier(token))
        .collect();
    if content.is_empty() {
        return GENERIC_KEY.to_string();
    }

    // Stripping can make compound tokens adjacent, so scan again.
    if let Some(compound) = find_compound(&content) {
        return compound;
    }

    let singular: Vec<String> = content.iter().map(|token| singularize(token)).collect();
    if let Some(compound) = find_compound_owned(&singular) {
        return compound;
    }

    // Singularization can surface a modifier ("cherries" -> "cherry");
    // filter once more so the output is a fixed point.
    let kept: Vec<&str> = singular
        .iter()
        .map(String::as_str)
        .filter(|token| !is_modifier(token))
        .collect();
    if kept.is_empty() {
        return GENERIC_KEY.to_string();
    }

    let phrase = kept.join(" ");
    match synonym(&phrase) {
        Some(canonical) => canonical.to_string(),
        None => phrase,
    }
}

/// Scan the token sequence for a known compound identity, widest window
/// first, leftmost on ties.
fn find_compound(tokens: &[&str]) -> Option<String> {
    for width in (2..=tokens.len()).rev() {
        for window in tokens.windows(width) {
            let phrase = window.join(" ");
            if is_compound(&phrase) {
                return Some(phrase);
            }
        }
    }
    None
}

fn find_compound_owned(tokens: &[String]) -> Option<String> {
    let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
    find_compound(&refs)
}

/// Singularize one token: irregular table first, then a guarded trailing-`s`
/// strip. Words ending in `ss`/`us`/`is` keep their suffix ("asparagus",
/// "swiss", "hummus" are not plurals).
fn singularize(token: &str) -> String {
    if let Some(singular) = irregular_singular(token) {
        return singular.to_string();
    }
    if token.len() > 3
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        return token[..token.len() - 1].to_string();
    }
    token.to_string()
}
