//! Recipe category classification.
//!
//! The feed's category labels are free text ("Entrees", "Main Entree",
//! "Grain", "Box Lunch Choice 2 Includes Fruit", …). Classification runs an
//! ordered rule table, first match wins:
//!   1. Alternative-meal indicators (box lunch / choice 2 / …)
//!   2. Entree indicators (entree / main)
//!   3. Everything else is a side
//! Alternative rules must come before entree rules: a label like
//! "Box Lunch Main Choice" is an alternative even though it says "main".

/// How a recipe category participates in the menu sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Entree,
    Side,
    Alternative,
}

/// Ordered classification rules: (lowercased substrings, kind).
/// Evaluated top to bottom against the lowercased label; no rule matching
/// means [`CategoryKind::Side`] (grain, fruit, vegetable, milk, condiment…).
const CLASSIFY_RULES: &[(&[&str], CategoryKind)] = &[
    (
        &["box lunch", "choice 2", "choice two", "includes fruit"],
        CategoryKind::Alternative,
    ),
    (&["entree", "main"], CategoryKind::Entree),
];

/// Classify a category label into entree, side, or alternative.
pub fn classify_category(label: &str) -> CategoryKind {
    let lowered = label.to_lowercase();

    for (needles, kind) in CLASSIFY_RULES {
        if needles.iter().any(|needle| lowered.contains(needle)) {
            return *kind;
        }
    }

    CategoryKind::Side
}
