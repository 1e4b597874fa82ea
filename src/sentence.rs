//! Menu sentence builder.
//!
//! Turns one day's recipe categories into a single natural-language sentence:
//! "Chicken Tenders or Fish Sticks with Brown Rice, Green Beans, and Carrots.
//! Or PBJ Sandwich and String Cheese."

use crate::classify::{classify_category, CategoryKind};
use crate::grammar::{join_with_conjunction, merge_with_items};

/// Formatting knobs for [`format_menu`]. Field-by-field mirror of the
/// user-facing config options.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Separator between entree choices. Usually " or ".
    pub entree_joiner: String,
    /// Prefix segments with "Entrees: " / "Sides: " instead of prose.
    pub show_category_labels: bool,
    /// Comma before the final conjunction in lists of three or more.
    pub use_oxford_comma: bool,
    /// Label template for alternative-meal segments. Supports a
    /// `{categoryName}` placeholder; empty means a plain "Or " prefix.
    pub alternative_label: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            entree_joiner: " or ".to_string(),
            show_category_labels: false,
            use_oxford_comma: true,
            alternative_label: String::new(),
        }
    }
}

/// One recipe category from the feed, reduced to its label and recipe names.
#[derive(Debug, Clone)]
pub struct MenuCategory {
    pub name: String,
    pub recipes: Vec<String>,
}

/// Compose classified categories into one formatted sentence.
///
/// Entrees are flattened across categories and joined with the entree
/// joiner. Sides are flattened and conjunction-joined with "and", prefixed
/// "with " when entrees precede them. Each alternative category stays its
/// own segment, appended after a period. The result always ends with a
/// single period; with no input it is just ".".
pub fn format_menu(categories: &[MenuCategory], options: &FormatOptions) -> String {
    let mut entrees: Vec<String> = Vec::new();
    let mut sides: Vec<String> = Vec::new();
    let mut alternatives: Vec<(String, Vec<String>)> = Vec::new();
    let mut entree_category_count = 0usize;
    let mut side_category_count = 0usize;

    // Modifier merging happens per category, before flattening mixes
    // recipes from different categories together.
    for category in categories {
        let merged = merge_with_items(&category.recipes);
        match classify_category(&category.name) {
            CategoryKind::Entree => {
                entree_category_count += 1;
                entrees.extend(merged);
            }
            CategoryKind::Side => {
                side_category_count += 1;
                sides.extend(merged);
            }
            CategoryKind::Alternative => {
                alternatives.push((category.name.clone(), merged));
            }
        }
    }

    let mut main_parts: Vec<String> = Vec::new();

    if entree_category_count > 0 {
        let mut entrees_text = entrees.join(&options.entree_joiner);
        if options.show_category_labels {
            entrees_text = format!("Entrees: {}", entrees_text);
        }
        main_parts.push(entrees_text);
    }

    if side_category_count > 0 {
        let mut sides_text = join_with_conjunction(&sides, "and", options.use_oxford_comma);
        if options.show_category_labels {
            sides_text = format!("Sides: {}", sides_text);
        } else if entree_category_count > 0 {
            // Grammatical subordination: "Dish A or Dish B with Rice and Corn"
            sides_text = format!("with {}", sides_text);
        }
        main_parts.push(sides_text);
    }

    let alternative_parts: Vec<String> = alternatives
        .iter()
        .map(|(category_name, recipes)| {
            let items_text = join_with_conjunction(recipes, "and", options.use_oxford_comma);
            if options.alternative_label.is_empty() {
                format!("Or {}", items_text)
            } else {
                let label = options.alternative_label.replace("{categoryName}", category_name);
                format!("{} {}", label, items_text)
            }
        })
        .collect();

    let mut result = main_parts.join(" ");
    if !alternative_parts.is_empty() {
        result.push_str(". ");
        result.push_str(&alternative_parts.join(". "));
    }
    result.push('.');

    result
}
