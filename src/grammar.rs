//! English list grammar: conjunction joining and "with …" modifier folding.
//!
//! Pure string helpers used by the sentence builder. No feed types leak in
//! here; everything operates on plain recipe-name strings.

/// Join items with commas and a final conjunction ("and"/"or").
///
/// `oxford_comma` controls the comma before the conjunction in lists of
/// three or more: `"A, B, and C"` vs `"A, B and C"`.
pub fn join_with_conjunction(items: &[String], conjunction: &str, oxford_comma: bool) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} {} {}", first, conjunction, second),
        [all_but_last @ .., last] => {
            let comma = if oxford_comma { "," } else { "" };
            format!(
                "{}{} {} {}",
                all_but_last.join(", "),
                comma,
                conjunction,
                last
            )
        }
    }
}

/// Fold "with …" continuation items into the preceding recipe name.
///
/// The feed lists condiments and sides of a dish as separate entries whose
/// names start with "with" ("Pizza", "with Marinara Sauce"). Those entries
/// are appended to the previous output item, original casing and whitespace
/// preserved, separated by a single space. Consecutive "with" items chain
/// onto the same parent. A leading "with" item has no parent and is kept
/// as its own entry.
pub fn merge_with_items(recipes: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();

    for recipe in recipes {
        let is_with_item = recipe.trim().to_lowercase().starts_with("with ");

        match merged.last_mut() {
            Some(previous) if is_with_item => {
                previous.push(' ');
                previous.push_str(recipe);
            }
            _ => merged.push(recipe.clone()),
        }
    }

    merged
}
