//! Raw FamilyMenu API response types.
//!
//! The upstream feed changes shape without warning, so every field is
//! drift-tolerant: absent collections deserialize to empty, absent strings
//! to "". Only the top-level `FamilyMenuSessions` key stays an `Option`,
//! because the extractor tells "key missing" apart from "no sessions".

use serde::Deserialize;

/// Response body of `GET /FamilyMenu`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FamilyMenuResponse {
    #[serde(default)]
    pub family_menu_sessions: Option<Vec<MenuSession>>,
}

/// One serving session: "Breakfast", "Lunch", "Seamless Summer Lunch", …
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MenuSession {
    #[serde(default)]
    pub serving_session: String,
    #[serde(default)]
    pub menu_plans: Vec<MenuPlan>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MenuPlan {
    #[serde(default)]
    pub days: Vec<MenuDay>,
}

/// One calendar day within a menu plan.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MenuDay {
    /// Upstream date string, typically unpadded `M-D-YYYY`. Not guaranteed
    /// parseable; consumers parse best-effort.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub menu_meals: Vec<MenuMeal>,
}

impl MenuDay {
    /// Whether the day carries any actual recipe data.
    ///
    /// Probes first meal line → first category → first recipe, the minimal
    /// structure the extractor needs. Days failing this are skipped.
    pub fn has_meal_data(&self) -> bool {
        self.menu_meals
            .first()
            .and_then(|meal| meal.recipe_categories.first())
            .and_then(|category| category.recipes.first())
            .is_some()
    }
}

/// One meal line (the feed groups categories under named lines).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MenuMeal {
    #[serde(default)]
    pub recipe_categories: Vec<RecipeCategory>,
}

/// A labeled group of dishes ("Grain", "Entrees", …). Labels are not
/// guaranteed unique within a day; duplicates stay separate entries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeCategory {
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recipe {
    #[serde(default)]
    pub recipe_name: String,
}
