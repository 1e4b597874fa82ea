//! Normalization walk over the raw FamilyMenu payload.
//!
//! Isolates the rest of the crate from upstream schema drift: anything
//! missing or misshapen degrades to diagnostics plus a partial result,
//! never an error.

use crate::feed::FamilyMenuResponse;
use crate::sentence::{format_menu, FormatOptions, MenuCategory};

/// Which of the two meal buckets a serving session maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealType {
    Breakfast,
    Lunch,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
        }
    }

    /// Bucket a serving-session label. The feed uses several labels
    /// ("Breakfast", "Seamless Summer Breakfast", "Lunch", …); anything
    /// mentioning breakfast is breakfast, everything else is lunch.
    pub fn from_session_label(label: &str) -> Self {
        if label.to_lowercase().contains("breakfast") {
            MealType::Breakfast
        } else {
            MealType::Lunch
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One meal on one date, already formatted into a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDayMenu {
    /// Upstream date string, passed through verbatim.
    pub date: String,
    pub meal: MealType,
    pub sentence: String,
}

/// Walk the raw payload into per-session lists of `(date, meal, sentence)`.
///
/// Returns one inner list per serving session, days in upstream order.
/// `categories_to_include` is an exact-match allow-list on category names;
/// empty disables filtering. `debug` widens the diagnostics, it never
/// changes the result.
pub fn extract_menus_by_date(
    payload: &FamilyMenuResponse,
    categories_to_include: &[String],
    format: &FormatOptions,
    debug: bool,
) -> Vec<Vec<ExtractedDayMenu>> {
    let Some(sessions) = payload.family_menu_sessions.as_ref() else {
        if debug {
            log::debug!("FamilyMenu response did not contain the expected FamilyMenuSessions data");
        } else {
            log::warn!(
                "FamilyMenu response did not contain the expected data. \
                 Enable the 'debug' config option for verbose logs"
            );
        }
        return Vec::new();
    };

    let mut menus: Vec<Vec<ExtractedDayMenu>> = Vec::new();

    for session in sessions {
        let meal = MealType::from_session_label(&session.serving_session);
        let mut days_out: Vec<ExtractedDayMenu> = Vec::new();

        let Some(plan) = session.menu_plans.first() else {
            log::debug!(
                "Serving session {:?} has no menu plans, skipping",
                session.serving_session
            );
            menus.push(days_out);
            continue;
        };

        for day in &plan.days {
            if !day.has_meal_data() {
                if debug {
                    log::debug!(
                        "No meal data found for {}. Expected MenuMeals[].RecipeCategories[].Recipes",
                        day.date
                    );
                }
                continue;
            }

            // Track every category label seen and which ones the allow-list
            // drops, for troubleshooting odd-looking menus.
            let mut seen: Vec<String> = Vec::new();
            let mut filtered_out: Vec<String> = Vec::new();

            let categories: Vec<MenuCategory> = day
                .menu_meals
                .iter()
                .flat_map(|meal_line| meal_line.recipe_categories.iter())
                .filter(|category| {
                    if !seen.contains(&category.category_name) {
                        seen.push(category.category_name.clone());
                    }
                    let included = categories_to_include.is_empty()
                        || categories_to_include.contains(&category.category_name);
                    if !included && !filtered_out.contains(&category.category_name) {
                        filtered_out.push(category.category_name.clone());
                    }
                    included
                })
                .map(|category| MenuCategory {
                    name: category.category_name.clone(),
                    recipes: category
                        .recipes
                        .iter()
                        .map(|recipe| recipe.recipe_name.clone())
                        .collect(),
                })
                .collect();

            if debug {
                let mut message = format!(
                    "The {} menu for {} contains the following categories: {}",
                    meal,
                    day.date,
                    seen.join(", ")
                );
                if !filtered_out.is_empty() {
                    message.push_str(&format!(
                        ", but {} were filtered out by recipeCategoriesToInclude",
                        filtered_out.join(", ")
                    ));
                }
                log::debug!("{}", message);
            }

            days_out.push(ExtractedDayMenu {
                date: day.date.clone(),
                meal,
                sentence: format_menu(&categories, format),
            });
        }

        menus.push(days_out);
    }

    if debug {
        log::debug!("Menus extracted from the FamilyMenu response: {:?}", menus);
    }

    menus
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: serde_json::Value) -> FamilyMenuResponse {
        serde_json::from_value(json).unwrap()
    }

    fn two_session_payload() -> FamilyMenuResponse {
        payload(serde_json::json!({
            "FamilyMenuSessions": [
                {
                    "ServingSession": "Breakfast",
                    "MenuPlans": [{
                        "Days": [
                            {
                                "Date": "1-18-2023",
                                "MenuMeals": [{
                                    "RecipeCategories": [
                                        {"CategoryName": "Entrees", "Recipes": [
                                            {"RecipeName": "Pancakes"},
                                            {"RecipeName": "with Syrup"}
                                        ]},
                                        {"CategoryName": "Fruit", "Recipes": [
                                            {"RecipeName": "Apple"}
                                        ]}
                                    ]
                                }]
                            },
                            {
                                "Date": "1-19-2023",
                                "MenuMeals": [{
                                    "RecipeCategories": [
                                        {"CategoryName": "Entrees", "Recipes": [
                                            {"RecipeName": "Cereal"}
                                        ]}
                                    ]
                                }]
                            }
                        ]
                    }]
                },
                {
                    "ServingSession": "Seamless Summer Lunch",
                    "MenuPlans": [{
                        "Days": [
                            {
                                "Date": "1-18-2023",
                                "MenuMeals": [{
                                    "RecipeCategories": [
                                        {"CategoryName": "Entrees", "Recipes": [
                                            {"RecipeName": "Hamburger"}
                                        ]}
                                    ]
                                }]
                            }
                        ]
                    }]
                }
            ]
        }))
    }

    #[test]
    fn test_sessions_bucket_into_breakfast_and_lunch() {
        let menus =
            extract_menus_by_date(&two_session_payload(), &[], &FormatOptions::default(), false);

        assert_eq!(menus.len(), 2);
        assert_eq!(menus[0].len(), 2);
        assert!(menus[0].iter().all(|m| m.meal == MealType::Breakfast));
        assert_eq!(menus[1].len(), 1);
        assert_eq!(menus[1][0].meal, MealType::Lunch);
    }

    #[test]
    fn test_sentences_are_formatted_per_day() {
        let menus =
            extract_menus_by_date(&two_session_payload(), &[], &FormatOptions::default(), false);

        assert_eq!(menus[0][0].date, "1-18-2023");
        assert_eq!(menus[0][0].sentence, "Pancakes with Syrup with Apple.");
        assert_eq!(menus[0][1].sentence, "Cereal.");
        assert_eq!(menus[1][0].sentence, "Hamburger.");
    }

    #[test]
    fn test_allow_list_filters_categories() {
        let allow = vec!["Entrees".to_string()];
        let menus =
            extract_menus_by_date(&two_session_payload(), &allow, &FormatOptions::default(), true);

        // Fruit is dropped, so the breakfast sentence loses the side.
        assert_eq!(menus[0][0].sentence, "Pancakes with Syrup.");
    }

    #[test]
    fn test_missing_top_level_collection_yields_empty() {
        let resp = payload(serde_json::json!({"SomethingElse": true}));
        let menus = extract_menus_by_date(&resp, &[], &FormatOptions::default(), false);
        assert!(menus.is_empty());
    }

    #[test]
    fn test_day_without_meal_data_is_skipped() {
        let resp = payload(serde_json::json!({
            "FamilyMenuSessions": [{
                "ServingSession": "Lunch",
                "MenuPlans": [{
                    "Days": [
                        {"Date": "1-18-2023", "MenuMeals": []},
                        {
                            "Date": "1-19-2023",
                            "MenuMeals": [{
                                "RecipeCategories": [
                                    {"CategoryName": "Grain", "Recipes": [
                                        {"RecipeName": "Roll"}
                                    ]}
                                ]
                            }]
                        }
                    ]
                }]
            }]
        }));

        let menus = extract_menus_by_date(&resp, &[], &FormatOptions::default(), true);
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].len(), 1);
        assert_eq!(menus[0][0].date, "1-19-2023");
    }

    #[test]
    fn test_session_without_menu_plans_contributes_empty_list() {
        let resp = payload(serde_json::json!({
            "FamilyMenuSessions": [{"ServingSession": "Lunch", "MenuPlans": []}]
        }));

        let menus = extract_menus_by_date(&resp, &[], &FormatOptions::default(), false);
        assert_eq!(menus.len(), 1);
        assert!(menus[0].is_empty());
    }

    #[test]
    fn test_meal_type_from_session_label() {
        assert_eq!(
            MealType::from_session_label("Seamless Summer Breakfast"),
            MealType::Breakfast
        );
        assert_eq!(MealType::from_session_label("BREAKFAST"), MealType::Breakfast);
        assert_eq!(MealType::from_session_label("Lunch"), MealType::Lunch);
        assert_eq!(MealType::from_session_label(""), MealType::Lunch);
    }
}
