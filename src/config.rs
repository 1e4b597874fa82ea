//! Client configuration.
//!
//! Field names mirror the JSON config surface consumers already use
//! (camelCase), so a config block can be deserialized straight into
//! [`MenuConfig`]. Everything except the two identifiers has a documented
//! default.

use serde::Deserialize;

/// Extra days requested beyond the display count, absorbing weekend and
/// holiday gaps in the feed. Default for [`MenuConfig::buffer_days`].
pub const BUFFER_DAYS: usize = 7;

/// Configuration for [`MenuClient`](crate::client::MenuClient).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuConfig {
    /// School building identifier. Required.
    pub building_id: String,
    /// District identifier. Required.
    pub district_id: String,
    /// How many schedule days to return.
    pub number_of_days_to_display: usize,
    /// Extra candidate days beyond the display count. Zero disables the
    /// non-empty-day filtering and returns strictly consecutive days.
    pub buffer_days: usize,
    /// Exact-match allow-list of category names. Empty includes everything.
    pub recipe_categories_to_include: Vec<String>,
    /// Separator between entree choices.
    pub entree_joiner: String,
    /// Prefix sentence segments with "Entrees: " / "Sides: ".
    pub show_category_labels: bool,
    pub use_oxford_comma: bool,
    /// Label template for alternative meals; supports `{categoryName}`.
    /// Empty means a plain "Or " prefix.
    pub alternative_label: String,
    /// Verbose diagnostic logging.
    pub debug: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            building_id: String::new(),
            district_id: String::new(),
            number_of_days_to_display: 5,
            buffer_days: BUFFER_DAYS,
            recipe_categories_to_include: vec![
                "Main Entree".to_string(),
                "Entrees".to_string(),
                "Grain".to_string(),
            ],
            entree_joiner: " or ".to_string(),
            show_category_labels: false,
            use_oxford_comma: true,
            alternative_label: String::new(),
            debug: false,
        }
    }
}

impl MenuConfig {
    /// Minimal config: the two required identifiers plus defaults.
    pub fn new(building_id: impl Into<String>, district_id: impl Into<String>) -> Self {
        Self {
            building_id: building_id.into(),
            district_id: district_id.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert_eq!(config.number_of_days_to_display, 5);
        assert_eq!(config.buffer_days, 7);
        assert_eq!(
            config.recipe_categories_to_include,
            vec!["Main Entree", "Entrees", "Grain"]
        );
        assert_eq!(config.entree_joiner, " or ");
        assert!(!config.show_category_labels);
        assert!(config.use_oxford_comma);
        assert_eq!(config.alternative_label, "");
        assert!(!config.debug);
    }

    #[test]
    fn test_deserialize_camel_case_config_block() {
        let json = r#"{
            "buildingId": "23125610-cbbc-eb11-a2cb-82fe13669c55",
            "districtId": "93f76ff0-2eb7-eb11-a2c4-e816644282bd",
            "numberOfDaysToDisplay": 3,
            "bufferDays": 0,
            "recipeCategoriesToInclude": [],
            "showCategoryLabels": true,
            "debug": true
        }"#;

        let config: MenuConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.building_id, "23125610-cbbc-eb11-a2cb-82fe13669c55");
        assert_eq!(config.number_of_days_to_display, 3);
        assert_eq!(config.buffer_days, 0);
        assert!(config.recipe_categories_to_include.is_empty());
        assert!(config.show_category_labels);
        // Unspecified fields keep their defaults.
        assert_eq!(config.entree_joiner, " or ");
        assert!(config.use_oxford_comma);
    }
}
