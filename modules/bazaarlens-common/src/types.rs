use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::geo::GeoPoint;

// --- Map Layers ---

/// The administrative granularity the map is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapLayer {
    City,
    Pincode,
    Area,
}

impl std::fmt::Display for MapLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapLayer::City => write!(f, "City"),
            MapLayer::Pincode => write!(f, "Pincode"),
            MapLayer::Area => write!(f, "Area"),
        }
    }
}

// --- Selection ---

/// The location the user last clicked. Replaced wholesale on each click;
/// no history is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedLocation {
    pub name: String,
    pub layer: MapLayer,
    pub coordinates: GeoPoint,
    /// Raw feature properties, kept for display and prompt context.
    pub properties: BTreeMap<String, serde_json::Value>,
}

// --- Simulation Config ---

/// Allowed business types, as offered by the configuration panel.
pub const BUSINESS_TYPES: &[&str] = &[
    "Bakery",
    "Cafe",
    "Bookstore",
    "Clothing Boutique",
    "Electronics Store",
    "Grocery Store",
    "Jewellery Shop",
    "Restaurant",
];

/// Allowed architectural styles.
pub const ARCHITECTURAL_STYLES: &[&str] = &[
    "Modern Glass",
    "Colonial Heritage",
    "Mughal Revival",
    "Art Deco",
    "Minimalist Concrete",
    "Traditional Haveli",
];

/// Allowed times of day.
pub const TIMES_OF_DAY: &[&str] = &["Daytime", "Golden Hour", "Night"];

/// User-chosen simulation parameters. Free strings constrained only by the
/// option sets above; there is no further validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct SimulationConfig {
    #[builder(setter(into))]
    pub business_type: String,
    #[builder(setter(into))]
    pub architectural_style: String,
    #[builder(setter(into))]
    pub time_of_day: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            business_type: "Bakery".to_string(),
            architectural_style: "Modern Glass".to_string(),
            time_of_day: "Daytime".to_string(),
        }
    }
}

// --- Analysis Result ---

/// Output of one generation pass. Reset to loading at generation start and
/// populated atomically when both AI calls settle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analysis_markdown: String,
    /// `data:<mime>;base64,<payload>` when the image call returned an inline
    /// payload, `None` otherwise.
    pub image_data_uri: Option<String>,
    pub loading: bool,
}

impl AnalysisResult {
    /// The state shown while a generation is in flight.
    pub fn pending() -> Self {
        Self {
            analysis_markdown: String::new(),
            image_data_uri: None,
            loading: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_config_builder() {
        let config = SimulationConfig::builder()
            .business_type("Cafe")
            .architectural_style("Art Deco")
            .time_of_day("Night")
            .build();
        assert_eq!(config.business_type, "Cafe");
        assert_eq!(config.time_of_day, "Night");
    }

    #[test]
    fn default_config_matches_initial_ui_state() {
        let config = SimulationConfig::default();
        assert_eq!(config.business_type, "Bakery");
        assert_eq!(config.architectural_style, "Modern Glass");
        assert_eq!(config.time_of_day, "Daytime");
        assert!(BUSINESS_TYPES.contains(&config.business_type.as_str()));
        assert!(ARCHITECTURAL_STYLES.contains(&config.architectural_style.as_str()));
        assert!(TIMES_OF_DAY.contains(&config.time_of_day.as_str()));
    }

    #[test]
    fn pending_result_is_loading_and_empty() {
        let r = AnalysisResult::pending();
        assert!(r.loading);
        assert!(r.analysis_markdown.is_empty());
        assert!(r.image_data_uri.is_none());
    }
}
