use serde::{Deserialize, Serialize};

/// Stroke/fill styling for one polygon. Plain data passed at construction —
/// no renderer-global defaults are mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStyle {
    pub stroke_color: String,
    pub stroke_weight: f32,
    pub fill_color: String,
    pub fill_opacity: f32,
}

/// Base and hover-highlight styles for a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    pub base: FeatureStyle,
    pub highlight: FeatureStyle,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            base: FeatureStyle {
                stroke_color: "#1d4ed8".to_string(),
                stroke_weight: 1.5,
                fill_color: "#3b82f6".to_string(),
                fill_opacity: 0.18,
            },
            highlight: FeatureStyle {
                stroke_color: "#b45309".to_string(),
                stroke_weight: 2.5,
                fill_color: "#f59e0b".to_string(),
                fill_opacity: 0.35,
            },
        }
    }
}
