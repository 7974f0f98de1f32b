//! The renderer-agnostic interaction layer: polygons, hover highlight,
//! click-to-select, viewport fitting.

use tracing::{debug, info};

use bazaarlens_common::{GeoBounds, MapLayer, SelectedLocation};
use bazaarlens_geo::{GeoDataLoader, LoadedGeoData};

use crate::style::{FeatureStyle, LayerStyle};

/// Events emitted toward the orchestration shell.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Data for the active layer changed (load or layer switch).
    DataChanged {
        layer: MapLayer,
        using_fallback: bool,
    },
    /// The user clicked a feature.
    LocationSelected(SelectedLocation),
}

/// Owns the active layer's data and interaction state. Drawing is someone
/// else's job: renderers read `data()`, `style_for()` and `viewport_bounds()`.
pub struct MapSurface {
    loader: GeoDataLoader,
    style: LayerStyle,
    active_layer: MapLayer,
    data: Option<LoadedGeoData>,
    hovered: Option<usize>,
    viewport: GeoBounds,
}

impl MapSurface {
    pub fn new(loader: GeoDataLoader, style: LayerStyle) -> Self {
        Self {
            loader,
            style,
            active_layer: MapLayer::Area,
            data: None,
            hovered: None,
            viewport: GeoBounds::empty(),
        }
    }

    pub fn active_layer(&self) -> MapLayer {
        self.active_layer
    }

    pub fn data(&self) -> Option<&LoadedGeoData> {
        self.data.as_ref()
    }

    pub fn viewport_bounds(&self) -> GeoBounds {
        self.viewport
    }

    /// Switch the active layer and reload its data. Loads are not
    /// coordinated: the last completed call wins.
    pub async fn set_layer(&mut self, layer: MapLayer) -> MapEvent {
        self.active_layer = layer;
        self.reload().await
    }

    /// Re-fetch the active layer. Replaces data wholesale, clears hover,
    /// and refits the viewport to the new collection's bounds.
    pub async fn reload(&mut self) -> MapEvent {
        let loaded = self.loader.load(self.active_layer).await;
        let event = MapEvent::DataChanged {
            layer: loaded.layer,
            using_fallback: loaded.using_fallback,
        };

        self.viewport = loaded.collection.bounds();
        self.hovered = None;
        self.data = Some(loaded);
        info!(layer = %self.active_layer, "Map data changed, viewport refit");
        event
    }

    /// Pointer entered / left a feature. `None` clears the highlight.
    pub fn hover(&mut self, feature_index: Option<usize>) {
        self.hovered = feature_index;
    }

    /// Style to draw a feature with right now.
    pub fn style_for(&self, feature_index: usize) -> &FeatureStyle {
        if self.hovered == Some(feature_index) {
            &self.style.highlight
        } else {
            &self.style.base
        }
    }

    /// Resolve a click on a feature into a selection. Returns `None` for an
    /// out-of-range index or a feature with no usable geometry.
    pub fn click(&self, feature_index: usize) -> Option<MapEvent> {
        let data = self.data.as_ref()?;
        let feature = data.collection.features.get(feature_index)?;
        let coordinates = feature.representative_point()?;
        let name = feature.display_name();

        debug!(name = name.as_str(), layer = %self.active_layer, "Feature clicked");

        Some(MapEvent::LocationSelected(SelectedLocation {
            name,
            layer: self.active_layer,
            coordinates,
            properties: feature.properties.clone(),
        }))
    }

    /// Linear scan for a feature by resolved display name. Demo drivers use
    /// this in place of pointer hit-testing.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        let data = self.data.as_ref()?;
        data.collection
            .features
            .iter()
            .position(|f| f.display_name() == name)
    }
}
