//! GeoJSON feature collections with heterogeneous property keys.
//!
//! Upstream datasets disagree on how a feature is named (`name`, `Name`,
//! `pin_code`, `locality`, ...), so display-name lookup is priority-ordered
//! rather than schema-driven.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::warn;

use bazaarlens_common::{GeoBounds, GeoPoint};

/// Display name used when no known property key carries a string value.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Property keys checked for a display name, highest priority first.
const NAME_KEYS: &[&str] = &[
    "name", "Name", "NAME", "pin_code", "pincode", "Pincode", "area", "Area", "AREA", "locality",
];

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<GeoFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoFeature {
    #[serde(default)]
    pub properties: BTreeMap<String, serde_json::Value>,
    /// Raw geometry. Parsed lazily via [`GeoFeature::geometry`] so one
    /// unsupported geometry type does not poison the whole collection.
    #[serde(rename = "geometry", default)]
    raw_geometry: serde_json::Value,
}

/// The geometry kinds the map layer actually draws.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(GeoPoint),
    /// Outer ring plus holes, each a closed ring of points.
    Polygon(Vec<Vec<GeoPoint>>),
    MultiPolygon(Vec<Vec<Vec<GeoPoint>>>),
}

impl FeatureCollection {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Bounds of every parseable geometry in the collection. Empty bounds
    /// when nothing parsed.
    pub fn bounds(&self) -> GeoBounds {
        let mut bounds = GeoBounds::empty();
        for feature in &self.features {
            if let Some(geometry) = feature.geometry() {
                bounds.extend_bounds(&feature_bounds(&geometry));
            }
        }
        bounds
    }
}

impl GeoFeature {
    pub fn geometry(&self) -> Option<Geometry> {
        parse_geometry(&self.raw_geometry)
    }

    /// Resolved display name per the priority key list.
    pub fn display_name(&self) -> String {
        display_name(&self.properties)
    }

    /// Representative coordinate: the point itself for Point geometries,
    /// the bounding-box centroid otherwise.
    pub fn representative_point(&self) -> Option<GeoPoint> {
        self.geometry().map(|g| feature_centroid(&g))
    }
}

/// Resolve a display name from feature properties using the priority order
/// name → Name → NAME → pin_code → pincode → Pincode → area → Area → AREA →
/// locality. Non-string values are skipped.
pub fn display_name(properties: &BTreeMap<String, serde_json::Value>) -> String {
    for key in NAME_KEYS {
        if let Some(serde_json::Value::String(s)) = properties.get(*key) {
            if !s.is_empty() {
                return s.clone();
            }
        }
    }
    UNKNOWN_LOCATION.to_string()
}

/// Bounding box of a geometry.
pub fn feature_bounds(geometry: &Geometry) -> GeoBounds {
    let mut bounds = GeoBounds::empty();
    match geometry {
        Geometry::Point(p) => bounds.extend(*p),
        Geometry::Polygon(rings) => {
            for ring in rings {
                for p in ring {
                    bounds.extend(*p);
                }
            }
        }
        Geometry::MultiPolygon(polygons) => {
            for rings in polygons {
                for ring in rings {
                    for p in ring {
                        bounds.extend(*p);
                    }
                }
            }
        }
    }
    bounds
}

/// Representative coordinate for a geometry: the point itself, or the
/// bounding-box centroid for polygon kinds.
pub fn feature_centroid(geometry: &Geometry) -> GeoPoint {
    match geometry {
        Geometry::Point(p) => *p,
        _ => feature_bounds(geometry).center(),
    }
}

fn parse_geometry(value: &serde_json::Value) -> Option<Geometry> {
    let kind = value.get("type")?.as_str()?;
    let coordinates = value.get("coordinates")?;
    match kind {
        "Point" => parse_position(coordinates).map(Geometry::Point),
        "Polygon" => parse_rings(coordinates).map(Geometry::Polygon),
        "MultiPolygon" => {
            let polygons: Option<Vec<_>> =
                coordinates.as_array()?.iter().map(parse_rings).collect();
            polygons.map(Geometry::MultiPolygon)
        }
        other => {
            warn!(geometry_type = other, "Skipping unsupported geometry type");
            None
        }
    }
}

fn parse_rings(value: &serde_json::Value) -> Option<Vec<Vec<GeoPoint>>> {
    value
        .as_array()?
        .iter()
        .map(|ring| {
            ring.as_array()?
                .iter()
                .map(parse_position)
                .collect::<Option<Vec<_>>>()
        })
        .collect()
}

/// GeoJSON positions are `[lng, lat, ...]`; trailing elements are ignored.
fn parse_position(value: &serde_json::Value) -> Option<GeoPoint> {
    let coords = value.as_array()?;
    let lng = coords.first()?.as_f64()?;
    let lat = coords.get(1)?.as_f64()?;
    Some(GeoPoint::new(lat, lng))
}
