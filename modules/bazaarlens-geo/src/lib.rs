pub mod feature;
pub mod loader;

pub use feature::{
    display_name, feature_bounds, feature_centroid, FeatureCollection, GeoFeature, Geometry,
    UNKNOWN_LOCATION,
};
pub use loader::{GeoDataLoader, LoadedGeoData};
