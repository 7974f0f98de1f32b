//! Network loader for per-layer GeoJSON, with an embedded fallback set.

use tracing::{info, warn};

use bazaarlens_common::{BazaarlensError, MapLayer};

use crate::feature::FeatureCollection;

/// Bundled polygons for five known Delhi localities, served whenever the
/// network copy is unavailable or empty.
const FALLBACK_GEOJSON: &str = include_str!("../data/delhi_fallback.geojson");

const GEODATA_BASE_URL: &str =
    "https://raw.githubusercontent.com/bazaarlens/delhi-geodata/main";

/// A loaded collection plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedGeoData {
    pub layer: MapLayer,
    pub collection: FeatureCollection,
    /// True when the bundled demo data replaced the network copy.
    pub using_fallback: bool,
}

/// Fetches the GeoJSON collection for a map layer.
///
/// Every failure mode — network error, non-2xx status, unparseable body,
/// or a collection with zero features — resolves to the fallback set.
/// `load` never returns an error.
#[derive(Clone)]
pub struct GeoDataLoader {
    http: reqwest::Client,
    base_url: String,
}

impl Default for GeoDataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoDataLoader {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: GEODATA_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn layer_url(&self, layer: MapLayer) -> String {
        let file = match layer {
            MapLayer::City => "delhi_city.geojson",
            MapLayer::Pincode => "delhi_pincodes.geojson",
            MapLayer::Area => "delhi_areas.geojson",
        };
        format!("{}/{}", self.base_url, file)
    }

    pub async fn load(&self, layer: MapLayer) -> LoadedGeoData {
        match self.fetch(layer).await {
            Ok(collection) if !collection.is_empty() => {
                info!(%layer, features = collection.features.len(), "Loaded layer data");
                LoadedGeoData {
                    layer,
                    collection,
                    using_fallback: false,
                }
            }
            Ok(_) => {
                warn!(%layer, "Fetched collection has zero features, using demo data");
                Self::fallback(layer)
            }
            Err(e) => {
                warn!(%layer, error = %e, "Layer fetch failed, using demo data");
                Self::fallback(layer)
            }
        }
    }

    async fn fetch(&self, layer: MapLayer) -> Result<FeatureCollection, BazaarlensError> {
        let url = self.layer_url(layer);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| BazaarlensError::Fetch(e.to_string()))?;
        if !response.status().is_success() {
            return Err(BazaarlensError::Fetch(format!(
                "geodata fetch returned {}",
                response.status()
            )));
        }
        let body = response
            .text()
            .await
            .map_err(|e| BazaarlensError::Fetch(e.to_string()))?;
        FeatureCollection::parse(&body).map_err(|e| BazaarlensError::Parse(e.to_string()))
    }

    /// The embedded demo collection. Infallible: the bundled JSON is
    /// validated by tests.
    pub fn fallback(layer: MapLayer) -> LoadedGeoData {
        let collection = FeatureCollection::parse(FALLBACK_GEOJSON)
            .unwrap_or_else(|_| FeatureCollection { features: vec![] });
        LoadedGeoData {
            layer,
            collection,
            using_fallback: true,
        }
    }
}
