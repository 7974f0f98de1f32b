//! End-to-end pipeline tests: map selection through generation, using the
//! bundled demo data and in-memory generators. No network.

use std::collections::BTreeMap;

use async_trait::async_trait;

use bazaarlens_common::{MapLayer, SelectedLocation, SimulationConfig};
use bazaarlens_engine::{run_generation, AnalysisGenerator, Session, ANALYSIS_FALLBACK};
use bazaarlens_geo::{feature_bounds, GeoDataLoader};
use bazaarlens_map::{LayerStyle, MapEvent, MapSurface};

// ---------------------------------------------------------------------------
// Mock generators
// ---------------------------------------------------------------------------

/// Returns well-formed output for every call.
struct HappyGenerator;

#[async_trait]
impl AnalysisGenerator for HappyGenerator {
    async fn generate_location_analysis(
        &self,
        location: &SelectedLocation,
        config: &SimulationConfig,
    ) -> String {
        format!(
            "## Market analysis\n\nA {} in {} looks promising.",
            config.business_type, location.name
        )
    }

    async fn generate_shop_visualization(
        &self,
        _location: &SelectedLocation,
        _config: &SimulationConfig,
    ) -> Option<String> {
        Some("data:image/png;base64,ZmFrZXBhbm8=".to_string())
    }
}

/// Text succeeds, image comes back empty — the partial-failure case the
/// parallel orchestration must tolerate.
struct TextOnlyGenerator;

#[async_trait]
impl AnalysisGenerator for TextOnlyGenerator {
    async fn generate_location_analysis(
        &self,
        location: &SelectedLocation,
        _config: &SimulationConfig,
    ) -> String {
        format!("Analysis for {}.", location.name)
    }

    async fn generate_shop_visualization(
        &self,
        _location: &SelectedLocation,
        _config: &SimulationConfig,
    ) -> Option<String> {
        None
    }
}

/// Everything fails: both calls degrade to their documented fallbacks.
struct FailingGenerator;

#[async_trait]
impl AnalysisGenerator for FailingGenerator {
    async fn generate_location_analysis(
        &self,
        _location: &SelectedLocation,
        _config: &SimulationConfig,
    ) -> String {
        ANALYSIS_FALLBACK.to_string()
    }

    async fn generate_shop_visualization(
        &self,
        _location: &SelectedLocation,
        _config: &SimulationConfig,
    ) -> Option<String> {
        None
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A surface loaded with the bundled fallback data (the loader points at an
/// unroutable address, so every fetch fails fast).
async fn offline_surface() -> MapSurface {
    let mut surface = MapSurface::new(
        GeoDataLoader::new().with_base_url("http://127.0.0.1:1"),
        LayerStyle::default(),
    );
    let event = surface.set_layer(MapLayer::Area).await;
    assert!(matches!(
        event,
        MapEvent::DataChanged {
            using_fallback: true,
            ..
        }
    ));
    surface
}

fn select_by_name(surface: &MapSurface, name: &str) -> SelectedLocation {
    let index = surface.find_by_name(name).expect("demo locality present");
    match surface.click(index) {
        Some(MapEvent::LocationSelected(selected)) => selected,
        other => panic!("expected a selection, got {other:?}"),
    }
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn connaught_place_bakery_end_to_end() {
    let surface = offline_surface().await;
    let selected = select_by_name(&surface, "Connaught Place");

    assert_eq!(selected.name, "Connaught Place");
    assert_eq!(selected.layer, MapLayer::Area);

    // The representative coordinate sits inside the polygon's bounding box.
    let index = surface.find_by_name("Connaught Place").unwrap();
    let geometry = surface.data().unwrap().collection.features[index]
        .geometry()
        .unwrap();
    assert!(feature_bounds(&geometry).contains(selected.coordinates));

    let mut session = Session::new();
    session.select(selected);
    session.set_config(
        SimulationConfig::builder()
            .business_type("Bakery")
            .architectural_style("Modern Glass")
            .time_of_day("Daytime")
            .build(),
    );

    assert!(run_generation(&mut session, &HappyGenerator).await);
    let result = session.result();
    assert!(!result.loading);
    assert!(result.analysis_markdown.contains("Bakery"));
    assert!(result.analysis_markdown.contains("Connaught Place"));
    assert!(result
        .image_data_uri
        .as_deref()
        .unwrap()
        .starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn image_failure_still_shows_text() {
    let surface = offline_surface().await;
    let mut session = Session::new();
    session.select(select_by_name(&surface, "Hauz Khas Village"));

    assert!(run_generation(&mut session, &TextOnlyGenerator).await);
    let result = session.result();
    assert_eq!(result.analysis_markdown, "Analysis for Hauz Khas Village.");
    assert!(result.image_data_uri.is_none());
    assert!(!result.loading);
}

#[tokio::test]
async fn total_failure_degrades_to_fallback_text() {
    let surface = offline_surface().await;
    let mut session = Session::new();
    session.select(select_by_name(&surface, "Lajpat Nagar"));

    assert!(run_generation(&mut session, &FailingGenerator).await);
    let result = session.result();
    assert_eq!(result.analysis_markdown, ANALYSIS_FALLBACK);
    assert!(result.image_data_uri.is_none());
}

#[tokio::test]
async fn reselecting_and_regenerating_replaces_result() {
    let surface = offline_surface().await;
    let mut session = Session::new();

    session.select(select_by_name(&surface, "Karol Bagh"));
    assert!(run_generation(&mut session, &HappyGenerator).await);
    assert!(session.result().analysis_markdown.contains("Karol Bagh"));

    session.select(select_by_name(&surface, "Chandni Chowk"));
    assert!(run_generation(&mut session, &HappyGenerator).await);
    assert!(session.result().analysis_markdown.contains("Chandni Chowk"));
    assert!(!session.result().analysis_markdown.contains("Karol Bagh"));
}
