//! Scripted demo driver: select a Delhi locality, generate the market
//! analysis and storefront panorama, then orbit the panorama viewer.

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bazaarlens_common::{Config, MapLayer, SimulationConfig};
use bazaarlens_engine::{run_generation, GeminiGenerator, Session};
use bazaarlens_geo::GeoDataLoader;
use bazaarlens_map::{street_view_url, LayerStyle, MapEvent, MapSurface, TileSource};
use bazaarlens_pano::{PanoramaViewer, Viewport};
use gemini_client::Gemini;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("bazaarlens=info".parse()?))
        .init();

    info!("Bazaarlens demo starting...");

    let config = Config::from_env();
    config.log_redacted();

    // AI generator: degrade rather than crash when the credential is absent.
    let generator = match &config.gemini_api_key {
        Some(key) => {
            let mut client = Gemini::new(key);
            if let Some(base) = &config.gemini_base_url {
                client = client.with_base_url(base);
            }
            GeminiGenerator::new(client)
        }
        None => {
            warn!("GEMINI_API_KEY not set, AI output degrades to fallbacks");
            GeminiGenerator::degraded()
        }
    };

    // Map surface over the Area layer; falls back to the bundled demo data
    // when the geodata endpoint is unreachable.
    let mut loader = GeoDataLoader::new();
    if let Some(base) = &config.geodata_base_url {
        loader = loader.with_base_url(base);
    }
    let mut surface = MapSurface::new(loader, LayerStyle::default());

    let tiles = TileSource::openstreetmap();
    info!(tiles = tiles.url_template.as_str(), attribution = tiles.attribution.as_str(), "Tile source");

    let event = surface.set_layer(MapLayer::Area).await;
    if let MapEvent::DataChanged { using_fallback, .. } = event {
        if using_fallback {
            println!("(using demo data — live layer data unavailable)");
        }
    }

    // Scripted interaction: hover then click Connaught Place.
    let target = "Connaught Place";
    let index = surface
        .find_by_name(target)
        .ok_or_else(|| anyhow::anyhow!("{target} not present in layer data"))?;
    surface.hover(Some(index));
    let Some(MapEvent::LocationSelected(selected)) = surface.click(index) else {
        anyhow::bail!("{target} has no usable geometry");
    };
    surface.hover(None);

    println!(
        "Selected {} ({} layer) at {:.4}, {:.4}",
        selected.name, selected.layer, selected.coordinates.lat, selected.coordinates.lng
    );
    println!("Street view: {}", street_view_url(selected.coordinates));

    let mut session = Session::new();
    session.set_config(SimulationConfig::default());
    session.select(selected);

    run_generation(&mut session, &generator).await;

    let result = session.result();
    println!("\n--- Market analysis ---\n{}\n", result.analysis_markdown);
    match &result.image_data_uri {
        Some(uri) => {
            // Report size only; the payload itself is for a renderer.
            println!("Panorama image: {} bytes of data URI", uri.len());
            drive_viewer();
        }
        None => println!("Panorama image: none (text-only result)"),
    }

    Ok(())
}

/// Walk the panorama viewer through a short scripted orbit to show the
/// camera math: idle auto-rotation, then a drag, then dispose.
fn drive_viewer() {
    let mut viewer = PanoramaViewer::new(Viewport {
        width: 1280,
        height: 640,
    });
    viewer.texture_decoded();

    for _ in 0..30 {
        viewer.advance_frame();
    }
    println!(
        "After idle rotation: lon {:.2}°, lat {:.2}°",
        viewer.camera().lon(),
        viewer.camera().lat()
    );

    viewer.on_pointer_down([640.0, 320.0]);
    viewer.on_pointer_move([400.0, 250.0]);
    viewer.on_pointer_up();
    let pose = viewer
        .advance_frame()
        .expect("viewer loop still running");
    println!(
        "After drag: lon {:.2}°, lat {:.2}°, look target ({:.1}, {:.1}, {:.1})",
        viewer.camera().lon(),
        viewer.camera().lat(),
        pose.look_target[0],
        pose.look_target[1],
        pose.look_target[2]
    );

    viewer.dispose();
}
