//! Session state and the generation pipeline.

use tracing::{debug, info};

use bazaarlens_common::{AnalysisResult, SelectedLocation, SimulationConfig};

use crate::generator::AnalysisGenerator;

/// One user's simulation state: current selection, configuration, and the
/// latest generation result.
#[derive(Debug, Clone, Default)]
pub struct Session {
    selected: Option<SelectedLocation>,
    config: SimulationConfig,
    result: AnalysisResult,
    /// Ticket of the most recently started generation. Completions carrying
    /// an older ticket are dropped.
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedLocation> {
        self.selected.as_ref()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    /// Replace the selection wholesale. No history is kept.
    pub fn select(&mut self, location: SelectedLocation) {
        debug!(name = location.name.as_str(), "Location selected");
        self.selected = Some(location);
    }

    pub fn set_config(&mut self, config: SimulationConfig) {
        self.config = config;
    }

    /// Start a generation: reset the result to the loading state and hand
    /// out a ticket the completion must present.
    pub fn begin_generation(&mut self) -> u64 {
        self.generation += 1;
        self.result = AnalysisResult::pending();
        self.generation
    }

    /// Apply a completed generation. Returns false (and changes nothing)
    /// when the ticket is stale — the session moved on while this
    /// generation was in flight.
    pub fn apply_generation(&mut self, ticket: u64, result: AnalysisResult) -> bool {
        if ticket != self.generation {
            debug!(ticket, current = self.generation, "Dropping stale generation result");
            return false;
        }
        self.result = result;
        true
    }
}

/// Run one generation pass against the session's current selection.
///
/// The text and image calls run in parallel (`tokio::join!`): an image
/// failure never blocks the analysis text, and both results are applied in
/// a single atomic state update. Returns false when there is no selection
/// or the result was stale by the time it settled.
pub async fn run_generation<G: AnalysisGenerator>(session: &mut Session, generator: &G) -> bool {
    let Some(location) = session.selected().cloned() else {
        debug!("Generation requested with no selection, ignoring");
        return false;
    };
    let config = session.config().clone();
    let ticket = session.begin_generation();

    info!(name = location.name.as_str(), ticket, "Generation started");

    let (analysis_markdown, image_data_uri) = tokio::join!(
        generator.generate_location_analysis(&location, &config),
        generator.generate_shop_visualization(&location, &config),
    );

    let applied = session.apply_generation(
        ticket,
        AnalysisResult {
            analysis_markdown,
            image_data_uri,
            loading: false,
        },
    );
    info!(ticket, applied, "Generation settled");
    applied
}
