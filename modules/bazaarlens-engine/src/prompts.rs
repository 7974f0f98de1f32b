//! Fixed prompt templates for the two generation calls.

use bazaarlens_common::{SelectedLocation, SimulationConfig};

/// Market-analysis prompt: short markdown, capped at 300 words, covering
/// demographics, business fit, and one strategic tip.
pub fn analysis_prompt(location: &SelectedLocation, config: &SimulationConfig) -> String {
    format!(
        "You are a market analyst specializing in Delhi retail. Write a concise \
         market analysis in markdown, under 300 words, for opening a {business} \
         in {name} ({layer} level, Delhi).\n\n\
         Cover exactly three things:\n\
         1. Local demographics and footfall character of {name}.\n\
         2. How well a {business} fits this area.\n\
         3. One concrete strategic tip for this location.\n\n\
         The shop will have a {style} frontage and its peak trading window is \
         {time}. Keep the tone practical, no preamble.",
        business = config.business_type,
        name = location.name,
        layer = location.layer,
        style = config.architectural_style,
        time = config.time_of_day,
    )
}

/// Storefront panorama prompt. Phrased as a concept render "inspired by" the
/// locality — not as a photograph of a real place — which keeps image safety
/// filters from rejecting the request.
pub fn visualization_prompt(location: &SelectedLocation, config: &SimulationConfig) -> String {
    format!(
        "A photorealistic architectural concept render of an imagined {business} \
         storefront, inspired by the streetscape of {name}, Delhi. {style} \
         facade, seen from street level at {time}. Include signage, surrounding \
         shopfronts, street furniture and passers-by consistent with a busy \
         Delhi market street.\n\n\
         Render as a single seamless 360-degree equirectangular panorama, 2:1 \
         aspect ratio, suitable for spherical projection. The full horizontal \
         field of view must wrap around with no visible seam.",
        business = config.business_type,
        name = location.name,
        style = config.architectural_style,
        time = config.time_of_day,
    )
}
