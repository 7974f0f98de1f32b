pub mod links;
pub mod style;
pub mod surface;
pub mod tiles;

pub use links::street_view_url;
pub use style::{FeatureStyle, LayerStyle};
pub use surface::{MapEvent, MapSurface};
pub use tiles::TileSource;
