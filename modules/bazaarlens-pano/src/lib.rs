pub mod camera;
pub mod drag;
pub mod viewer;

pub use camera::OrbitCamera;
pub use drag::DragController;
pub use viewer::{FramePose, PanoramaViewer, SphereResources, TextureState, Viewport};
