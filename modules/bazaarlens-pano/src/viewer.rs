//! Viewer lifecycle: sphere resources, texture loading, per-frame state.
//!
//! The per-frame state lives in the viewer struct and is updated via
//! methods — no closures capture interaction state, so a config change
//! mid-flight cannot leave a stale copy spinning in the render loop.

use tracing::{debug, info, warn};

use crate::camera::OrbitCamera;
use crate::drag::DragController;

/// Degrees of idle auto-rotation applied per rendered frame.
const AUTO_ROTATE_STEP: f64 = 0.05;

/// Sphere radius the camera orbits inside. Matches the look-target radius.
const SPHERE_RADIUS: f64 = 500.0;

/// Lifecycle of the equirectangular texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureState {
    /// Decode in progress; the scene stays hidden behind a loading indicator.
    Loading,
    /// Decoded and uploaded; scene visible.
    Ready,
    /// Decode failed; the viewer stays on the indicator.
    Failed,
}

/// Output surface dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height.max(1))
    }
}

/// What the renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePose {
    /// Camera look-at target on the sphere interior.
    pub look_target: [f64; 3],
    pub aspect: f64,
}

/// Graphics resources for the textured sphere. The sphere's winding is
/// inverted so its interior faces the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereResources {
    pub radius: f64,
    pub inverted: bool,
}

/// Interactive panorama of a single equirectangular image.
pub struct PanoramaViewer {
    camera: OrbitCamera,
    drag: DragController,
    texture: TextureState,
    viewport: Viewport,
    resources: Option<SphereResources>,
    /// Frame loop runs from construction until `dispose`.
    loop_running: bool,
    /// One-time "drag to look around" hint, dismissed on first interaction.
    hint_visible: bool,
    disposed: bool,
}

impl PanoramaViewer {
    /// Start a viewer for a new image. Texture decode is asynchronous; call
    /// `texture_decoded` / `texture_failed` when it settles.
    pub fn new(viewport: Viewport) -> Self {
        info!(width = viewport.width, height = viewport.height, "Panorama viewer mounted");
        Self {
            camera: OrbitCamera::new(),
            drag: DragController::new(),
            texture: TextureState::Loading,
            viewport,
            resources: Some(SphereResources {
                radius: SPHERE_RADIUS,
                inverted: true,
            }),
            loop_running: true,
            hint_visible: false,
            disposed: false,
        }
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Sphere geometry currently held, `None` after release.
    pub fn resources(&self) -> Option<&SphereResources> {
        self.resources.as_ref()
    }

    pub fn texture_state(&self) -> TextureState {
        self.texture
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The texture finished decoding. Ignored after dispose — a stale decode
    /// completing after unmount must be a no-op.
    pub fn texture_decoded(&mut self) {
        if self.disposed {
            debug!("Texture decode completed after dispose, ignoring");
            return;
        }
        self.texture = TextureState::Ready;
        self.hint_visible = true;
    }

    /// The texture failed to decode.
    pub fn texture_failed(&mut self) {
        if self.disposed {
            return;
        }
        warn!("Panorama texture decode failed");
        self.texture = TextureState::Failed;
    }

    /// Container resized: update output size (and thereby camera aspect).
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport { width, height };
    }

    pub fn on_pointer_down(&mut self, pos_px: [f64; 2]) {
        self.hint_visible = false;
        self.drag.on_pointer_down(pos_px, &self.camera);
    }

    pub fn on_pointer_move(&mut self, pos_px: [f64; 2]) {
        self.drag.on_pointer_move(pos_px, &mut self.camera);
    }

    pub fn on_pointer_up(&mut self) {
        self.drag.on_pointer_up();
    }

    /// Run one frame: idle auto-rotation (only while no drag is active),
    /// then the camera pose for the renderer. Returns `None` once the loop
    /// has been cancelled — callers must stop scheduling frames.
    pub fn advance_frame(&mut self) -> Option<FramePose> {
        if !self.loop_running {
            return None;
        }
        if !self.drag.is_dragging() {
            self.camera.advance_lon(AUTO_ROTATE_STEP);
        }
        Some(FramePose {
            look_target: self.camera.look_target(SPHERE_RADIUS),
            aspect: self.viewport.aspect(),
        })
    }

    /// Swap in a new image: release the current texture and sphere, rebuild,
    /// and return to the loading state. Camera resets to the initial view.
    pub fn set_image(&mut self) {
        self.release_resources();
        self.camera = OrbitCamera::new();
        self.drag = DragController::new();
        self.texture = TextureState::Loading;
        self.resources = Some(SphereResources {
            radius: SPHERE_RADIUS,
            inverted: true,
        });
    }

    /// Release all graphics resources and stop the frame loop. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.release_resources();
        self.loop_running = false;
        self.disposed = true;
        info!("Panorama viewer disposed");
    }

    fn release_resources(&mut self) {
        self.resources = None;
    }
}
