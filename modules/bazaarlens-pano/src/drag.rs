//! Pointer-drag control of the orbit camera.

use crate::camera::OrbitCamera;

/// Degrees of rotation per pixel of pointer travel.
const DRAG_SENSITIVITY: f64 = 0.1;

/// Translates pointer events into camera angles. Drag origin is captured on
/// pointer-down; moves are applied as absolute offsets from that origin, so
/// a missed intermediate move event cannot accumulate error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragController {
    dragging: bool,
    /// Pointer position at drag start, in pixels.
    down_px: [f64; 2],
    /// Camera angles at drag start.
    origin_lon: f64,
    origin_lat: f64,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Capture the drag origin.
    pub fn on_pointer_down(&mut self, pos_px: [f64; 2], camera: &OrbitCamera) {
        self.dragging = true;
        self.down_px = pos_px;
        self.origin_lon = camera.lon();
        self.origin_lat = camera.lat();
    }

    /// Update camera angles while dragging. Horizontal delta drives
    /// longitude, inverted vertical delta drives latitude. No-op when no
    /// drag is active.
    pub fn on_pointer_move(&mut self, pos_px: [f64; 2], camera: &mut OrbitCamera) {
        if !self.dragging {
            return;
        }
        camera.set_lon(self.origin_lon + (self.down_px[0] - pos_px[0]) * DRAG_SENSITIVITY);
        camera.set_lat(self.origin_lat + (pos_px[1] - self.down_px[1]) * DRAG_SENSITIVITY);
    }

    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
    }
}
