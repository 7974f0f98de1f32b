//! Orbit camera parameterized by longitude/latitude angles around a fixed
//! viewpoint.

/// Latitude clamp, in degrees. Keeps the camera from flipping past the poles.
pub const LAT_LIMIT_DEG: f64 = 85.0;

/// Camera orientation as two angles in degrees. Both start at zero.
///
/// Latitude is clamped at write time, so a render pass never observes a
/// value outside [-85, 85] no matter how far a drag accumulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    lon: f64,
    lat: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self { lon: 0.0, lat: 0.0 }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn set_lon(&mut self, lon: f64) {
        self.lon = lon;
    }

    pub fn set_lat(&mut self, lat: f64) {
        self.lat = lat.clamp(-LAT_LIMIT_DEG, LAT_LIMIT_DEG);
    }

    pub fn advance_lon(&mut self, delta: f64) {
        self.lon += delta;
    }

    /// Look-at target on a sphere of `radius` around the viewpoint:
    /// phi = 90° − lat, theta = lon, standard spherical-to-Cartesian.
    pub fn look_target(&self, radius: f64) -> [f64; 3] {
        let phi = (90.0 - self.lat).to_radians();
        let theta = self.lon.to_radians();
        [
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        ]
    }
}
