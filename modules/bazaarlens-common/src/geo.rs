use serde::{Deserialize, Serialize};

// --- Geo Types ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned lat/lng bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    /// An empty box that any `extend` call will snap to.
    pub fn empty() -> Self {
        Self {
            min_lat: f64::INFINITY,
            min_lng: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            max_lng: f64::NEG_INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_lat > self.max_lat || self.min_lng > self.max_lng
    }

    pub fn extend(&mut self, point: GeoPoint) {
        self.min_lat = self.min_lat.min(point.lat);
        self.min_lng = self.min_lng.min(point.lng);
        self.max_lat = self.max_lat.max(point.lat);
        self.max_lng = self.max_lng.max(point.lng);
    }

    pub fn extend_bounds(&mut self, other: &GeoBounds) {
        if other.is_empty() {
            return;
        }
        self.extend(GeoPoint::new(other.min_lat, other.min_lng));
        self.extend(GeoPoint::new(other.max_lat, other.max_lng));
    }

    /// Bounding-box centroid.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lng >= self.min_lng
            && point.lng <= self.max_lng
    }
}

/// Haversine great-circle distance between two lat/lng points in kilometers.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let lat1_r = lat1.to_radians();
    let lat2_r = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1_r.cos() * lat2_r.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_grows_bounds() {
        let mut b = GeoBounds::empty();
        assert!(b.is_empty());
        b.extend(GeoPoint::new(28.63, 77.21));
        b.extend(GeoPoint::new(28.65, 77.23));
        assert!(!b.is_empty());
        assert_eq!(b.min_lat, 28.63);
        assert_eq!(b.max_lng, 77.23);
    }

    #[test]
    fn center_is_midpoint() {
        let mut b = GeoBounds::empty();
        b.extend(GeoPoint::new(28.0, 77.0));
        b.extend(GeoPoint::new(30.0, 79.0));
        let c = b.center();
        assert_eq!(c.lat, 29.0);
        assert_eq!(c.lng, 78.0);
    }

    #[test]
    fn contains_edges_inclusive() {
        let mut b = GeoBounds::empty();
        b.extend(GeoPoint::new(28.0, 77.0));
        b.extend(GeoPoint::new(29.0, 78.0));
        assert!(b.contains(GeoPoint::new(28.0, 77.0)));
        assert!(b.contains(GeoPoint::new(28.5, 77.5)));
        assert!(!b.contains(GeoPoint::new(27.9, 77.5)));
    }

    #[test]
    fn haversine_delhi_to_mumbai() {
        // Delhi to Mumbai is ~1150km
        let dist = haversine_km(28.6139, 77.209, 19.076, 72.8777);
        assert!(
            (dist - 1150.0).abs() < 20.0,
            "Delhi to Mumbai should be ~1150km, got {dist}"
        );
    }

    #[test]
    fn haversine_same_point_is_zero() {
        let dist = haversine_km(28.6139, 77.209, 28.6139, 77.209);
        assert!(dist < 0.001, "Same point should be 0km, got {dist}");
    }
}
