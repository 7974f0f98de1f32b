use bazaarlens_common::GeoPoint;

/// Deep link to Google Maps street-level view at a coordinate.
pub fn street_view_url(point: GeoPoint) -> String {
    format!(
        "https://www.google.com/maps/@?api=1&map_action=pano&viewpoint={:.6},{:.6}",
        point.lat, point.lng
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_view_link_embeds_coordinates() {
        let url = street_view_url(GeoPoint::new(28.6315, 77.2167));
        assert_eq!(
            url,
            "https://www.google.com/maps/@?api=1&map_action=pano&viewpoint=28.631500,77.216700"
        );
    }
}
