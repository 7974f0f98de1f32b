/// A raster tile source. Attribution is part of the source, not an
/// afterthought: renderers must display it.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSource {
    pub url_template: String,
    pub attribution: String,
}

impl TileSource {
    /// OpenStreetMap standard tiles.
    pub fn openstreetmap() -> Self {
        Self {
            url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
        }
    }

    /// Resolve the template for one tile.
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        self.url_template
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_url_substitutes_coordinates() {
        let source = TileSource::openstreetmap();
        assert_eq!(
            source.tile_url(12, 2920, 1700),
            "https://tile.openstreetmap.org/12/2920/1700.png"
        );
    }

    #[test]
    fn attribution_is_present() {
        assert!(TileSource::openstreetmap().attribution.contains("OpenStreetMap"));
    }
}
