//! Geographische Bounding-Box mit Web-Mercator-Zoom-Berechnung.

use glam::DVec2;

use super::geo::GeoCoordinate;

/// Kachelgröße der Web-Mercator-Weltkarte in Pixeln bei Zoom 0.
pub const TILE_SIZE: f64 = 512.0;

/// Harte Obergrenze für den Fit-Zoom, unabhängig von Aufrufer-Grenzen.
pub const FIT_ZOOM_CEILING: f64 = 21.0;

/// Achsen-parallele Box über geographischen Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Südwest-Ecke
    pub southwest: GeoCoordinate,
    /// Nordost-Ecke
    pub northeast: GeoCoordinate,
}

impl BoundingBox {
    /// Spannt die Box über alle übergebenen Koordinaten auf.
    ///
    /// `None` bei leerer Eingabe. Ein einzelner Punkt ergibt eine
    /// entartete Box (beide Ecken identisch).
    pub fn from_coordinates(coordinates: &[GeoCoordinate]) -> Option<Self> {
        let first = coordinates.first()?;

        let mut min_lat = first.latitude;
        let mut max_lat = first.latitude;
        let mut min_lng = first.longitude;
        let mut max_lng = first.longitude;

        for coordinate in &coordinates[1..] {
            min_lat = min_lat.min(coordinate.latitude);
            max_lat = max_lat.max(coordinate.latitude);
            min_lng = min_lng.min(coordinate.longitude);
            max_lng = max_lng.max(coordinate.longitude);
        }

        Some(Self {
            southwest: GeoCoordinate::new(min_lat, min_lng),
            northeast: GeoCoordinate::new(max_lat, max_lng),
        })
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> GeoCoordinate {
        self.southwest.midpoint(self.northeast)
    }

    /// Maximaler Zoom, bei dem die Box in `size` Pixel passt.
    ///
    /// Pro Achse `log2(pixel / TILE_SIZE / weltanteil)`; die stärker
    /// einschränkende Achse gewinnt, gedeckelt auf [`FIT_ZOOM_CEILING`].
    /// Längengrad-Spannen über die Datumsgrenze (negativ) werden mit
    /// +360° normalisiert. `None` wenn die Box auf beiden Achsen
    /// entartet ist (Einzelpunkt).
    pub fn zoom_level_to_fit(&self, size: DVec2) -> Option<f64> {
        let lat_fraction =
            (mercator_latitude(self.northeast.latitude) - mercator_latitude(self.southwest.latitude))
                / std::f64::consts::PI;

        let mut lng_span = self.northeast.longitude - self.southwest.longitude;
        if lng_span < 0.0 {
            lng_span += 360.0;
        }
        let lng_fraction = lng_span / 360.0;

        let lat_zoom = axis_zoom(size.y, lat_fraction);
        let lng_zoom = axis_zoom(size.x, lng_fraction);

        let zoom = match (lat_zoom, lng_zoom) {
            (Some(lat), Some(lng)) => lat.min(lng),
            (Some(lat), None) => lat,
            (None, Some(lng)) => lng,
            (None, None) => return None,
        };

        Some(zoom.min(FIT_ZOOM_CEILING))
    }
}

/// Mercator-projizierte Breite in Radiant, geklemmt auf ±π/2.
fn mercator_latitude(latitude: f64) -> f64 {
    let sin = latitude.to_radians().sin();
    let projected = ((1.0 + sin) / (1.0 - sin)).ln() / 2.0;
    projected.clamp(-std::f64::consts::PI, std::f64::consts::PI) / 2.0
}

/// Zoom einer Achse: Pixelmaß gegen Weltanteil.
///
/// `None` wenn der Weltanteil nicht positiv ist (entartete Achse).
fn axis_zoom(pixels: f64, world_fraction: f64) -> Option<f64> {
    if world_fraction <= 0.0 || !world_fraction.is_finite() {
        return None;
    }
    Some((pixels / TILE_SIZE / world_fraction).log2())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_empty_set_is_none() {
        assert_eq!(BoundingBox::from_coordinates(&[]), None);
    }

    #[test]
    fn from_coordinates_spans_extremes() {
        let bbox = BoundingBox::from_coordinates(&[
            GeoCoordinate::new(1.0, 5.0),
            GeoCoordinate::new(-2.0, 7.0),
            GeoCoordinate::new(0.5, 6.0),
        ])
        .unwrap();
        assert_eq!(bbox.southwest, GeoCoordinate::new(-2.0, 5.0));
        assert_eq!(bbox.northeast, GeoCoordinate::new(1.0, 7.0));
        assert_eq!(bbox.center(), GeoCoordinate::new(-0.5, 6.0));
    }

    #[test]
    fn zoom_for_one_degree_longitude_in_512px_viewport() {
        // 1° Länge am Äquator, 512×512 px: log2(512 / 512 / (1/360)) = log2(360)
        let bbox = BoundingBox {
            southwest: GeoCoordinate::new(0.0, 0.0),
            northeast: GeoCoordinate::new(0.0, 1.0),
        };
        let zoom = bbox.zoom_level_to_fit(DVec2::new(512.0, 512.0)).unwrap();
        assert_relative_eq!(zoom, 360.0_f64.log2(), epsilon = 1e-9);
    }

    #[test]
    fn zoom_for_single_point_is_none() {
        let bbox = BoundingBox::from_coordinates(&[GeoCoordinate::new(47.0, 9.5)]).unwrap();
        assert_eq!(bbox.zoom_level_to_fit(DVec2::new(512.0, 512.0)), None);
    }

    #[test]
    fn zoom_shrinks_as_span_grows() {
        let size = DVec2::new(800.0, 600.0);
        let mut previous = f64::MAX;
        for span in [0.1, 0.5, 1.0, 5.0, 20.0] {
            let bbox = BoundingBox {
                southwest: GeoCoordinate::new(-span / 2.0, -span / 2.0),
                northeast: GeoCoordinate::new(span / 2.0, span / 2.0),
            };
            let zoom = bbox.zoom_level_to_fit(size).unwrap();
            assert!(zoom < previous, "Zoom muss mit wachsender Spanne fallen");
            previous = zoom;
        }
    }

    #[test]
    fn antimeridian_span_is_normalized() {
        // Von 179° Ost nach -179° West: effektiv 2° Spanne, nicht 358°
        let bbox = BoundingBox {
            southwest: GeoCoordinate::new(0.0, 179.0),
            northeast: GeoCoordinate::new(0.0, -179.0),
        };
        let zoom = bbox.zoom_level_to_fit(DVec2::new(512.0, 512.0)).unwrap();
        assert_relative_eq!(zoom, 180.0_f64.log2(), epsilon = 1e-9);
    }

    #[test]
    fn zoom_is_capped_at_ceiling() {
        // Winzige Spanne würde rechnerisch weit über 21 liegen
        let bbox = BoundingBox {
            southwest: GeoCoordinate::new(0.0, 0.0),
            northeast: GeoCoordinate::new(1e-9, 1e-9),
        };
        let zoom = bbox.zoom_level_to_fit(DVec2::new(512.0, 512.0)).unwrap();
        assert_relative_eq!(zoom, FIT_ZOOM_CEILING);
    }
}
