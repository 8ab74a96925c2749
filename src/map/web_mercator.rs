//! Eigenständige Web-Mercator-Oberfläche ohne echten Renderer.
//!
//! Dient Tests, Benchmarks und Headless-Hosts als Referenz-Implementierung
//! von [`MapSurface`]. Rotation und Pitch fließen nicht in die Projektion
//! ein (achsen-parallele Draufsicht).

use std::cell::Cell;

use glam::DVec2;

use crate::camera::CameraPose;
use crate::core::{EdgeInsets, GeoCoordinate, TILE_SIZE};

use super::MapSurface;

/// Kartenoberfläche mit Standard-Web-Mercator-Projektion.
///
/// Kamera-Zustand liegt in `Cell`s, damit [`MapSurface::apply`] hinter
/// einer geteilten Referenz funktioniert (Single-Thread-Modell).
#[derive(Debug)]
pub struct WebMercatorSurface {
    size: DVec2,
    safe_area: EdgeInsets,
    center: Cell<GeoCoordinate>,
    zoom: Cell<f64>,
    bearing: Cell<f64>,
}

impl WebMercatorSurface {
    /// Erstellt eine Oberfläche mit Weltsicht (Zoom 0, Zentrum 0/0).
    pub fn new(size: DVec2) -> Self {
        Self::with_camera(size, GeoCoordinate::new(0.0, 0.0), 0.0)
    }

    /// Erstellt eine Oberfläche mit vorgegebener Start-Kamera.
    pub fn with_camera(size: DVec2, center: GeoCoordinate, zoom: f64) -> Self {
        Self {
            size,
            safe_area: EdgeInsets::ZERO,
            center: Cell::new(center),
            zoom: Cell::new(zoom),
            bearing: Cell::new(0.0),
        }
    }

    /// Setzt die Safe-Area (z.B. Head-Unit-Cluster-Ränder).
    pub fn set_safe_area(&mut self, safe_area: EdgeInsets) {
        self.safe_area = safe_area;
    }

    /// Aktuelles Kamera-Zentrum.
    pub fn center(&self) -> GeoCoordinate {
        self.center.get()
    }

    /// Aktueller Zoom-Level.
    pub fn zoom(&self) -> f64 {
        self.zoom.get()
    }

    /// Seitenlänge der Mercator-Weltkarte in Pixeln beim aktuellen Zoom.
    fn world_size(&self) -> f64 {
        TILE_SIZE * 2.0_f64.powf(self.zoom.get())
    }

    /// Koordinate → Welt-Pixel (Ursprung: Nordwest-Ecke der Weltkarte).
    fn world_point(&self, coordinate: GeoCoordinate) -> DVec2 {
        let world_size = self.world_size();
        let x = (coordinate.longitude / 360.0 + 0.5) * world_size;
        let lat = coordinate.latitude.to_radians();
        let y = (0.5
            - (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln()
                / (2.0 * std::f64::consts::PI))
            * world_size;
        DVec2::new(x, y)
    }

    /// Welt-Pixel → Koordinate.
    fn world_to_coordinate(&self, point: DVec2) -> GeoCoordinate {
        let world_size = self.world_size();
        let longitude = (point.x / world_size - 0.5) * 360.0;
        let y_norm = 0.5 - point.y / world_size;
        let latitude = (2.0 * (y_norm * 2.0 * std::f64::consts::PI).exp().atan()
            - std::f64::consts::FRAC_PI_2)
            .to_degrees();
        GeoCoordinate::new(latitude, longitude)
    }
}

impl MapSurface for WebMercatorSurface {
    fn size(&self) -> DVec2 {
        self.size
    }

    fn safe_area(&self) -> EdgeInsets {
        self.safe_area
    }

    fn bearing(&self) -> f64 {
        self.bearing.get()
    }

    fn project(&self, coordinate: GeoCoordinate) -> DVec2 {
        self.world_point(coordinate) - self.world_point(self.center.get()) + self.size / 2.0
    }

    fn unproject(&self, point: DVec2) -> GeoCoordinate {
        self.world_to_coordinate(point - self.size / 2.0 + self.world_point(self.center.get()))
    }

    fn apply(&self, pose: &CameraPose) {
        // Pitch, Padding und Anchor sind Sache des echten Renderers
        self.center.set(pose.center);
        self.zoom.set(pose.zoom);
        self.bearing.set(pose.bearing);
    }
}
