//! Schmale Abstraktion über die Karten-Render-Oberfläche.
//!
//! Die Kamera-Geometrie braucht vom Renderer nur Projektion, Maße und
//! den aktuellen Bearing; alles andere (Animation, Ornamente, Styles)
//! bleibt hinter dieser Schnittstelle verborgen und damit testbar.

use glam::DVec2;

use crate::camera::CameraPose;
use crate::core::{EdgeInsets, GeoCoordinate};

/// Projektions- und Zustands-Schnittstelle einer Kartenoberfläche.
///
/// Alle Aufrufe sind synchron auf dem UI-Thread; Implementierungen mit
/// veränderlichem Kamera-Zustand nutzen innere Mutabilität, damit die
/// Oberfläche geteilt referenziert werden kann.
pub trait MapSurface {
    /// Pixelgröße des sichtbaren Viewports.
    fn size(&self) -> DVec2;

    /// System-reservierte Ränder (Safe-Area) in Pixeln.
    fn safe_area(&self) -> EdgeInsets {
        EdgeInsets::ZERO
    }

    /// Aktueller Kamera-Bearing in Grad.
    fn bearing(&self) -> f64;

    /// Projiziert eine geographische Koordinate auf Viewport-Pixel.
    fn project(&self, coordinate: GeoCoordinate) -> DVec2;

    /// Kehrt die Projektion um: Viewport-Pixel zu Koordinate.
    fn unproject(&self, point: DVec2) -> GeoCoordinate;

    /// Wendet eine Ziel-Pose auf die Karte an.
    fn apply(&self, pose: &CameraPose);
}
