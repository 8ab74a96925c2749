//! Karten-Abstraktion: Projektions-Trait plus Referenz-Implementierung.

pub mod surface;
pub mod web_mercator;

pub use surface::MapSurface;
pub use web_mercator::WebMercatorSurface;
