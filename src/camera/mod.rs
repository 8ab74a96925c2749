//! Kamera-Layer: Leaf-Berechnungen, Posen und die Viewport-Datenquelle.

pub mod anchor;
pub mod bearing;
pub mod data_source;
pub mod framing;
pub mod pitch;
pub mod pose;
pub mod zoom;

pub use anchor::anchor_point;
pub use bearing::resolve_bearing;
pub use data_source::{ViewportDataSource, ViewportUpdate};
pub use framing::{blended_center, compound_maneuver_geometry, framed_midpoint};
pub use pitch::pitch_coefficient;
pub use pose::{CameraPose, NavigationCameraPoses};
pub use zoom::zoom_for_fit;
