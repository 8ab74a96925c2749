//! Geteilte Konfigurationstypen für alle Kamera-Layer.

pub mod options;

pub use options::{
    BearingSmoothing, FollowingCameraOptions, GeometryFramingAfterManeuver, IntersectionDensity,
    OverviewCameraOptions, PitchNearManeuver, ViewportOptions,
};
