//! Viewport-Kamera-Engine für Turn-by-Turn-Navigation.
//!
//! Berechnet aus Position, Kurs und Routenfortschritt vollständige
//! Kamera-Posen (Following- und Overview-Modus, Handheld und Head-Unit),
//! unabhängig vom konkreten Karten-Renderer. Der Renderer bleibt hinter
//! der schmalen [`MapSurface`]-Schnittstelle.

pub mod camera;
pub mod core;
pub mod map;
pub mod route;
pub mod shared;

pub use crate::camera::{
    anchor_point, pitch_coefficient, resolve_bearing, zoom_for_fit, CameraPose,
    NavigationCameraPoses, ViewportDataSource, ViewportUpdate,
};
pub use crate::core::{shortest_rotation, BoundingBox, EdgeInsets, GeoCoordinate, Location};
pub use crate::map::{MapSurface, WebMercatorSurface};
pub use crate::route::{ManeuverType, Route, RouteLeg, RouteProgress, RouteStep};
pub use crate::shared::{
    BearingSmoothing, FollowingCameraOptions, GeometryFramingAfterManeuver, IntersectionDensity,
    OverviewCameraOptions, PitchNearManeuver, ViewportOptions,
};
