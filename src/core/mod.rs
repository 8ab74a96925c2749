//! Renderer-unabhängige Primitiven: Koordinaten, Polylines, Bounding-Box, Insets.

pub mod bounding_box;
pub mod edge_insets;
pub mod geo;
pub mod location;
pub mod polyline;

pub use bounding_box::{BoundingBox, FIT_ZOOM_CEILING, TILE_SIZE};
pub use edge_insets::EdgeInsets;
pub use geo::{shortest_rotation, GeoCoordinate, METERS_PER_RADIAN};
pub use location::Location;
