//! Konsumiertes Routen-Modell: Steps, Manöver, Fortschritts-Snapshot.

pub mod maneuver;
pub mod model;
pub mod progress;

pub use maneuver::ManeuverType;
pub use model::{Route, RouteLeg, RouteStep};
pub use progress::RouteProgress;
