//! Per-frame spatial queries over a path
//!
//! Stateless functions over [`PathTrack`](crate::path::PathTrack)
//! data, called by gameplay once per frame with the player's world
//! position:
//!
//! - [`properties_at`]: smoothly interpolated path properties at a z
//! - [`ground_at`]: ribbon/shoulder/off-path classification with
//!   banked height and normal
//! - [`junction_ahead`]: the nearest branch choices within a radius
//! - [`range`]: marker and scenery searches along z or in a sphere
//!
//! Queries never mutate the track (the sticky segment cursor aside,
//! which is invisible in results), so they all take `&PathTrack`.

pub mod ground;
pub mod junction;
pub mod properties;
pub mod range;

pub use ground::{ground_at, GroundKind, GroundSample};
pub use junction::{junction_ahead, JunctionChoices};
pub use properties::{properties_at, PathProperties};
pub use range::{
    distance_to_marker, markers_in_range, scenery_in_radius, scenery_in_range, MarkerInfo,
    SceneryHit,
};

use std::fmt;

/// Error type for property-based queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Catmull-Rom interpolation needs at least four control points
    TooFewPoints { have: usize },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::TooFewPoints { have } => {
                write!(f, "path has {} control points, interpolation needs 4", have)
            }
        }
    }
}
