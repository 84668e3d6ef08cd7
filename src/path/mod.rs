//! Path data model
//!
//! A path is a named spline: an ordered run of control points along
//! the world z axis, each carrying geometry, surface appearance, and
//! up to three scenery attachments. Paths live in a [`PathCatalog`]
//! and are authored programmatically by gameplay or level code.
//!
//! - [`point`]: control points, scenery payloads, junction links
//! - [`track`]: one path's point storage, loop config, segment lookup
//! - [`catalog`]: the named collection and active-path selection

pub mod catalog;
pub mod point;
pub mod track;

pub use catalog::{CatalogError, PathCatalog};
pub use point::{
    scenery_type, ControlPoint, JunctionKind, JunctionLink, JunctionTarget, LightParams, Scenery,
    SceneryPayload, SlotSide, Surface, TextureRef,
};
pub use track::{PathTrack, TrackError};

/// Validation limits for authored path data
pub mod limits {
    /// Maximum length of a path name
    pub const MAX_NAME_LEN: usize = 64;
    /// Maximum magnitude for any authored coordinate or width
    pub const MAX_COORD: f32 = 1_000_000.0;
    /// Initial control-point capacity of a new track
    pub const POINT_SEED_CAPACITY: usize = 256;
}
