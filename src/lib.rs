//! Path & junction network for PS1-era style 3D games.
//!
//! A game world is a set of named splines ("paths"), each an ordered
//! sequence of control points along the world z axis carrying geometry
//! (lateral offset, elevation, bank roll, ribbon widths), appearance
//! (surface textures and colors), and scenery attachments (sprites,
//! event markers, junctions, level portals, lights).
//!
//! # Architecture
//!
//! Layered modules, leaves first:
//!
//! - **math**: Vec3/Color primitives and the Catmull-Rom blend
//! - **path**: control points, tracks, and the named catalog
//! - **query**: per-frame lookups - interpolated properties, ground
//!   classification, junction choices, range/radius/marker searches
//! - **style**: pluggable rendering dispatch for paths and scenery
//!
//! Gameplay selects an active path in the [`PathCatalog`], then calls
//! the query functions once per frame with the player's position. The
//! renderer drives [`style::draw_active`], which walks visible
//! segments and hands interpolated property sets to the bound
//! [`PathStyle`] and each attachment to the [`SceneryStyleRegistry`].
//!
//! # Example
//!
//! ```
//! use pathnet::{ControlPoint, PathCatalog};
//! use pathnet::query::properties_at;
//!
//! let mut catalog = PathCatalog::new();
//! let track = catalog.create("Main").unwrap();
//! for i in 0..5 {
//!     let mut p = ControlPoint::new(i as f32 * 10.0);
//!     p.width = 10.0;
//!     p.rumble_width = 2.0;
//!     track.add_control_point(p).unwrap();
//! }
//!
//! let props = properties_at(track, 15.0).unwrap();
//! assert!((props.width - 10.0).abs() < 0.001);
//! ```

pub mod math;
pub mod path;
pub mod query;
pub mod style;

pub use math::{Color, Vec3};
pub use path::{
    scenery_type, CatalogError, ControlPoint, JunctionKind, JunctionLink, JunctionTarget,
    LightParams, PathCatalog, PathTrack, Scenery, SceneryPayload, SlotSide, Surface, TextureRef,
    TrackError,
};
pub use query::{
    GroundKind, GroundSample, JunctionChoices, MarkerInfo, PathProperties, QueryError, SceneryHit,
};
pub use style::{
    DefaultStyle, LightFactory, LightId, NullLights, PathStyle, SceneryStyle, SceneryStyleRegistry,
};
