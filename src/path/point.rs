//! Control points and scenery attachments
//!
//! One control point is one authored sample along a path's z axis.
//! Geometry fields (offsets, roll, widths) are blended smoothly
//! between points by the query layer; appearance fields (textures,
//! colors, lane counts) and scenery attachments are discrete and apply
//! from a point until the next one.
//!
//! Scenery is a tagged payload in one of three slots per point (left,
//! right, overhead): a billboard sprite, an invisible event marker, a
//! junction linking to other paths, a level portal, a light, or a
//! user-defined type dispatched through the scenery style registry.

use serde::{Deserialize, Serialize};
use std::cell::Cell;

use crate::math::{Color, Vec3};

/// Scenery type ids used as keys into the scenery style registry.
///
/// Ids below [`USER_BASE`](scenery_type::USER_BASE) are reserved for
/// built-in payloads; games register their own types from `USER_BASE`
/// up to [`MAX_TYPES`](scenery_type::MAX_TYPES).
pub mod scenery_type {
    pub const SPRITE: u16 = 1;
    pub const EVENT: u16 = 2;
    pub const JUNCTION: u16 = 3;
    pub const PORTAL: u16 = 4;
    pub const LIGHT: u16 = 5;

    /// First id available to user-defined scenery types
    pub const USER_BASE: u16 = 100;
    /// Size of the whole id space (exclusive upper bound)
    pub const MAX_TYPES: u16 = 200;
}

/// Texture reference by pack and name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextureRef {
    /// Texture pack name (e.g., "SAMPLE")
    pub pack: String,
    /// Texture name without extension (e.g., "asphalt_01")
    pub name: String,
}

impl TextureRef {
    pub fn new(pack: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            pack: pack.into(),
            name: name.into(),
        }
    }

    /// An empty reference (renderer falls back to checkerboard)
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        !self.pack.is_empty() && !self.name.is_empty()
    }
}

/// Appearance of one ribbon surface
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Surface {
    pub texture: TextureRef,
    pub color: Color,
}

/// Geometric shape of a junction, for gameplay/AI interpretation.
///
/// The resolver always returns all three destinations; the kind tells
/// the caller which ones are semantically meaningful (a fork has no
/// straight-on merge, a T has no straight, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JunctionKind {
    /// Exit peeling off the current path
    ForkExit,
    /// Another path merging into this one
    MergeJoin,
    /// T intersection: left/right only
    TIntersection,
    /// Four-way crossing
    Crossroads,
}

/// One destination of a junction: a named path and a z position on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JunctionTarget {
    pub path: String,
    pub z: f32,
}

impl JunctionTarget {
    pub fn new(path: impl Into<String>, z: f32) -> Self {
        Self { path: path.into(), z }
    }
}

/// Topological link from this path to up to three others.
///
/// `None` in a direction means "no choice that way" - a fork exit has
/// only `left` or `right`, a crossroads all three.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JunctionLink {
    pub kind: JunctionKind,
    pub left: Option<JunctionTarget>,
    pub right: Option<JunctionTarget>,
    pub straight: Option<JunctionTarget>,
}

impl JunctionLink {
    pub fn new(kind: JunctionKind) -> Self {
        Self {
            kind,
            left: None,
            right: None,
            straight: None,
        }
    }
}

/// Point light parameters for light scenery.
///
/// `light_id` is filled in by style dispatch the first time the light
/// is seen, so the external lighting engine allocates it exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightParams {
    pub color: Color,
    pub radius: f32,
    pub intensity: f32,
    /// Id handed back by the lighting engine; runtime-only
    #[serde(skip)]
    pub light_id: Cell<Option<u32>>,
}

impl LightParams {
    pub fn new(color: Color, radius: f32, intensity: f32) -> Self {
        Self {
            color,
            radius,
            intensity,
            light_id: Cell::new(None),
        }
    }
}

/// Type-specific data of a scenery attachment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneryPayload {
    /// Billboard sprite scaled to `size` world units
    Sprite { texture: TextureRef, size: f32 },
    /// Invisible gameplay marker (checkpoints, triggers)
    Event { id: u32, name: String },
    /// Branch point to other paths
    Junction(JunctionLink),
    /// Doorway into the level system
    Portal { level: String },
    /// Point light, lazily registered with the lighting engine
    Light(LightParams),
    /// Game-defined type, dispatched purely by id
    Custom { type_id: u16 },
}

/// A typed object attached to one slot of a control point.
///
/// `lateral` is in half-ribbon-width units (-1.0 and 1.0 sit on the
/// ribbon edges), `vertical` in world units above the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenery {
    pub lateral: f32,
    pub vertical: f32,
    pub payload: SceneryPayload,
}

impl Scenery {
    pub fn new(lateral: f32, vertical: f32, payload: SceneryPayload) -> Self {
        Self {
            lateral,
            vertical,
            payload,
        }
    }

    /// Dispatch id for the scenery style registry
    pub fn type_id(&self) -> u16 {
        match &self.payload {
            SceneryPayload::Sprite { .. } => scenery_type::SPRITE,
            SceneryPayload::Event { .. } => scenery_type::EVENT,
            SceneryPayload::Junction(_) => scenery_type::JUNCTION,
            SceneryPayload::Portal { .. } => scenery_type::PORTAL,
            SceneryPayload::Light(_) => scenery_type::LIGHT,
            SceneryPayload::Custom { type_id } => *type_id,
        }
    }

    /// World position of this attachment on its owning point
    pub fn world_position(&self, owner: &ControlPoint) -> Vec3 {
        Vec3::new(
            self.lateral * owner.width * 0.5,
            self.vertical,
            owner.z,
        )
    }
}

/// Which of a control point's three scenery slots an attachment is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotSide {
    Left,
    Right,
    Overhead,
}

/// One authored sample along a path.
///
/// Points are appended in non-decreasing z order and never mutated in
/// place. Angles are radians; widths are full widths (the ribbon
/// extends half a width each side of the centerline).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlPoint {
    /// Position along the world z axis
    pub z: f32,
    /// Lateral offset of the ribbon centerline
    pub lateral: f32,
    /// Elevation offset of the surface
    pub elevation: f32,
    /// Bank angle in radians, positive rolls the right edge up
    pub roll: f32,
    /// Full width of the primary ribbon
    pub width: f32,
    /// Lane count on the primary ribbon
    pub lanes: u8,
    /// Lateral offset of the split ribbon's centerline, relative to
    /// the primary centerline
    pub split_offset: f32,
    /// Full width of the split ribbon; 0 disables it
    pub split_width: f32,
    /// Lane count on the split ribbon
    pub split_lanes: u8,
    /// Width of the rumble/shoulder strip outside each ribbon edge
    pub rumble_width: f32,
    /// Primary ribbon appearance
    pub surface: Surface,
    /// Split ribbon appearance
    pub split_surface: Surface,
    pub scenery_left: Option<Scenery>,
    pub scenery_right: Option<Scenery>,
    pub scenery_overhead: Option<Scenery>,
    /// Opaque per-point tag for gameplay code
    pub tag: u32,
}

impl ControlPoint {
    pub fn new(z: f32) -> Self {
        Self {
            z,
            ..Default::default()
        }
    }

    pub fn slot(&self, side: SlotSide) -> Option<&Scenery> {
        match side {
            SlotSide::Left => self.scenery_left.as_ref(),
            SlotSide::Right => self.scenery_right.as_ref(),
            SlotSide::Overhead => self.scenery_overhead.as_ref(),
        }
    }

    /// Occupied scenery slots in fixed left, right, overhead order.
    /// Queries rely on this order to break ties between slots.
    pub fn scenery(&self) -> impl Iterator<Item = (SlotSide, &Scenery)> {
        [
            (SlotSide::Left, &self.scenery_left),
            (SlotSide::Right, &self.scenery_right),
            (SlotSide::Overhead, &self.scenery_overhead),
        ]
        .into_iter()
        .filter_map(|(side, slot)| slot.as_ref().map(|s| (side, s)))
    }
}
