//! Ground classification
//!
//! Classifies a world XZ position against the path's ribbons and
//! computes the banked surface height and normal under it. The player
//! controller calls this every frame to stick to the road, detect
//! rumble strips, and notice leaving the track entirely.

use super::properties::properties_at;
use super::QueryError;
use crate::math::Vec3;
use crate::path::PathTrack;

/// What kind of ground lies under a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundKind {
    /// On a ribbon surface
    Path,
    /// On the rumble strip just outside a ribbon edge
    Shoulder,
    /// Beyond every ribbon and shoulder
    OffPath,
}

/// Result of a ground query. Transient; not tied to track storage.
#[derive(Debug, Clone, Copy)]
pub struct GroundSample {
    pub kind: GroundKind,
    /// Whether the split ribbon (not the primary) won the test
    pub on_split: bool,
    /// Surface height at the queried position, bank included
    pub height: f32,
    /// Surface normal, unit length
    pub normal: Vec3,
}

/// Classify `world_x` at position `z` along the path.
///
/// The primary ribbon is tested first and wins over an overlapping
/// split ribbon. Within a ribbon or its shoulder the surface banks
/// with the roll angle: height rises by `sin(roll)` per unit of
/// lateral distance from that ribbon's centerline, and the normal is
/// world-up rotated by the roll. Off-path ground is flat.
pub fn ground_at(track: &PathTrack, world_x: f32, z: f32) -> Result<GroundSample, QueryError> {
    let props = properties_at(track, z)?;

    // Primary ribbon
    let dx = world_x - props.lateral;
    let half = props.half_width();
    if dx.abs() < half + props.rumble_width {
        return Ok(banked_sample(&props, dx, half, false));
    }

    // Split ribbon, when present
    if props.split_width > 0.0 {
        let split_dx = world_x - (props.lateral + props.split_offset);
        let split_half = props.split_width * 0.5;
        if split_dx.abs() < split_half + props.rumble_width {
            return Ok(banked_sample(&props, split_dx, split_half, true));
        }
    }

    Ok(GroundSample {
        kind: GroundKind::OffPath,
        on_split: false,
        height: props.elevation,
        normal: Vec3::UP,
    })
}

fn banked_sample(
    props: &super::PathProperties<'_>,
    dx: f32,
    half: f32,
    on_split: bool,
) -> GroundSample {
    let kind = if dx.abs() < half {
        GroundKind::Path
    } else {
        GroundKind::Shoulder
    };
    GroundSample {
        kind,
        on_split,
        height: props.elevation + props.roll.sin() * dx,
        normal: props.normal(),
    }
}
