//! Range, radius, and marker searches
//!
//! Bounded scans over a track's scenery: everything in a z window,
//! everything inside a sphere, and the distance to the next named
//! event marker. Results are copied out with stable control-point
//! indices - nothing borrows track storage, so callers may hold them
//! across authoring calls.
//!
//! All searches start with the stateless binary search; they run from
//! arbitrary positions (mission scripts, AI probes) and must not
//! disturb the player's per-frame segment cursor.

use crate::math::Vec3;
use crate::path::{PathTrack, SceneryPayload, SlotSide};

/// One scenery attachment found by a range or radius search
#[derive(Debug, Clone, PartialEq)]
pub struct SceneryHit {
    /// Index of the owning control point
    pub point_index: usize,
    pub side: SlotSide,
    /// Dispatch id of the attachment
    pub type_id: u16,
    /// Reconstructed world position
    pub position: Vec3,
}

/// One event marker found in a z range
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerInfo {
    pub id: u32,
    pub name: String,
    /// z of the owning control point
    pub z: f32,
    /// Distance from the start of the queried range
    pub distance: f32,
}

/// All scenery attachments with `z0 <= z < z1`, at most `limit`.
///
/// Scans in z order and stops early once `limit` entries are filled,
/// so a small buffer on a dense track gets the nearest attachments.
/// Inverted ranges and a zero limit return nothing.
pub fn scenery_in_range(track: &PathTrack, z0: f32, z1: f32, limit: usize) -> Vec<SceneryHit> {
    let mut hits = Vec::new();
    if z1 <= z0 || limit == 0 {
        return hits;
    }
    let points = track.points();
    let start = match track.first_index_at_or_after(z0) {
        Some(i) => i,
        None => return hits,
    };

    for (offset, point) in points[start..].iter().enumerate() {
        if point.z >= z1 {
            break;
        }
        for (side, scenery) in point.scenery() {
            hits.push(SceneryHit {
                point_index: start + offset,
                side,
                type_id: scenery.type_id(),
                position: scenery.world_position(point),
            });
            if hits.len() == limit {
                return hits;
            }
        }
    }
    hits
}

/// Event markers with `z0 <= z < z1`, at most `limit`
pub fn markers_in_range(track: &PathTrack, z0: f32, z1: f32, limit: usize) -> Vec<MarkerInfo> {
    let mut markers = Vec::new();
    if z1 <= z0 || limit == 0 {
        return markers;
    }
    let points = track.points();
    let start = match track.first_index_at_or_after(z0) {
        Some(i) => i,
        None => return markers,
    };

    for point in &points[start..] {
        if point.z >= z1 {
            break;
        }
        for (_, scenery) in point.scenery() {
            if let SceneryPayload::Event { id, name } = &scenery.payload {
                markers.push(MarkerInfo {
                    id: *id,
                    name: name.clone(),
                    z: point.z,
                    distance: point.z - z0,
                });
                if markers.len() == limit {
                    return markers;
                }
            }
        }
    }
    markers
}

/// All scenery attachments within `radius` of `center` in 3D.
///
/// Narrows to points with z in `center.z ± radius` via binary search,
/// then tests squared distance against each attachment's reconstructed
/// world position.
pub fn scenery_in_radius(track: &PathTrack, center: Vec3, radius: f32) -> Vec<SceneryHit> {
    let mut hits = Vec::new();
    if radius <= 0.0 {
        return hits;
    }
    let points = track.points();
    let start = match track.first_index_at_or_after(center.z - radius) {
        Some(i) => i,
        None => return hits,
    };
    let radius_sq = radius * radius;

    for (offset, point) in points[start..].iter().enumerate() {
        if point.z > center.z + radius {
            break;
        }
        for (side, scenery) in point.scenery() {
            let position = scenery.world_position(point);
            if (position - center).length_sq() <= radius_sq {
                hits.push(SceneryHit {
                    point_index: start + offset,
                    side,
                    type_id: scenery.type_id(),
                    position,
                });
            }
        }
    }
    hits
}

/// Distance from `player_z` forward to the next event marker named
/// `name`.
///
/// With looping enabled, a marker behind the player is still "ahead
/// around the bend": a second scan covers points before `player_z` and
/// the loop length is added to the distance. `None` when the marker
/// does not exist ahead.
pub fn distance_to_marker(track: &PathTrack, player_z: f32, name: &str) -> Option<f32> {
    let points = track.points();

    if let Some(start) = track.first_index_at_or_after(player_z) {
        for point in &points[start..] {
            if marker_named(point, name) {
                return Some(point.z - player_z);
            }
        }
    }

    // Around the loop seam
    let loop_len = track.loop_length()?;
    for point in points {
        if point.z >= player_z {
            break;
        }
        if marker_named(point, name) {
            return Some(point.z - player_z + loop_len);
        }
    }
    None
}

fn marker_named(point: &crate::path::ControlPoint, name: &str) -> bool {
    point.scenery().any(|(_, s)| {
        matches!(&s.payload, SceneryPayload::Event { name: n, .. } if n == name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{ControlPoint, Scenery};

    fn marker(id: u32, name: &str) -> Scenery {
        Scenery::new(0.0, 0.0, SceneryPayload::Event {
            id,
            name: name.to_string(),
        })
    }

    fn prop(type_id: u16, lateral: f32, vertical: f32) -> Scenery {
        Scenery::new(lateral, vertical, SceneryPayload::Custom { type_id })
    }

    /// z = 0..90 step 10, width 10, marker at 50, props at 20/30/60
    fn test_track() -> PathTrack {
        let mut track = PathTrack::new("Main");
        for i in 0..10 {
            let mut p = ControlPoint::new(i as f32 * 10.0);
            p.width = 10.0;
            match i {
                2 => p.scenery_left = Some(prop(100, -1.0, 0.0)),
                3 => {
                    p.scenery_left = Some(prop(101, -1.0, 0.0));
                    p.scenery_right = Some(prop(102, 1.0, 0.0));
                }
                5 => p.scenery_overhead = Some(marker(1, "Checkpoint1")),
                6 => p.scenery_right = Some(prop(103, 2.0, 4.0)),
                _ => {}
            }
            track.add_control_point(p).unwrap();
        }
        track
    }

    #[test]
    fn test_markers_in_range() {
        let track = test_track();
        let markers = markers_in_range(&track, 0.0, 100.0, 16);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].name, "Checkpoint1");
        assert!((markers[0].distance - 50.0).abs() < 0.001);

        // Range end is exclusive
        assert!(markers_in_range(&track, 0.0, 50.0, 16).is_empty());
        // Inverted range finds nothing
        assert!(markers_in_range(&track, 60.0, 10.0, 16).is_empty());
    }

    #[test]
    fn test_scenery_in_range_respects_limit() {
        let track = test_track();
        let all = scenery_in_range(&track, 0.0, 100.0, 16);
        assert_eq!(all.len(), 5);

        let capped = scenery_in_range(&track, 0.0, 100.0, 2);
        assert_eq!(capped.len(), 2);
        // Early stop keeps the nearest attachments, in slot order
        assert_eq!(capped[0].type_id, 100);
        assert_eq!(capped[1].type_id, 101);

        assert!(scenery_in_range(&track, 0.0, 100.0, 0).is_empty());
    }

    #[test]
    fn test_scenery_in_radius() {
        let track = test_track();
        // Prop at point 6: lateral 2.0 * half-width 5 = x 10, y 4, z 60
        let hits = scenery_in_radius(&track, Vec3::new(10.0, 4.0, 60.0), 1.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].type_id, 103);
        assert_eq!(hits[0].point_index, 6);

        // Just out of reach
        let hits = scenery_in_radius(&track, Vec3::new(10.0, 4.0, 72.0), 11.0);
        assert!(hits.is_empty());

        // Wide sphere catches the cluster at z 20..30
        let hits = scenery_in_radius(&track, Vec3::new(0.0, 0.0, 25.0), 10.0);
        assert_eq!(hits.len(), 3);

        assert!(scenery_in_radius(&track, Vec3::ZERO, 0.0).is_empty());
    }

    #[test]
    fn test_distance_to_marker_ahead() {
        let track = test_track();
        let d = distance_to_marker(&track, 20.0, "Checkpoint1").unwrap();
        assert!((d - 30.0).abs() < 0.001);
        assert!(distance_to_marker(&track, 20.0, "NoSuchMarker").is_none());
    }

    #[test]
    fn test_distance_to_marker_wraps_loop() {
        let mut track = test_track();
        // Marker at 50 is behind a player at 60
        assert!(distance_to_marker(&track, 60.0, "Checkpoint1").is_none());

        track.set_looping(Some(0.0));
        let d = distance_to_marker(&track, 60.0, "Checkpoint1").unwrap();
        // 50 - 60 + loop length 90
        assert!((d - 80.0).abs() < 0.001);
    }
}
