//! Junction resolution
//!
//! Looks ahead of the player for the nearest junction trigger and
//! copies out its destination choices. Gameplay polls this every frame
//! while driving; a `Some` result means "a branch is coming up, offer
//! the player a turn."

use crate::path::{JunctionKind, JunctionTarget, PathTrack, SceneryPayload};

/// Destination choices of the nearest junction ahead.
///
/// All three directions are always present as options; `None` means
/// the junction offers no choice that way (which is normal - a fork
/// has one side only), not an error. Owned copies, safe to hold across
/// track mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct JunctionChoices {
    /// z of the control point carrying the trigger
    pub z: f32,
    pub kind: JunctionKind,
    pub left: Option<JunctionTarget>,
    pub right: Option<JunctionTarget>,
    pub straight: Option<JunctionTarget>,
}

/// Find the nearest junction trigger in `[player_z, player_z + radius]`.
///
/// Scans control points forward from the first at or after `player_z`,
/// so a nearer (lower z) junction always wins; at the same point the
/// left slot beats right beats overhead. Returns `None` for a
/// non-positive radius or when no trigger is in range. Does not
/// disturb the per-frame segment cursor.
pub fn junction_ahead(track: &PathTrack, player_z: f32, radius: f32) -> Option<JunctionChoices> {
    if radius <= 0.0 {
        return None;
    }

    let points = track.points();
    let start = track.first_index_at_or_after(player_z)?;
    let limit = player_z + radius;

    for point in &points[start..] {
        if point.z > limit {
            break;
        }
        for (_, scenery) in point.scenery() {
            if let SceneryPayload::Junction(link) = &scenery.payload {
                return Some(JunctionChoices {
                    z: point.z,
                    kind: link.kind,
                    left: link.left.clone(),
                    right: link.right.clone(),
                    straight: link.straight.clone(),
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{ControlPoint, JunctionLink, Scenery, SlotSide};

    fn junction_scenery(kind: JunctionKind, left: Option<JunctionTarget>) -> Scenery {
        let mut link = JunctionLink::new(kind);
        link.left = left;
        Scenery::new(0.0, 0.0, SceneryPayload::Junction(link))
    }

    fn track_with_junction_at(z: f32, side: SlotSide) -> PathTrack {
        let mut track = PathTrack::new("Main");
        for i in 0..5 {
            let mut p = ControlPoint::new(i as f32 * 10.0);
            if (p.z - z).abs() < 0.001 {
                let s = junction_scenery(
                    JunctionKind::ForkExit,
                    Some(JunctionTarget::new("Side", 0.0)),
                );
                match side {
                    SlotSide::Left => p.scenery_left = Some(s),
                    SlotSide::Right => p.scenery_right = Some(s),
                    SlotSide::Overhead => p.scenery_overhead = Some(s),
                }
            }
            track.add_control_point(p).unwrap();
        }
        track
    }

    #[test]
    fn test_finds_junction_in_range() {
        let track = track_with_junction_at(20.0, SlotSide::Left);
        let choices = junction_ahead(&track, 15.0, 10.0).expect("junction in range");
        assert!((choices.z - 20.0).abs() < 0.001);
        assert_eq!(choices.kind, JunctionKind::ForkExit);
        let left = choices.left.expect("left choice");
        assert_eq!(left.path, "Side");
        assert!((left.z - 0.0).abs() < 0.001);
        assert!(choices.right.is_none());
        assert!(choices.straight.is_none());
    }

    #[test]
    fn test_out_of_range_and_bad_radius() {
        let track = track_with_junction_at(20.0, SlotSide::Left);
        assert!(junction_ahead(&track, 0.0, 5.0).is_none());
        assert!(junction_ahead(&track, 25.0, 100.0).is_none());
        assert!(junction_ahead(&track, 15.0, 0.0).is_none());
        assert!(junction_ahead(&track, 15.0, -3.0).is_none());
    }

    #[test]
    fn test_nearest_junction_wins() {
        let mut track = PathTrack::new("Main");
        for i in 0..5 {
            let mut p = ControlPoint::new(i as f32 * 10.0);
            if i == 2 {
                p.scenery_right = Some(junction_scenery(
                    JunctionKind::ForkExit,
                    Some(JunctionTarget::new("Near", 0.0)),
                ));
            }
            if i == 3 {
                p.scenery_left = Some(junction_scenery(
                    JunctionKind::ForkExit,
                    Some(JunctionTarget::new("Far", 0.0)),
                ));
            }
            track.add_control_point(p).unwrap();
        }

        let choices = junction_ahead(&track, 0.0, 100.0).unwrap();
        assert_eq!(choices.left.unwrap().path, "Near");
    }

    #[test]
    fn test_slot_priority_at_same_point() {
        let mut track = PathTrack::new("Main");
        for i in 0..5 {
            let mut p = ControlPoint::new(i as f32 * 10.0);
            if i == 2 {
                p.scenery_overhead = Some(junction_scenery(
                    JunctionKind::Crossroads,
                    Some(JunctionTarget::new("FromOverhead", 0.0)),
                ));
                p.scenery_left = Some(junction_scenery(
                    JunctionKind::Crossroads,
                    Some(JunctionTarget::new("FromLeft", 0.0)),
                ));
            }
            track.add_control_point(p).unwrap();
        }

        let choices = junction_ahead(&track, 10.0, 50.0).unwrap();
        assert_eq!(choices.left.unwrap().path, "FromLeft");
    }

    #[test]
    fn test_trigger_exactly_at_player_counts() {
        let track = track_with_junction_at(20.0, SlotSide::Overhead);
        assert!(junction_ahead(&track, 20.0, 1.0).is_some());
    }
}
