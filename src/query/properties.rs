//! Interpolated path properties
//!
//! The heart of the query layer: resolve the segment bracketing a z
//! position and blend the four surrounding control points with a
//! Catmull-Rom cubic. Geometry comes out smooth; appearance fields
//! stay discrete - textures, colors, lane counts, scenery, and the
//! user tag apply verbatim from the segment's left point until the
//! next one. That nearest-left semantics is deliberate: a texture
//! cannot be halfway between two images, and a lane count of 2.7 means
//! nothing to gameplay.

use super::QueryError;
use crate::math::{catmull_rom, Vec3};
use crate::path::{ControlPoint, PathTrack};

/// Path properties sampled at one z position.
///
/// Continuous fields are Catmull-Rom blends; everything discrete reads
/// through [`anchor`](Self::anchor), the control point governing this
/// segment. A transient value - compute, consume, throw away.
#[derive(Debug, Clone, Copy)]
pub struct PathProperties<'a> {
    /// The sampled position (after loop wrapping)
    pub z: f32,
    /// Lateral offset of the primary ribbon centerline
    pub lateral: f32,
    /// Elevation of the surface at the centerline
    pub elevation: f32,
    /// Bank angle in radians
    pub roll: f32,
    /// Full width of the primary ribbon
    pub width: f32,
    /// Split ribbon centerline offset from the primary centerline
    pub split_offset: f32,
    /// Full width of the split ribbon; 0 disables it
    pub split_width: f32,
    /// Shoulder width outside each ribbon edge
    pub rumble_width: f32,
    /// Index of the segment's left control point
    pub segment: usize,
    /// Control point whose discrete fields govern this position
    pub anchor: &'a ControlPoint,
}

impl PathProperties<'_> {
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    /// Surface normal implied by the bank roll
    pub fn normal(&self) -> Vec3 {
        Vec3::UP.rotate_z(self.roll)
    }

    pub fn surface(&self) -> &crate::path::Surface {
        &self.anchor.surface
    }

    pub fn split_surface(&self) -> &crate::path::Surface {
        &self.anchor.split_surface
    }

    pub fn lanes(&self) -> u8 {
        self.anchor.lanes
    }

    pub fn split_lanes(&self) -> u8 {
        self.anchor.split_lanes
    }

    pub fn tag(&self) -> u32 {
        self.anchor.tag
    }
}

/// Sample a path's properties at a z position.
///
/// Uses the sticky segment cursor, so sequences of queries walking
/// forward along z cost O(1) each. The cursor never changes results,
/// only cost. With looping enabled, z first wraps into the track's
/// domain. Fails when the track has fewer than four points.
pub fn properties_at(track: &PathTrack, z: f32) -> Result<PathProperties<'_>, QueryError> {
    let points = track.points();
    if points.len() < 4 {
        return Err(QueryError::TooFewPoints { have: points.len() });
    }

    let z = track.normalize_z(z);
    let last = points.len() - 1;

    // Bracketing indices; ends reuse the boundary point, flattening
    // curvature at the extremes of the track
    let i1 = track.seek(z);
    let i0 = i1.saturating_sub(1);
    let i2 = (i1 + 1).min(last);
    let i3 = (i1 + 2).min(last);

    let (p0, p1, p2, p3) = (&points[i0], &points[i1], &points[i2], &points[i3]);

    let span = p2.z - p1.z;
    let t = if span > f32::EPSILON {
        ((z - p1.z) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let blend = |f: fn(&ControlPoint) -> f32| catmull_rom(f(p0), f(p1), f(p2), f(p3), t);

    Ok(PathProperties {
        z,
        lateral: blend(|p| p.lateral),
        elevation: blend(|p| p.elevation),
        roll: blend(|p| p.roll),
        width: blend(|p| p.width),
        split_offset: blend(|p| p.split_offset),
        split_width: blend(|p| p.split_width),
        rumble_width: blend(|p| p.rumble_width),
        segment: i1,
        anchor: p1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{Scenery, SceneryPayload, Surface, TextureRef};

    /// Five points, z = 0..40 step 10, with varying width and tags
    fn test_track() -> PathTrack {
        let mut track = PathTrack::new("Main");
        for i in 0..5 {
            let mut p = ControlPoint::new(i as f32 * 10.0);
            p.width = 10.0;
            p.rumble_width = 2.0;
            p.elevation = (i as f32) * 4.0;
            p.tag = i;
            p.surface = Surface {
                texture: TextureRef::new("ROAD", format!("seg_{}", i)),
                ..Default::default()
            };
            track.add_control_point(p).unwrap();
        }
        track
    }

    #[test]
    fn test_needs_four_points() {
        let mut track = PathTrack::new("Short");
        for z in [0.0, 10.0, 20.0] {
            track.add_control_point(ControlPoint::new(z)).unwrap();
        }
        assert_eq!(
            properties_at(&track, 5.0).unwrap_err(),
            QueryError::TooFewPoints { have: 3 }
        );
    }

    #[test]
    fn test_interpolation_passes_through_points() {
        let track = test_track();
        let props = properties_at(&track, 20.0).unwrap();
        assert!((props.elevation - 8.0).abs() < 0.001);
        assert!((props.width - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_continuity_across_segment_boundaries() {
        let track = test_track();
        for boundary in [10.0, 20.0, 30.0] {
            let before = properties_at(&track, boundary - 0.001).unwrap();
            let at = properties_at(&track, boundary).unwrap();
            assert!(
                (before.elevation - at.elevation).abs() < 0.01,
                "elevation jumps at z={}",
                boundary
            );
            assert!((before.width - at.width).abs() < 0.01);
            assert!((before.roll - at.roll).abs() < 0.01);
        }
    }

    #[test]
    fn test_discrete_fields_come_from_left_point() {
        let track = test_track();
        // Anywhere inside [10, 20) reads point 1's discrete fields
        let props = properties_at(&track, 19.5).unwrap();
        assert_eq!(props.tag(), 1);
        assert_eq!(props.anchor.surface.texture.name, "seg_1");
        // Exactly on the next point switches over
        let props = properties_at(&track, 20.0).unwrap();
        assert_eq!(props.tag(), 2);
    }

    #[test]
    fn test_scenery_is_discrete_too() {
        let mut track = test_track();
        // Rebuild with scenery on point 1
        let mut points: Vec<ControlPoint> = track.points().to_vec();
        points[1].scenery_left = Some(Scenery::new(
            -1.0,
            0.0,
            SceneryPayload::Custom { type_id: 120 },
        ));
        track = PathTrack::new("Main");
        for p in points {
            track.add_control_point(p).unwrap();
        }

        let props = properties_at(&track, 15.0).unwrap();
        assert!(props.anchor.scenery_left.is_some());
        let props = properties_at(&track, 25.0).unwrap();
        assert!(props.anchor.scenery_left.is_none());
    }

    #[test]
    fn test_cache_transparency() {
        let track = test_track();
        // Warm the cursor by walking to the end, then re-query
        for z in [5.0, 15.0, 25.0, 35.0] {
            properties_at(&track, z).unwrap();
        }
        let warm = properties_at(&track, 12.0).unwrap();

        let fresh_track = test_track();
        let cold = properties_at(&fresh_track, 12.0).unwrap();

        assert!((warm.elevation - cold.elevation).abs() < 0.0001);
        assert!((warm.width - cold.width).abs() < 0.0001);
        assert_eq!(warm.segment, cold.segment);
    }

    #[test]
    fn test_queries_clamp_outside_the_domain() {
        let track = test_track();
        let before = properties_at(&track, -100.0).unwrap();
        assert!((before.elevation - 0.0).abs() < 0.001);
        let after = properties_at(&track, 100.0).unwrap();
        assert!((after.elevation - 16.0).abs() < 0.001);
    }

    #[test]
    fn test_loop_round_trip() {
        let mut track = test_track();
        track.set_looping(Some(0.0));

        let wrapped = properties_at(&track, 45.0).unwrap();
        let direct = properties_at(&track, 5.0).unwrap();
        assert!((wrapped.z - direct.z).abs() < 0.001);
        assert!((wrapped.elevation - direct.elevation).abs() < 0.001);
        assert!((wrapped.width - direct.width).abs() < 0.001);
        assert_eq!(wrapped.tag(), direct.tag());

        // Full span plus loop target lands back on the target
        let around = properties_at(&track, 40.0 + 40.0 + 0.0).unwrap();
        let origin = properties_at(&track, 0.0).unwrap();
        assert!((around.elevation - origin.elevation).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_segment_uses_left_point() {
        let mut track = PathTrack::new("Stacked");
        for z in [0.0, 10.0, 10.0, 20.0] {
            let mut p = ControlPoint::new(z);
            p.width = z;
            track.add_control_point(p).unwrap();
        }
        // Inside the zero-length segment t collapses to 0
        let props = properties_at(&track, 10.0).unwrap();
        assert!(props.width.is_finite());
    }
}
