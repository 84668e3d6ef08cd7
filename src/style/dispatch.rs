//! Segment walk and draw dispatch
//!
//! The render-side entry point. Once per frame the renderer asks for
//! the visible z window of the active path; dispatch walks the control
//! point segments overlapping it, samples interpolated properties at
//! each segment's ends for the bound [`PathStyle`], then routes every
//! scenery attachment in the window through the registry. Light
//! attachments get their engine light allocated on first sight.

use super::{LightFactory, SceneryStyleRegistry};
use crate::path::{PathCatalog, PathTrack, SceneryPayload};
use crate::query::{properties_at, QueryError};

/// Draw the segments and scenery of `track` overlapping `[z0, z1]`.
///
/// The bound style (or the built-in default) is invoked once per
/// visible segment with property sets clamped to the window. Fails
/// only when the track is too sparse to interpolate; an empty window
/// draws nothing and succeeds.
pub fn draw_path(
    track: &PathTrack,
    registry: &SceneryStyleRegistry,
    lights: &mut dyn LightFactory,
    z0: f32,
    z1: f32,
) -> Result<(), QueryError> {
    if track.len() < 4 {
        return Err(QueryError::TooFewPoints { have: track.len() });
    }
    if z1 < z0 {
        return Ok(());
    }

    let points = track.points();
    let start = match track.first_index_at_or_after(z0) {
        Some(i) => i.saturating_sub(1),
        // Every point is behind the window
        None => return Ok(()),
    };

    let style = track.style();
    for i in start..points.len() - 1 {
        let (near_point, far_point) = (&points[i], &points[i + 1]);
        if near_point.z > z1 {
            break;
        }
        if far_point.z < z0 {
            continue;
        }
        let near = properties_at(track, near_point.z.max(z0))?;
        let far = properties_at(track, far_point.z.min(z1))?;
        let normal = near.normal();
        style.draw_segment(&near, &far, normal);
    }

    for point in &points[start..] {
        if point.z > z1 {
            break;
        }
        if point.z < z0 {
            continue;
        }
        for (_, scenery) in point.scenery() {
            let position = scenery.world_position(point);
            if let SceneryPayload::Light(params) = &scenery.payload {
                if params.light_id.get().is_none() {
                    let id =
                        lights.create_light(position, params.color, params.radius, params.intensity);
                    params.light_id.set(Some(id));
                }
            }
            registry.dispatch(scenery, point, position);
        }
    }
    Ok(())
}

/// Draw the catalog's active path, if any.
///
/// No active selection is a quiet no-op - the world simply has nothing
/// to show yet.
pub fn draw_active(
    catalog: &PathCatalog,
    registry: &SceneryStyleRegistry,
    lights: &mut dyn LightFactory,
    z0: f32,
    z1: f32,
) -> Result<(), QueryError> {
    match catalog.active() {
        Some(track) => draw_path(track, registry, lights, z0, z1),
        None => Ok(()),
    }
}
