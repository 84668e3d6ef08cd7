//! Rendering styles and scenery dispatch
//!
//! The path network never draws anything itself - the renderer and
//! lighting engine live outside. Integration happens through three
//! small traits:
//!
//! - [`PathStyle`]: bound per path, draws one interpolated segment
//! - [`SceneryStyle`]: registered per scenery type id, draws one
//!   attachment
//! - [`LightFactory`]: allocates lights in the lighting engine the
//!   first time a light attachment is seen
//!
//! [`dispatch::draw_path`] ties them together: it walks the visible
//! segments of a track, feeds the bound style, and routes every
//! attachment through the [`SceneryStyleRegistry`]. Types with no
//! registered style draw nothing - event markers and junction triggers
//! are invisible on purpose.

pub mod dispatch;
pub mod registry;

pub use dispatch::{draw_active, draw_path};
pub use registry::SceneryStyleRegistry;

use crate::math::{Color, Vec3};
use crate::path::{ControlPoint, Scenery};
use crate::query::PathProperties;

/// Id of a light allocated by the external lighting engine
pub type LightId = u32;

/// Master draw strategy bound to one path.
///
/// Called once per visible segment with the interpolated property sets
/// at the segment's near and far ends. Implementations usually push
/// road geometry into the renderer; `&self` because dispatch runs
/// while the track is borrowed - stateful styles keep interior
/// mutability or a command queue.
pub trait PathStyle {
    fn draw_segment(&self, near: &PathProperties<'_>, far: &PathProperties<'_>, normal: Vec3);
}

/// Built-in stand-in style: draws nothing.
///
/// Bound to every new track until the game installs a renderer-backed
/// style, and restored by `set_style(None)`.
#[derive(Debug, Default)]
pub struct DefaultStyle;

impl PathStyle for DefaultStyle {
    fn draw_segment(&self, _near: &PathProperties<'_>, _far: &PathProperties<'_>, _normal: Vec3) {}
}

/// Draw strategy for one scenery type id
pub trait SceneryStyle {
    fn draw(&self, scenery: &Scenery, owner: &ControlPoint, position: Vec3);
}

/// Lazily allocates lights for light scenery.
///
/// Dispatch calls this once per light attachment, the first time the
/// attachment comes into view, and caches the returned id in the
/// attachment so the lighting engine is never asked twice.
pub trait LightFactory {
    fn create_light(&mut self, position: Vec3, color: Color, radius: f32, intensity: f32)
        -> LightId;
}

/// No-op light factory for worlds without dynamic lighting
#[derive(Debug, Default)]
pub struct NullLights;

impl LightFactory for NullLights {
    fn create_light(
        &mut self,
        _position: Vec3,
        _color: Color,
        _radius: f32,
        _intensity: f32,
    ) -> LightId {
        0
    }
}
