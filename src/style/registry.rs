//! Scenery style registry
//!
//! A fixed-size table from scenery type id to draw strategy. The id
//! space is bounded: built-ins below
//! [`scenery_type::USER_BASE`](crate::path::scenery_type), game types
//! above, everything under [`scenery_type::MAX_TYPES`]. The registry
//! is an owned value - create one per world, pass it to dispatch -
//! never process-global state.

use super::SceneryStyle;
use crate::math::Vec3;
use crate::path::{scenery_type, ControlPoint, Scenery};

/// Table of per-type scenery draw strategies
pub struct SceneryStyleRegistry {
    styles: Vec<Option<Box<dyn SceneryStyle>>>,
}

impl SceneryStyleRegistry {
    pub fn new() -> Self {
        let mut styles = Vec::new();
        styles.resize_with(scenery_type::MAX_TYPES as usize, || None);
        Self { styles }
    }

    /// Install the draw strategy for a type id.
    ///
    /// An id outside the bounded type space is silently ignored; that
    /// is part of the extensibility contract, not an error.
    pub fn register(&mut self, type_id: u16, style: Box<dyn SceneryStyle>) {
        if let Some(slot) = self.styles.get_mut(type_id as usize) {
            *slot = Some(style);
        }
    }

    /// Remove a type's draw strategy, restoring the silent no-op
    pub fn unregister(&mut self, type_id: u16) {
        if let Some(slot) = self.styles.get_mut(type_id as usize) {
            *slot = None;
        }
    }

    pub fn get(&self, type_id: u16) -> Option<&dyn SceneryStyle> {
        self.styles.get(type_id as usize)?.as_deref()
    }

    /// Draw one attachment through its registered style.
    ///
    /// Unregistered or out-of-range types draw nothing - correct for
    /// purely logical scenery like event markers and junction
    /// triggers.
    pub fn dispatch(&self, scenery: &Scenery, owner: &ControlPoint, position: Vec3) {
        if let Some(style) = self.get(scenery.type_id()) {
            style.draw(scenery, owner, position);
        }
    }
}

impl Default for SceneryStyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
