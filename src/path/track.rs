//! Path track: one spline's point storage and segment lookup
//!
//! A track owns its control points (ordered by z), an optional loop
//! wrap target, and the rendering style bound to it. It also carries
//! the sticky segment cursor that makes sequential per-frame lookups
//! cheap.
//!
//! Two lookup tiers:
//! - `seek` walks from the cursor, amortized O(1) while queries move
//!   forward along z (a player advancing down the path)
//! - `first_index_at_or_after` is a stateless binary search for
//!   queries that jump into the middle of the track
//!
//! The cursor only affects cost, never results: any starting cursor
//! converges to the same segment for a given z.

use std::cell::Cell;
use std::fmt;

use super::limits;
use super::point::ControlPoint;
use crate::style::{DefaultStyle, PathStyle};

/// Error type for track mutation
#[derive(Debug)]
pub enum TrackError {
    /// Point z is smaller than the previous point's z
    OutOfOrder { z: f32, previous: f32 },
    /// Point carries a non-finite or out-of-range field
    InvalidPoint(String),
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackError::OutOfOrder { z, previous } => {
                write!(f, "control point z {} is behind previous z {}", z, previous)
            }
            TrackError::InvalidPoint(e) => write!(f, "invalid control point: {}", e),
        }
    }
}

/// Check if a float is valid (not NaN or Inf)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

/// Validate a control point's geometry fields
fn validate_point(point: &ControlPoint) -> Result<(), String> {
    let fields = [
        ("z", point.z),
        ("lateral", point.lateral),
        ("elevation", point.elevation),
        ("roll", point.roll),
        ("width", point.width),
        ("split_offset", point.split_offset),
        ("split_width", point.split_width),
        ("rumble_width", point.rumble_width),
    ];
    for (name, value) in fields {
        if !is_valid_float(value) {
            return Err(format!("{} is {}", name, value));
        }
    }
    if point.width < 0.0 || point.split_width < 0.0 || point.rumble_width < 0.0 {
        return Err("widths must not be negative".to_string());
    }
    Ok(())
}

/// A named spline of control points.
///
/// Created through [`PathCatalog::create`](super::PathCatalog::create)
/// (or standalone for tools and tests), then populated by appending
/// points in non-decreasing z order.
pub struct PathTrack {
    name: String,
    points: Vec<ControlPoint>,
    /// Wrap target: queries past the last point restart here
    loop_to_z: Option<f32>,
    /// Sticky segment cursor; a Cell so read-only queries can update it
    cursor: Cell<usize>,
    style: Option<Box<dyn PathStyle>>,
}

static DEFAULT_STYLE: DefaultStyle = DefaultStyle;

impl PathTrack {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::with_capacity(limits::POINT_SEED_CAPACITY),
            loop_to_z: None,
            cursor: Cell::new(0),
            style: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a control point at the end of the track.
    ///
    /// Points must arrive in non-decreasing z order (equal z is fine);
    /// anything else would silently corrupt segment lookup, so it is
    /// rejected here instead.
    pub fn add_control_point(&mut self, point: ControlPoint) -> Result<(), TrackError> {
        validate_point(&point).map_err(TrackError::InvalidPoint)?;
        if let Some(last) = self.points.last() {
            if point.z < last.z {
                return Err(TrackError::OutOfOrder {
                    z: point.z,
                    previous: last.z,
                });
            }
        }
        self.points.push(point);
        Ok(())
    }

    /// Bind a rendering style; `None` restores the built-in default
    pub fn set_style(&mut self, style: Option<Box<dyn PathStyle>>) {
        self.style = style;
    }

    /// The bound style, or the built-in default when none is bound
    pub fn style(&self) -> &dyn PathStyle {
        self.style.as_deref().unwrap_or(&DEFAULT_STYLE)
    }

    /// Enable looping back to `z` after the last point, or disable
    /// with `None`
    pub fn set_looping(&mut self, loop_to_z: Option<f32>) {
        self.loop_to_z = loop_to_z;
    }

    pub fn loop_to_z(&self) -> Option<f32> {
        self.loop_to_z
    }

    /// Distance from the wrap target to the last point, when looping
    /// is enabled and the span is positive
    pub fn loop_length(&self) -> Option<f32> {
        let loop_to = self.loop_to_z?;
        let last = self.points.last()?;
        let len = last.z - loop_to;
        if len > f32::EPSILON {
            Some(len)
        } else {
            None
        }
    }

    /// Map a query z into the track's domain when looping is enabled
    pub(crate) fn normalize_z(&self, z: f32) -> f32 {
        if !z.is_finite() {
            return z;
        }
        let len = match self.loop_length() {
            Some(len) => len,
            None => return z,
        };
        let last_z = self.points[self.points.len() - 1].z;
        let mut z = z;
        while z >= last_z {
            z -= len;
        }
        z
    }

    /// Sticky segment lookup: index of the point bracketing `z` from
    /// the left (the largest index whose z is <= the query, or 0).
    ///
    /// Walks forward then backward from the cached cursor and stores
    /// the result, so monotone query sequences touch O(1) points.
    pub(crate) fn seek(&self, z: f32) -> usize {
        if self.points.is_empty() {
            return 0;
        }
        let last = self.points.len() - 1;
        let mut i = self.cursor.get().min(last);
        while i < last && self.points[i + 1].z <= z {
            i += 1;
        }
        while i > 0 && self.points[i].z > z {
            i -= 1;
        }
        self.cursor.set(i);
        i
    }

    pub(crate) fn reset_cursor(&self) {
        self.cursor.set(0);
    }

    /// Smallest index whose point z is >= `z`, or `None` when every
    /// point lies before it. Stateless; leaves the cursor alone.
    pub fn first_index_at_or_after(&self, z: f32) -> Option<usize> {
        let i = self.points.partition_point(|p| p.z < z);
        if i == self.points.len() {
            None
        } else {
            Some(i)
        }
    }
}

impl fmt::Debug for PathTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathTrack")
            .field("name", &self.name)
            .field("points", &self.points.len())
            .field("loop_to_z", &self.loop_to_z)
            .finish()
    }
}
