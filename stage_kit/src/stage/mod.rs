//! Stage module: stage description and clip planes.
//!
//! Passive data containers consumed by the paint-volume pipeline. The
//! toolkit never owns a stage on its own; the scene tree (or the caller)
//! does.

mod frustum;
mod stage;

pub use frustum::{Frustum, Plane, PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP};
pub use stage::{
    Stage, Viewport, view_2d_in_perspective,
    DEFAULT_FOVY, DEFAULT_Z_NEAR, DEFAULT_Z_FAR, DEFAULT_Z_2D,
};
