//! Paint volume module
//!
//! The bounding-volume core: the lazily completed 8-vertex box, its
//! mutators, union, transform/projection, axis realignment, frustum
//! classification and 2D reduction, plus per-frame scratch storage.

mod paint_volume;
mod union;
mod transform;
mod cull;
mod actor_box;
mod volume_stack;

pub use paint_volume::{PaintVolume, VolumeFlags, KEY_VERTICES};
pub use cull::CullResult;
pub use actor_box::ActorBox;
pub use volume_stack::{VolumeStack, VolumeSlot};

pub(crate) use transform::fully_transform_point;
