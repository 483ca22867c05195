//! Scene module
//!
//! The node-tree seam ([`SceneGraph`]), a minimal tree implementing it,
//! paint effects, the node-relative paint-volume operations and the stage
//! culling strategies.

mod scene_graph;
mod scene_tree;
mod effect;
mod relative;
mod paint_view;
mod culler;

pub use scene_graph::{NodeKey, SceneGraph};
pub use scene_tree::SceneTree;
pub use effect::{PaintEffect, PaddingEffect, UnboundedEffect};
pub use relative::{set_from_allocation, default_paint_volume, transform_relative, stage_paint_box};
pub use paint_view::{PaintView, PaintEntry};
pub use culler::{PaintCuller, BruteForceCuller, FrustumCuller};
