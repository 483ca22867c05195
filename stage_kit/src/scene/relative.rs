//! Paint-volume operations that need the scene graph.
//!
//! These connect a node-local [`PaintVolume`] to the rest of the scene:
//! building it from layout, moving it into an ancestor's space or eye
//! space, and reducing it to a pixel rectangle on the stage.

use glam::Mat4;
use crate::error::Result;
use crate::stage::Stage;
use crate::volume::{ActorBox, PaintVolume};
use super::scene_graph::{NodeKey, SceneGraph};

const SOURCE: &str = "stagekit::PaintVolume";

/// Size `volume` from `node`'s layout allocation.
///
/// Returns `Ok(false)` when the node has no allocation or a zero width or
/// height: such a node contributes nothing and the volume is left as is.
pub fn set_from_allocation(
    volume: &mut PaintVolume,
    graph: &dyn SceneGraph,
    node: NodeKey,
) -> Result<bool> {
    let Some((width, height)) = graph.allocated_extent(node) else {
        return Ok(false);
    };

    if width == 0.0 || height == 0.0 {
        return Ok(false);
    }

    volume.set_width(width)?;
    volume.set_height(height)?;
    Ok(true)
}

/// Build the node's own paint volume: its allocation, then every effect.
///
/// `None` if the node has no allocation or an effect cannot bound its
/// output.
pub fn default_paint_volume(graph: &dyn SceneGraph, node: NodeKey) -> Option<PaintVolume> {
    let mut volume = PaintVolume::new(Some(node));

    if !set_from_allocation(&mut volume, graph, node).ok()? {
        return None;
    }

    for effect in graph.effects(node) {
        if !effect.modify_paint_volume(&mut volume) {
            return None;
        }
    }
    Some(volume)
}

/// Move `volume` from its reference node's space into `ancestor`'s space,
/// or into eye space when `ancestor` is `None`.
///
/// On success the reference node becomes `ancestor`. If the node is not on
/// a stage and eye space was requested, nothing can be done: the volume is
/// left untouched and a warning is logged.
///
/// # Errors
///
/// - `InvalidState` if the volume has no reference node
/// - `MissingCoordinateSpace` if `ancestor` is not an ancestor of the node
pub fn transform_relative(
    volume: &mut PaintVolume,
    graph: &dyn SceneGraph,
    ancestor: Option<NodeKey>,
) -> Result<()> {
    let node = reference_node(volume, "transform_relative")?;

    let matrix = match ancestor {
        Some(ancestor) => graph.modelview_to_ancestor(node, ancestor).ok_or_else(|| {
            crate::stagekit_err!(
                MissingCoordinateSpace,
                SOURCE,
                "{:?} is not an ancestor of {:?}",
                ancestor,
                node
            )
        })?,
        None => {
            let Some(stage) = graph.stage_of(node) else {
                crate::stagekit_warn!(
                    SOURCE,
                    "node {:?} is not on a stage; volume left in its local space",
                    node
                );
                return Ok(());
            };
            eye_matrix(graph, stage, node)?
        }
    };

    volume.transform(&matrix);
    volume.set_reference_node(ancestor);
    Ok(())
}

/// Pixel rectangle covered by `volume` on `stage`.
///
/// The volume is projected on a copy, so the caller's volume is untouched.
/// A volume with no reference node is taken to be in eye space already.
pub fn stage_paint_box(
    volume: &PaintVolume,
    stage: &Stage,
    graph: &dyn SceneGraph,
) -> Result<ActorBox> {
    let modelview = match volume.reference_node() {
        Some(node) => eye_matrix(graph, stage, node)?,
        None => Mat4::IDENTITY,
    };

    let mut projected = volume.clone();
    projected.project(&modelview, stage.projection(), stage.viewport());

    let mut paint_box = projected.bounding_box();
    paint_box.clamp_to_pixel();
    Ok(paint_box)
}

/// Node space → eye space: the node's modelview up to the stage root,
/// followed by the stage's own stage-to-eye transform.
pub(crate) fn eye_matrix(graph: &dyn SceneGraph, stage: &Stage, node: NodeKey) -> Result<Mat4> {
    let to_stage = graph.modelview_to_ancestor(node, stage.root()).ok_or_else(|| {
        crate::stagekit_err!(
            MissingCoordinateSpace,
            SOURCE,
            "node {:?} is not under stage root {:?}",
            node,
            stage.root()
        )
    })?;
    Ok(*stage.eye_transform() * to_stage)
}

fn reference_node(volume: &PaintVolume, op: &str) -> Result<NodeKey> {
    volume.reference_node().ok_or_else(|| {
        crate::stagekit_err!(
            InvalidState,
            SOURCE,
            "{} needs a volume expressed in a node's local space",
            op
        )
    })
}

#[cfg(test)]
#[path = "relative_tests.rs"]
mod tests;
