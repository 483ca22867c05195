/// Stage culling strategies.
///
/// A PaintCuller walks a stage's node tree and decides which nodes need
/// painting. Implementations range from brute-force (paint everything) to
/// paint-volume frustum culling.

use rustc_hash::FxHashMap;
use crate::stage::Stage;
use crate::toolkit::Toolkit;
use crate::volume::{CullResult, VolumeSlot, VolumeStack};
use super::paint_view::{PaintEntry, PaintView};
use super::relative::{default_paint_volume, eye_matrix, stage_paint_box, transform_relative};
use super::scene_graph::{NodeKey, SceneGraph};

const SOURCE: &str = "stagekit::FrustumCuller";

/// Strategy for determining which nodes of a stage to paint.
///
/// Called once per frame. `&mut self` lets implementations keep scratch
/// storage alive across frames.
pub trait PaintCuller {
    /// Walk the tree under `stage.root()` and return the nodes to paint
    fn cull(&mut self, graph: &dyn SceneGraph, stage: &Stage) -> PaintView;
}

/// Brute-force culler: paints every node and tests nothing.
///
/// Paint boxes are still reported for nodes with a bounded volume of
/// their own.
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BruteForceCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintCuller for BruteForceCuller {
    fn cull(&mut self, graph: &dyn SceneGraph, stage: &Stage) -> PaintView {
        let mut view = PaintView::new();
        let mut pending = vec![stage.root()];

        while let Some(node) = pending.pop() {
            let paint_box = default_paint_volume(graph, node)
                .and_then(|volume| stage_paint_box(&volume, stage, graph).ok());
            view.push(PaintEntry { node, result: None, paint_box });

            // Reverse so children pop in paint order
            pending.extend(graph.children(node).iter().rev());
        }
        view
    }
}

/// Per-node volume computed by the bottom-up pass
#[derive(Debug, Clone, Copy)]
enum NodeVolume {
    /// Node and its subtree paint inside this volume (node space)
    Bounded(VolumeSlot),
    /// Something in the subtree cannot be bounded; never cull
    Unbounded,
}

/// Frustum culler: tests each node's paint volume against the stage's
/// clip planes.
///
/// A node's volume encloses its own allocation (grown by its effects) and
/// the volumes of all its descendants, so an `Out` node skips its whole
/// subtree and an `In` node accepts its whole subtree untested.
pub struct FrustumCuller {
    stack: VolumeStack,
    volumes: FxHashMap<NodeKey, NodeVolume>,
}

impl FrustumCuller {
    pub fn new() -> Self {
        Self {
            stack: VolumeStack::new(),
            volumes: FxHashMap::default(),
        }
    }

    /// Largest number of scratch volumes used by a single frame so far
    pub fn scratch_high_water_mark(&self) -> u32 {
        self.stack.high_water_mark()
    }

    /// Bottom-up: compute the subtree volume of `node` in its own space.
    fn compute_volume(&mut self, graph: &dyn SceneGraph, node: NodeKey) -> NodeVolume {
        let slot = self.stack.allocate(Some(node));
        let mut bounded = true;

        match default_paint_volume(graph, node) {
            Some(own) => {
                if let Some(volume) = self.stack.get_mut(slot) {
                    volume.set_from_volume(&own);
                }
            }
            None => {
                // No allocation is fine (contributes nothing); a vetoing
                // effect is not.
                let has_extent = graph
                    .allocated_extent(node)
                    .is_some_and(|(w, h)| w != 0.0 && h != 0.0);
                if has_extent {
                    bounded = false;
                }
            }
        }

        for &child in graph.children(node) {
            // Always recurse: the top-down pass needs every node's volume
            let NodeVolume::Bounded(child_slot) = self.compute_volume(graph, child) else {
                bounded = false;
                continue;
            };
            if !bounded {
                continue;
            }

            let Some(mut child_in_parent) = self.stack.get(child_slot).cloned() else {
                continue;
            };
            if child_in_parent.is_empty() {
                continue;
            }

            let merged = transform_relative(&mut child_in_parent, graph, Some(node)).and_then(|_| {
                match self.stack.get_mut(slot) {
                    Some(volume) => volume.union(&child_in_parent),
                    None => Ok(()),
                }
            });
            if merged.is_err() {
                crate::stagekit_warn!(SOURCE, "could not merge {:?} into {:?}", child, node);
                bounded = false;
            }
        }

        let result = if bounded { NodeVolume::Bounded(slot) } else { NodeVolume::Unbounded };
        self.volumes.insert(node, result);
        result
    }

    /// Top-down: classify `node` and decide whether to visit its children.
    fn cull_subtree(
        &self,
        graph: &dyn SceneGraph,
        stage: &Stage,
        node: NodeKey,
        parent_inside: bool,
        trace: bool,
        view: &mut PaintView,
    ) {
        let volume = match self.volumes.get(&node) {
            Some(NodeVolume::Bounded(slot)) => self.stack.get(*slot),
            _ => None,
        };

        let (result, paint_box) = match volume {
            Some(volume) => {
                let result = if volume.is_empty() {
                    CullResult::Out
                } else if parent_inside {
                    CullResult::In
                } else {
                    let mut eye = volume.clone();
                    match eye_matrix(graph, stage, node) {
                        Ok(matrix) => {
                            eye.transform(&matrix);
                            eye.set_reference_node(None);
                            stage.clip_frustum().classify(&eye)
                        }
                        Err(_) => CullResult::Partial,
                    }
                };

                if result == CullResult::Out {
                    let skipped = count_subtree(graph, node);
                    if trace {
                        crate::stagekit_trace!(SOURCE, "{:?} culled ({} nodes)", node, skipped);
                    }
                    view.add_culled(skipped);
                    return;
                }

                (Some(result), stage_paint_box(volume, stage, graph).ok())
            }
            None => (None, None),
        };

        if trace {
            crate::stagekit_trace!(SOURCE, "{:?} -> {:?}", node, result);
        }
        view.push(PaintEntry { node, result, paint_box });

        let inside = result == Some(CullResult::In);
        for &child in graph.children(node) {
            self.cull_subtree(graph, stage, child, inside, trace, view);
        }
    }
}

impl Default for FrustumCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintCuller for FrustumCuller {
    fn cull(&mut self, graph: &dyn SceneGraph, stage: &Stage) -> PaintView {
        let trace = Toolkit::config().trace_culling;
        let mut view = PaintView::new();

        self.compute_volume(graph, stage.root());
        self.cull_subtree(graph, stage, stage.root(), false, trace, &mut view);

        self.volumes.clear();
        self.stack.free_all();

        crate::stagekit_debug!(
            SOURCE,
            "{} nodes to paint, {} culled",
            view.visible_count(),
            view.culled_count()
        );
        view
    }
}

fn count_subtree(graph: &dyn SceneGraph, node: NodeKey) -> usize {
    1 + graph
        .children(node)
        .iter()
        .map(|&child| count_subtree(graph, child))
        .sum::<usize>()
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
