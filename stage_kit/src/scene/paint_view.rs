/// PaintView: result of culling a stage.
///
/// Created by a [`PaintCuller`](super::PaintCuller). Lists the nodes to
/// paint, in depth-first paint order, with their classification and pixel
/// box. Ephemeral: lives for one frame.

use rustc_hash::FxHashMap;
use crate::volume::{ActorBox, CullResult};
use super::scene_graph::NodeKey;

/// One node to paint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintEntry {
    pub node: NodeKey,
    /// `None` when the node was not tested (no bounded volume, or a culler
    /// that does not test)
    pub result: Option<CullResult>,
    /// Stage pixel box of the node's volume, when it has one
    pub paint_box: Option<ActorBox>,
}

#[derive(Debug, Clone, Default)]
pub struct PaintView {
    entries: Vec<PaintEntry>,
    index: FxHashMap<NodeKey, usize>,
    culled: usize,
}

impl PaintView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: PaintEntry) {
        self.index.insert(entry.node, self.entries.len());
        self.entries.push(entry);
    }

    pub(crate) fn add_culled(&mut self, count: usize) {
        self.culled += count;
    }

    /// Nodes to paint, in paint order
    pub fn visible(&self) -> &[PaintEntry] {
        &self.entries
    }

    pub fn visible_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, node: NodeKey) -> Option<&PaintEntry> {
        self.index.get(&node).map(|&i| &self.entries[i])
    }

    pub fn is_visible(&self, node: NodeKey) -> bool {
        self.index.contains_key(&node)
    }

    /// Number of nodes skipped, including whole culled subtrees
    pub fn culled_count(&self) -> usize {
        self.culled
    }
}

#[cfg(test)]
#[path = "paint_view_tests.rs"]
mod tests;
