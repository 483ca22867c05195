/// SceneTree: minimal in-memory node tree implementing [`SceneGraph`].
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Each node keeps
/// its local transform (node space → parent space), its layout allocation
/// and its paint effects. Stages are attached to root nodes.

use glam::Mat4;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use crate::error::Result;
use crate::stage::Stage;
use super::effect::PaintEffect;
use super::scene_graph::{NodeKey, SceneGraph};

const SOURCE: &str = "stagekit::SceneTree";

struct SceneNode {
    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
    /// Node space → parent space
    transform: Mat4,
    allocation: Option<(f32, f32)>,
    effects: Vec<Box<dyn PaintEffect>>,
}

/// Scene node tree with attached stages
pub struct SceneTree {
    nodes: SlotMap<NodeKey, SceneNode>,
    /// Stages indexed by their root node
    stages: FxHashMap<NodeKey, Stage>,
}

impl SceneTree {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            stages: FxHashMap::default(),
        }
    }

    /// Create a root node sized `width` × `height` with a default-perspective
    /// stage attached to it.
    pub fn create_stage(&mut self, width: f32, height: f32) -> NodeKey {
        let root = self.nodes.insert(SceneNode {
            parent: None,
            children: Vec::new(),
            transform: Mat4::IDENTITY,
            allocation: Some((width, height)),
            effects: Vec::new(),
        });
        self.stages.insert(root, Stage::with_default_perspective(root, width, height));
        root
    }

    /// Attach (or replace) a stage. Its root must be a live root node.
    pub fn set_stage(&mut self, stage: Stage) -> Result<()> {
        let root = stage.root();
        match self.nodes.get(root) {
            Some(node) if node.parent.is_none() => {
                self.stages.insert(root, stage);
                Ok(())
            }
            Some(_) => Err(crate::stagekit_err!(
                InvalidArgument,
                SOURCE,
                "stage root {:?} has a parent",
                root
            )),
            None => Err(Self::unknown(root)),
        }
    }

    pub fn stage(&self, root: NodeKey) -> Option<&Stage> {
        self.stages.get(&root)
    }

    pub fn stage_mut(&mut self, root: NodeKey) -> Option<&mut Stage> {
        self.stages.get_mut(&root)
    }

    /// Create a node, optionally under `parent`
    pub fn create_node(&mut self, parent: Option<NodeKey>, transform: Mat4) -> Result<NodeKey> {
        if let Some(parent) = parent {
            if !self.nodes.contains_key(parent) {
                return Err(Self::unknown(parent));
            }
        }

        let key = self.nodes.insert(SceneNode {
            parent,
            children: Vec::new(),
            transform,
            allocation: None,
            effects: Vec::new(),
        });

        if let Some(parent) = parent {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.children.push(key);
            }
        }
        Ok(key)
    }

    /// Remove a node and its whole subtree. Returns false if the key is invalid.
    pub fn remove_node(&mut self, key: NodeKey) -> bool {
        let Some(parent) = self.nodes.get(key).map(|node| node.parent) else {
            return false;
        };

        if let Some(parent) = parent {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.children.retain(|&child| child != key);
            }
        }

        let mut pending = vec![key];
        while let Some(current) = pending.pop() {
            if let Some(removed) = self.nodes.remove(current) {
                pending.extend(removed.children);
            }
            self.stages.remove(&current);
        }
        true
    }

    pub fn set_transform(&mut self, key: NodeKey, transform: Mat4) -> Result<()> {
        self.node_mut(key)?.transform = transform;
        Ok(())
    }

    pub fn transform(&self, key: NodeKey) -> Option<&Mat4> {
        self.nodes.get(key).map(|node| &node.transform)
    }

    /// Set the layout allocation (`None` = not allocated)
    pub fn set_allocation(&mut self, key: NodeKey, allocation: Option<(f32, f32)>) -> Result<()> {
        self.node_mut(key)?.allocation = allocation;
        Ok(())
    }

    pub fn add_effect<E: PaintEffect + 'static>(&mut self, key: NodeKey, effect: E) -> Result<()> {
        self.node_mut(key)?.effects.push(Box::new(effect));
        Ok(())
    }

    pub fn parent(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key).and_then(|node| node.parent)
    }

    /// Topmost ancestor of `key` (itself if it is a root)
    pub fn root_of(&self, key: NodeKey) -> Option<NodeKey> {
        let mut current = key;
        loop {
            match self.nodes.get(current)?.parent {
                Some(parent) => current = parent,
                None => return Some(current),
            }
        }
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_mut(&mut self, key: NodeKey) -> Result<&mut SceneNode> {
        self.nodes.get_mut(key).ok_or_else(|| Self::unknown(key))
    }

    fn unknown(key: NodeKey) -> crate::error::Error {
        crate::stagekit_err!(UnknownNode, SOURCE, "node {:?} does not exist", key)
    }
}

impl Default for SceneTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph for SceneTree {
    fn allocated_extent(&self, node: NodeKey) -> Option<(f32, f32)> {
        self.nodes.get(node)?.allocation
    }

    fn modelview_to_ancestor(&self, node: NodeKey, ancestor: NodeKey) -> Option<Mat4> {
        let mut matrix = Mat4::IDENTITY;
        let mut current = node;
        loop {
            if current == ancestor {
                return Some(matrix);
            }
            let scene_node = self.nodes.get(current)?;
            matrix = scene_node.transform * matrix;
            current = scene_node.parent?;
        }
    }

    fn stage_of(&self, node: NodeKey) -> Option<&Stage> {
        self.stages.get(&self.root_of(node)?)
    }

    fn children(&self, node: NodeKey) -> &[NodeKey] {
        self.nodes.get(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    fn effects(&self, node: NodeKey) -> &[Box<dyn PaintEffect>] {
        self.nodes.get(node).map(|n| n.effects.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
#[path = "scene_tree_tests.rs"]
mod tests;
