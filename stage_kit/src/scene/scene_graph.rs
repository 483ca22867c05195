/// SceneGraph: what the paint-volume pipeline needs from a node tree.
///
/// The toolkit does not own the node tree's semantics (layout, properties,
/// signals). It only asks a handful of geometric questions about nodes,
/// identified by stable slotmap keys.

use glam::Mat4;
use slotmap::new_key_type;
use crate::stage::Stage;
use super::effect::PaintEffect;

new_key_type! {
    /// Stable, non-owning handle to a scene node.
    ///
    /// A key whose node was removed simply stops resolving; it never
    /// dangles.
    pub struct NodeKey;
}

/// Read-only geometric view of a scene-node tree
pub trait SceneGraph {
    /// Allocated (width, height) of the node from layout.
    /// `None` if the node has no allocation or does not exist.
    fn allocated_extent(&self, node: NodeKey) -> Option<(f32, f32)>;

    /// Accumulated transform from `node`'s local space to `ancestor`'s space.
    ///
    /// The ancestor's own transform is not included. `None` if `ancestor`
    /// is neither `node` nor one of its ancestors.
    fn modelview_to_ancestor(&self, node: NodeKey, ancestor: NodeKey) -> Option<Mat4>;

    /// Stage the node is attached to, if any
    fn stage_of(&self, node: NodeKey) -> Option<&Stage>;

    /// Children in paint order
    fn children(&self, node: NodeKey) -> &[NodeKey];

    /// Effects attached to the node, in application order
    fn effects(&self, node: NodeKey) -> &[Box<dyn PaintEffect>];
}
