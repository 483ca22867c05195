/// Frustum culling of paint volumes.
///
/// A separating-plane test: each clip plane either rejects every vertex
/// (the volume is outside), rejects some (partial), or none. It never
/// reports `Out` for a volume that actually intersects the clip region, but
/// may report `Partial` for a volume that is outside near a frustum corner.

use crate::stage::Plane;
use super::paint_volume::PaintVolume;

const SOURCE: &str = "stagekit::PaintVolume";

/// Result of a 3-way volume/frustum classification.
///
/// - `Out` → skip the node (and, for container volumes, its subtree)
/// - `In` → paint without clipping
/// - `Partial` → paint, the volume straddles at least one plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullResult {
    /// Volume is entirely inside all clip planes
    In,
    /// Volume is entirely outside at least one clip plane
    Out,
    /// Volume straddles at least one clip plane
    Partial,
}

impl CullResult {
    /// Whether the node should be painted at all
    pub fn is_visible(&self) -> bool {
        !matches!(self, CullResult::Out)
    }
}

impl PaintVolume {
    /// Classify the volume against four clip planes.
    ///
    /// The volume must already be expressed in the planes' space (eye
    /// space): it has to be complete and carry no reference node. If that
    /// contract is broken the culler logs a warning and answers `In`, so a
    /// malformed volume can only cost a redundant paint, never a missing one.
    pub fn cull(&self, planes: &[Plane; 4]) -> CullResult {
        if self.is_empty() {
            return CullResult::Out;
        }

        if !self.is_complete() {
            crate::stagekit_warn!(SOURCE, "cull called on an incomplete volume; treating as visible");
            return CullResult::In;
        }
        if let Some(node) = self.reference_node {
            crate::stagekit_warn!(
                SOURCE,
                "cull called on a volume still in the local space of {:?}; treating as visible",
                node
            );
            return CullResult::In;
        }

        let vertices = &self.vertices[..self.vertex_count()];
        let mut partial = false;

        for plane in planes {
            let out = vertices
                .iter()
                .filter(|v| plane.signed_distance(**v) < 0.0)
                .count();

            if out == vertices.len() {
                return CullResult::Out;
            } else if out != 0 {
                partial = true;
            }
        }

        if partial { CullResult::Partial } else { CullResult::In }
    }
}

#[cfg(test)]
#[path = "cull_tests.rs"]
mod tests;
