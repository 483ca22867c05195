/// Scratch storage for per-frame paint volumes.
///
/// A traversal needs a handful of temporary volumes per visited node.
/// Rather than allocating each one, the stack hands out slots from a pool
/// that only ever grows; `free_all()` at the end of the traversal makes
/// every slot reusable without dropping the backing storage.
///
/// # Example
///
/// ```ignore
/// let mut stack = VolumeStack::new();
/// let a = stack.allocate(Some(node));   // slot 0
/// let b = stack.allocate_copy(&volume); // slot 1
/// stack.free_all();
/// let c = stack.allocate(None);         // slot 0 again, reset to empty
/// ```

use crate::scene::NodeKey;
use crate::toolkit::Toolkit;
use super::paint_volume::PaintVolume;

/// Handle to a volume owned by a [`VolumeStack`].
///
/// Only valid until the next `free_all()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VolumeSlot(u32);

impl VolumeSlot {
    pub fn index(&self) -> u32 {
        self.0
    }
}

pub struct VolumeStack {
    volumes: Vec<PaintVolume>,
    len: u32,
}

impl VolumeStack {
    /// Create a stack pre-sized from `ToolkitConfig::volume_stack_capacity`
    pub fn new() -> Self {
        Self::with_capacity(Toolkit::config().volume_stack_capacity)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            volumes: Vec::with_capacity(capacity),
            len: 0,
        }
    }

    /// Take the next slot, reset to a fresh empty volume
    pub fn allocate(&mut self, reference_node: Option<NodeKey>) -> VolumeSlot {
        let index = self.len as usize;
        if index < self.volumes.len() {
            self.volumes[index].reset(reference_node);
        } else {
            self.volumes.push(PaintVolume::new(reference_node));
        }
        self.len += 1;
        VolumeSlot(index as u32)
    }

    /// Take the next slot and fill it with a copy of `source`
    pub fn allocate_copy(&mut self, source: &PaintVolume) -> VolumeSlot {
        let slot = self.allocate(None);
        self.volumes[slot.0 as usize].set_from_volume(source);
        slot
    }

    pub fn get(&self, slot: VolumeSlot) -> Option<&PaintVolume> {
        if slot.0 < self.len {
            self.volumes.get(slot.0 as usize)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, slot: VolumeSlot) -> Option<&mut PaintVolume> {
        if slot.0 < self.len {
            self.volumes.get_mut(slot.0 as usize)
        } else {
            None
        }
    }

    /// Release every slot at once. Storage is kept for the next frame.
    pub fn free_all(&mut self) {
        self.len = 0;
    }

    /// Number of slots handed out since the last `free_all()`
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Most slots ever live at once (size of the backing pool)
    pub fn high_water_mark(&self) -> u32 {
        self.volumes.len() as u32
    }
}

impl Default for VolumeStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "volume_stack_tests.rs"]
mod tests;
