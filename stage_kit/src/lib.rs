/*!
# StageKit

Paint-volume core for a retained-mode 2.5D scene toolkit.

Every scene node paints inside a 3D box, its *paint volume*. This crate
builds those boxes from layout allocations and paint effects, merges them up
the node tree, moves them between coordinate spaces, projects them to window
pixels and classifies them against the stage's clip planes so that
off-screen subtrees are skipped.

## Architecture

- **PaintVolume**: lazily completed 8-vertex box with union, transform,
  projection, axis realignment and culling
- **VolumeStack**: per-frame scratch pool of volumes
- **Stage**: projection, viewport, stage-to-eye transform and clip frustum
- **SceneGraph**: what the pipeline needs to know about a node tree
  (`SceneTree` is a ready-made implementation)
- **PaintCuller**: per-frame traversal producing a `PaintView`
*/

// Internal modules
mod error;
mod toolkit;
pub mod log;
pub mod volume;
pub mod stage;
pub mod scene;

// Main stagekit namespace module
pub mod stagekit {
    // Error types
    pub use crate::error::{Error, Result};

    // Toolkit singleton
    pub use crate::toolkit::{Toolkit, ToolkitConfig};

    // Logging sub-module (types only; the stagekit_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, format_entry};
    }

    pub mod volume {
        pub use crate::volume::*;
    }

    pub mod stage {
        pub use crate::stage::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
