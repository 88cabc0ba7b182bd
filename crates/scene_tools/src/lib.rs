#![forbid(unsafe_code)]
//! scene_tools: versioned scene-file naming and randomized vertex scattering.
//!
//! Modules:
//! - scenefile: parse/render `{descriptor}_{task}_v{version}{ext}` names, find the next free version, save with folder creation
//! - scatter: select covered targets, draw per-axis scale/rotation, align/push-in, replay onto a scene host
//!
//! Host applications plug in through the [`scenefile::fs::FileSystem`] and
//! [`scatter::host::SceneHost`] traits.
pub mod error;
mod random;
pub mod scatter;
pub mod scenefile;

/// Convenient re-exports for common types. Import with `use scene_tools::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::scatter::config::ScatterConfig;
    pub use crate::scatter::engine::{scatter, scatter_with_events};
    pub use crate::scatter::events::{EventSink, FnSink, ScatterEvent, ScatterEventKind, VecSink};
    pub use crate::scatter::host::{
        apply_directives, HostCall, RecordingHost, SceneHost, ScatterSession,
    };
    pub use crate::scatter::placement::{PlacementDirective, PlacementStep, ResolvedTransform};
    pub use crate::scatter::range::AxisRange;
    pub use crate::scatter::selection::{select_targets, target_count};
    pub use crate::scatter::{Axis, ObjectId, TargetPoint};
    pub use crate::scenefile::fs::{FileSystem, LocalFileSystem, MemoryFileSystem};
    pub use crate::scenefile::save::{increment_and_save, save};
    pub use crate::scenefile::version::{matching_version, next_available_version};
    pub use crate::scenefile::{SceneFile, SceneFileName};
}
