//! Randomized instancing of a source object across target vertices.
use glam::Vec3;

pub mod config;
pub mod engine;
pub mod events;
pub mod host;
pub mod placement;
pub mod range;
pub mod selection;

pub type ObjectId = String;

/// A local coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector along this axis.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// A candidate vertex to place an instance on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPoint {
    /// World-space position of the vertex.
    pub position: Vec3,
    /// Surface normal at the vertex, if the host provides one.
    pub normal: Option<Vec3>,
}

impl TargetPoint {
    pub fn new(position: impl Into<Vec3>) -> Self {
        Self {
            position: position.into(),
            normal: None,
        }
    }

    pub fn with_normal(mut self, normal: impl Into<Vec3>) -> Self {
        self.normal = Some(normal.into());
        self
    }
}
