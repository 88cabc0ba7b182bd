//! Placement directives produced by the scatter engine.
//!
//! A [`PlacementDirective`] fixes an instance's position and scale and lists the
//! orientation steps to replay afterwards, in order. Steps are relative to the
//! instance's current state, so their order matters: a rotation after an alignment
//! spins the instance around its aligned local axes.
use glam::{EulerRot, Mat4, Quat, Vec3};

/// One orientation or offset step applied after position and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementStep {
    /// One-shot solve turning local `axis` onto the (unit) surface `normal`.
    AlignToNormal { axis: Vec3, normal: Vec3 },
    /// Move `distance` along the local `direction`.
    PushIn { direction: Vec3, distance: f32 },
    /// Relative rotation in local space, degrees per axis.
    Rotate { degrees: Vec3 },
}

/// Where and how to create one instance of the source object.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementDirective {
    /// Index of the target in the list passed to the engine.
    pub target_index: usize,
    pub position: Vec3,
    pub scale: Vec3,
    pub steps: Vec<PlacementStep>,
}

/// Final transform after folding all steps of a directive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl ResolvedTransform {
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl PlacementDirective {
    /// Random rotation applied by this directive, if any.
    pub fn rotation(&self) -> Option<Vec3> {
        self.steps.iter().find_map(|s| match s {
            PlacementStep::Rotate { degrees } => Some(*degrees),
            _ => None,
        })
    }

    /// Surface normal the instance is aligned to, if any.
    pub fn aligned_normal(&self) -> Option<Vec3> {
        self.steps.iter().find_map(|s| match s {
            PlacementStep::AlignToNormal { normal, .. } => Some(*normal),
            _ => None,
        })
    }

    /// Push-in distance, if any.
    pub fn push_in_offset(&self) -> Option<f32> {
        self.steps.iter().find_map(|s| match s {
            PlacementStep::PushIn { distance, .. } => Some(*distance),
            _ => None,
        })
    }

    /// Folds position, scale and steps into a single transform.
    pub fn resolve(&self) -> ResolvedTransform {
        let mut translation = self.position;
        let mut rotation = Quat::IDENTITY;
        for step in &self.steps {
            match *step {
                PlacementStep::AlignToNormal { axis, normal } => {
                    rotation = Quat::from_rotation_arc(axis, normal);
                }
                PlacementStep::PushIn {
                    direction,
                    distance,
                } => {
                    translation += rotation * direction * distance;
                }
                PlacementStep::Rotate { degrees } => {
                    rotation = (rotation * euler_degrees_to_quat(degrees)).normalize();
                }
            }
        }
        ResolvedTransform {
            translation,
            rotation,
            scale: self.scale,
        }
    }
}

/// Rotation of `degrees` applied about X, then Y, then Z.
pub fn euler_degrees_to_quat(degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::ZYX,
        degrees.z.to_radians(),
        degrees.y.to_radians(),
        degrees.x.to_radians(),
    )
}
