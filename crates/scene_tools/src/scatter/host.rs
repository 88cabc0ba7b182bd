//! Scene host collaborator and replay of placement directives onto it.
use glam::Vec3;
use mint::Vector3;
use rand::RngCore;
use tracing::info;

use crate::error::{Error, Result};
use crate::scatter::config::ScatterConfig;
use crate::scatter::engine::scatter_with_events;
use crate::scatter::events::EventSink;
use crate::scatter::placement::{PlacementDirective, PlacementStep};
use crate::scatter::{ObjectId, TargetPoint};

/// Scene graph operations needed to scatter instances in a host application.
///
/// Rotations are Euler angles in degrees, applied about X, then Y, then Z.
pub trait SceneHost {
    /// Handle to a created instance.
    type Instance;

    /// Currently selected objects, in selection order.
    fn get_selection(&self) -> Result<Vec<ObjectId>>;

    /// Vertices of the current selection, with normals where available.
    fn vertices_of_selection(&self) -> Result<Vec<TargetPoint>>;

    fn create_instance(&mut self, source: &str) -> Result<Self::Instance>;

    /// Sets absolute position, scale and rotation.
    fn apply_transform(
        &mut self,
        instance: &Self::Instance,
        position: Vector3<f32>,
        scale: Vector3<f32>,
        rotation: Vector3<f32>,
    ) -> Result<()>;

    /// Orients local `axis` along `normal` once, without keeping a constraint.
    fn align_to_normal(
        &mut self,
        instance: &Self::Instance,
        axis: Vector3<f32>,
        normal: Vector3<f32>,
    ) -> Result<()>;

    /// Moves `distance` along the instance's local `axis`.
    fn translate_local(
        &mut self,
        instance: &Self::Instance,
        axis: Vector3<f32>,
        distance: f32,
    ) -> Result<()>;

    /// Rotates relative to the current orientation, in local space.
    fn rotate_local(&mut self, instance: &Self::Instance, degrees: Vector3<f32>) -> Result<()>;
}

/// Creates one instance of `source` per directive and replays its steps.
pub fn apply_directives<H: SceneHost + ?Sized>(
    host: &mut H,
    source: &str,
    directives: &[PlacementDirective],
) -> Result<Vec<H::Instance>> {
    let mut instances = Vec::with_capacity(directives.len());
    for directive in directives {
        let instance = host.create_instance(source)?;
        host.apply_transform(
            &instance,
            directive.position.into(),
            directive.scale.into(),
            Vec3::ZERO.into(),
        )?;
        for step in &directive.steps {
            match *step {
                PlacementStep::AlignToNormal { axis, normal } => {
                    host.align_to_normal(&instance, axis.into(), normal.into())?
                }
                PlacementStep::PushIn {
                    direction,
                    distance,
                } => host.translate_local(&instance, direction.into(), distance)?,
                PlacementStep::Rotate { degrees } => host.rotate_local(&instance, degrees.into())?,
            }
        }
        instances.push(instance);
    }
    Ok(instances)
}

/// Source object and targets captured from a host selection.
#[derive(Debug, Clone, Default)]
pub struct ScatterSession {
    pub source: Option<ObjectId>,
    pub targets: Vec<TargetPoint>,
}

impl ScatterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the first selected object as the object to scatter.
    pub fn capture_source<H: SceneHost + ?Sized>(&mut self, host: &H) -> Result<&str> {
        let first = host
            .get_selection()?
            .into_iter()
            .next()
            .ok_or(Error::NoSourceObject)?;
        let source = self.source.insert(first);
        Ok(source.as_str())
    }

    /// Uses the vertices of the current selection as targets.
    pub fn capture_targets<H: SceneHost + ?Sized>(&mut self, host: &H) -> Result<usize> {
        let targets = host.vertices_of_selection()?;
        if targets.is_empty() {
            return Err(Error::NoTargets);
        }
        self.targets = targets;
        Ok(self.targets.len())
    }

    /// Computes directives for the captured selection and instances them on `host`.
    ///
    /// Nothing is created on the host unless validation passes.
    pub fn run<H: SceneHost + ?Sized>(
        &self,
        host: &mut H,
        config: &ScatterConfig,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<H::Instance>> {
        self.run_with_events(host, config, rng, &mut ())
    }

    pub fn run_with_events<H: SceneHost + ?Sized>(
        &self,
        host: &mut H,
        config: &ScatterConfig,
        rng: &mut dyn RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<Vec<H::Instance>> {
        let source = self.source.as_deref().ok_or(Error::NoSourceObject)?;
        let directives = scatter_with_events(Some(source), &self.targets, config, rng, sink)?;
        let instances = apply_directives(host, source, &directives)?;
        info!("Created {} instances of '{}'.", instances.len(), source);
        Ok(instances)
    }
}

/// A host call recorded by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    CreateInstance { source: ObjectId },
    ApplyTransform {
        instance: usize,
        position: Vec3,
        scale: Vec3,
        rotation: Vec3,
    },
    AlignToNormal {
        instance: usize,
        axis: Vec3,
        normal: Vec3,
    },
    TranslateLocal {
        instance: usize,
        axis: Vec3,
        distance: f32,
    },
    RotateLocal { instance: usize, degrees: Vec3 },
}

/// In-memory [`SceneHost`] with a fixed selection that records every call.
///
/// Instances are numbered from zero in creation order.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub selection: Vec<ObjectId>,
    pub vertices: Vec<TargetPoint>,
    pub calls: Vec<HostCall>,
    instance_count: usize,
    instance_limit: Option<usize>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(mut self, selection: impl IntoIterator<Item = impl Into<ObjectId>>) -> Self {
        self.selection = selection.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_vertices(mut self, vertices: Vec<TargetPoint>) -> Self {
        self.vertices = vertices;
        self
    }

    /// Makes `create_instance` fail with [`Error::Host`] once `limit` instances exist.
    pub fn with_instance_limit(mut self, limit: usize) -> Self {
        self.instance_limit = Some(limit);
        self
    }

    pub fn instance_count(&self) -> usize {
        self.instance_count
    }
}

impl SceneHost for RecordingHost {
    type Instance = usize;

    fn get_selection(&self) -> Result<Vec<ObjectId>> {
        Ok(self.selection.clone())
    }

    fn vertices_of_selection(&self) -> Result<Vec<TargetPoint>> {
        Ok(self.vertices.clone())
    }

    fn create_instance(&mut self, source: &str) -> Result<usize> {
        if self
            .instance_limit
            .is_some_and(|limit| self.instance_count >= limit)
        {
            return Err(Error::Host(format!(
                "cannot create instance of '{source}': limit of {} reached",
                self.instance_count
            )));
        }
        self.calls.push(HostCall::CreateInstance {
            source: source.to_owned(),
        });
        self.instance_count += 1;
        Ok(self.instance_count - 1)
    }

    fn apply_transform(
        &mut self,
        instance: &usize,
        position: Vector3<f32>,
        scale: Vector3<f32>,
        rotation: Vector3<f32>,
    ) -> Result<()> {
        self.calls.push(HostCall::ApplyTransform {
            instance: *instance,
            position: position.into(),
            scale: scale.into(),
            rotation: rotation.into(),
        });
        Ok(())
    }

    fn align_to_normal(
        &mut self,
        instance: &usize,
        axis: Vector3<f32>,
        normal: Vector3<f32>,
    ) -> Result<()> {
        self.calls.push(HostCall::AlignToNormal {
            instance: *instance,
            axis: axis.into(),
            normal: normal.into(),
        });
        Ok(())
    }

    fn translate_local(
        &mut self,
        instance: &usize,
        axis: Vector3<f32>,
        distance: f32,
    ) -> Result<()> {
        self.calls.push(HostCall::TranslateLocal {
            instance: *instance,
            axis: axis.into(),
            distance,
        });
        Ok(())
    }

    fn rotate_local(&mut self, instance: &usize, degrees: Vector3<f32>) -> Result<()> {
        self.calls.push(HostCall::RotateLocal {
            instance: *instance,
            degrees: degrees.into(),
        });
        Ok(())
    }
}
