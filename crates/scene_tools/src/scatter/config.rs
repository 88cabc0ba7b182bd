//! Configuration for a scatter run.
use crate::error::{Error, Result};
use crate::scatter::range::{parse_number, AxisRange};
use crate::scatter::Axis;

pub const DEFAULT_SCALE_MIN: f32 = 0.5;
pub const DEFAULT_SCALE_MAX: f32 = 2.0;
pub const DEFAULT_ROTATION_MIN: f32 = 0.0;
pub const DEFAULT_ROTATION_MAX: f32 = 180.0;
pub const FULL_COVERAGE: f32 = 100.0;

/// Random ranges and placement switches for [`crate::scatter::engine::scatter`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScatterConfig {
    /// Per-axis scale factor range.
    pub scale: AxisRange,
    /// Per-axis relative rotation range in degrees.
    pub rotation: AxisRange,
    /// Percentage of targets that receive an instance, in `[0, 100]`.
    pub coverage_percent: f32,
    /// Orient each instance's primary axis along the target normal.
    pub align_to_normal: bool,
    /// Offset each instance into the surface after orienting it.
    pub push_in: bool,
    /// Distance travelled along the negative primary axis when pushing in.
    pub push_in_distance: f32,
    /// Local axis of the source object that points away from the surface.
    pub primary_axis: Axis,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            scale: AxisRange::uniform(DEFAULT_SCALE_MIN, DEFAULT_SCALE_MAX),
            rotation: AxisRange::uniform(DEFAULT_ROTATION_MIN, DEFAULT_ROTATION_MAX),
            coverage_percent: FULL_COVERAGE,
            align_to_normal: false,
            push_in: false,
            push_in_distance: 0.0,
            primary_axis: Axis::Y,
        }
    }
}

impl ScatterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: AxisRange) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, rotation: AxisRange) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_coverage_percent(mut self, coverage_percent: f32) -> Self {
        self.coverage_percent = coverage_percent;
        self
    }

    pub fn with_align_to_normal(mut self, align_to_normal: bool) -> Self {
        self.align_to_normal = align_to_normal;
        self
    }

    /// Enables push-in by `distance`.
    pub fn with_push_in(mut self, distance: f32) -> Self {
        self.push_in = true;
        self.push_in_distance = distance;
        self
    }

    pub fn with_primary_axis(mut self, primary_axis: Axis) -> Self {
        self.primary_axis = primary_axis;
        self
    }

    /// Sets the scale range from dialog text fields.
    pub fn with_scale_text(self, min: [&str; 3], max: [&str; 3]) -> Result<Self> {
        Ok(self.with_scale(AxisRange::from_text("scale", min, max)?))
    }

    /// Sets the rotation range from dialog text fields.
    pub fn with_rotation_text(self, min: [&str; 3], max: [&str; 3]) -> Result<Self> {
        Ok(self.with_rotation(AxisRange::from_text("rotation", min, max)?))
    }

    pub fn with_coverage_text(self, text: &str) -> Result<Self> {
        let coverage = parse_number("coverage_percent", text)?;
        Ok(self.with_coverage_percent(coverage))
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.scale.validate("scale")?;
        self.rotation.validate("rotation")?;
        if !(0.0..=FULL_COVERAGE).contains(&self.coverage_percent) {
            return Err(Error::InvalidConfig(format!(
                "coverage_percent must be in [0, 100], got {}",
                self.coverage_percent
            )));
        }
        if self.push_in && !self.push_in_distance.is_finite() {
            return Err(Error::InvalidConfig(
                "push_in_distance must be finite".into(),
            ));
        }
        Ok(())
    }
}
