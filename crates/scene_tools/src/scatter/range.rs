//! Per-axis value ranges and their independent uniform draws.
use glam::Vec3;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::random::rand01;
use crate::scatter::Axis;

/// Inclusive `[min, max]` range for each of the three axes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisRange {
    pub min: Vec3,
    pub max: Vec3,
}

impl AxisRange {
    pub fn new(min: impl Into<Vec3>, max: impl Into<Vec3>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// Same `[min, max]` on every axis.
    pub fn uniform(min: f32, max: f32) -> Self {
        Self::new(Vec3::splat(min), Vec3::splat(max))
    }

    /// Parses free-text bounds, e.g. values typed into a dialog.
    ///
    /// `label` names the field in error messages.
    pub fn from_text(label: &str, min: [&str; 3], max: [&str; 3]) -> Result<Self> {
        let mut range = Self::uniform(0.0, 0.0);
        for axis in Axis::ALL {
            let i = axis.index();
            range.min[i] = parse_number(&format!("{label}.min.{}", axis.label()), min[i])?;
            range.max[i] = parse_number(&format!("{label}.max.{}", axis.label()), max[i])?;
        }
        range.validate(label)?;
        Ok(range)
    }

    pub fn validate(&self, label: &str) -> Result<()> {
        for axis in Axis::ALL {
            let (lo, hi) = self.bounds(axis);
            if !lo.is_finite() || !hi.is_finite() {
                return Err(Error::InvalidConfig(format!(
                    "{label}.{} bounds must be finite",
                    axis.label()
                )));
            }
            if lo > hi {
                return Err(Error::InvalidConfig(format!(
                    "{label}.{}: min {lo} > max {hi}",
                    axis.label()
                )));
            }
        }
        Ok(())
    }

    pub fn bounds(&self, axis: Axis) -> (f32, f32) {
        (self.min[axis.index()], self.max[axis.index()])
    }

    /// Draws one value in `[min, max]` for `axis`.
    pub fn sample_axis(&self, axis: Axis, rng: &mut dyn RngCore) -> f32 {
        let (lo, hi) = self.bounds(axis);
        let u = f64::from(rand01(rng));
        // Widened so spans beyond `f32::MAX` stay finite.
        let value = f64::from(lo) + u * (f64::from(hi) - f64::from(lo));
        (value as f32).clamp(lo, hi)
    }

    /// Draws every axis independently, in x, y, z order.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        let mut out = Vec3::ZERO;
        for axis in Axis::ALL {
            out[axis.index()] = self.sample_axis(axis, rng);
        }
        out
    }
}

/// Parses a numeric text field, naming `label` on failure.
pub fn parse_number(label: &str, text: &str) -> Result<f32> {
    let trimmed = text.trim();
    let value: f32 = trimmed
        .parse()
        .map_err(|_| Error::InvalidConfig(format!("{label}: '{trimmed}' is not a number")))?;
    if !value.is_finite() {
        return Err(Error::InvalidConfig(format!(
            "{label}: '{trimmed}' is not a finite number"
        )));
    }
    Ok(value)
}
