#![forbid(unsafe_code)]

use std::path::Path;

use anyhow::Context;
use glam::Vec3;
use scene_tools::prelude::{ScatterConfig, TargetPoint};
use tracing_subscriber::EnvFilter;

/// Built-in preset used when no preset path is given.
pub const PEBBLES_PRESET: &str = include_str!("../presets/pebbles.ron");

/// Installs a `tracing` subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Parses a RON scatter preset and validates it.
pub fn parse_preset(source: &str) -> anyhow::Result<ScatterConfig> {
    let config: ScatterConfig = ron::from_str(source).context("parsing scatter preset")?;
    config.validate()?;
    Ok(config)
}

/// Loads a RON scatter preset from `path`.
pub fn load_preset(path: impl AsRef<Path>) -> anyhow::Result<ScatterConfig> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading preset '{}'", path.display()))?;
    parse_preset(&source)
}

/// Vertices of a flat, slightly wavy `size` x `size` ground grid with normals.
pub fn ground_grid(size: usize, spacing: f32) -> Vec<TargetPoint> {
    let mut out = Vec::with_capacity(size * size);
    for iz in 0..size {
        for ix in 0..size {
            let x = ix as f32 * spacing;
            let z = iz as f32 * spacing;
            let y = 0.25 * (x * 0.5).sin() * (z * 0.5).cos();
            let dx = 0.125 * (x * 0.5).cos() * (z * 0.5).cos();
            let dz = -0.125 * (x * 0.5).sin() * (z * 0.5).sin();
            let normal = Vec3::new(-dx, 1.0, -dz).normalize();
            out.push(TargetPoint::new(Vec3::new(x, y, z)).with_normal(normal));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_preset_parses() {
        let config = parse_preset(PEBBLES_PRESET).unwrap();
        assert_eq!(config.coverage_percent, 35.0);
        assert!(config.align_to_normal);
        assert!(config.push_in);
        assert_eq!(config.rotation.max, Vec3::new(0.0, 360.0, 0.0));
    }

    #[test]
    fn preset_with_inverted_range_is_rejected() {
        let source = "(scale: (min: (2.0, 2.0, 2.0), max: (1.0, 1.0, 1.0)))";
        assert!(parse_preset(source).is_err());
    }

    #[test]
    fn ground_grid_has_unit_normals() {
        let grid = ground_grid(4, 1.0);
        assert_eq!(grid.len(), 16);
        for p in grid {
            let n = p.normal.unwrap();
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!(n.y > 0.0);
        }
    }

    #[test]
    fn deserialized_scene_names_are_validated() {
        use scene_tools::prelude::SceneFileName;

        let name: SceneFileName =
            ron::from_str(r#"(descriptor: "charRig", task: "rig", version: 3, extension: ".ma")"#)
                .unwrap();
        assert_eq!(name.render(), "charRig_rig_v003.ma");

        let underscore =
            r#"(descriptor: "char_rig", task: "rig", version: 3, extension: ".ma")"#;
        assert!(ron::from_str::<SceneFileName>(underscore).is_err());
        let version_zero = r#"(descriptor: "charRig", task: "rig", version: 0, extension: ".ma")"#;
        assert!(ron::from_str::<SceneFileName>(version_zero).is_err());
    }
}
