use std::time::Duration;

use criterion::{Criterion, Throughput};
use glam::Vec3;
use scene_tools::prelude::TargetPoint;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

#[allow(dead_code)]
pub fn sphere_targets(count: usize) -> Vec<TargetPoint> {
    let golden = std::f32::consts::PI * (3.0 - 5.0f32.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f32 + 0.5) / count.max(1) as f32;
            let r = (1.0 - y * y).sqrt();
            let theta = golden * i as f32;
            let p = Vec3::new(r * theta.cos(), y, r * theta.sin());
            TargetPoint::new(p * 10.0).with_normal(p)
        })
        .collect()
}
