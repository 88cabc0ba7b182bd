//! Computing placement directives for a scatter run.
//!
//! Orientation follows this table, per selected target:
//!
//! | align_to_normal | push_in | steps                                   |
//! |-----------------|---------|-----------------------------------------|
//! | true            | true    | align, push in                          |
//! | true            | false   | align                                   |
//! | false           | true    | align, push in, random rotation         |
//! | false           | false   | random rotation                         |
//!
//! The `false, true` row aligns even though alignment is off.
// TODO: confirm with the tool owners whether push-in without alignment should align.
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::scatter::config::ScatterConfig;
use crate::scatter::events::{EventSink, ScatterEvent, ScatterEventKind};
use crate::scatter::placement::{PlacementDirective, PlacementStep};
use crate::scatter::selection::select_targets;
use crate::scatter::TargetPoint;

/// Which orientation steps a run emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StepPlan {
    align: bool,
    push_in: bool,
    rotate: bool,
}

impl StepPlan {
    fn for_config(config: &ScatterConfig) -> Self {
        match (config.align_to_normal, config.push_in) {
            (true, true) => Self {
                align: true,
                push_in: true,
                rotate: false,
            },
            (true, false) => Self {
                align: true,
                push_in: false,
                rotate: false,
            },
            (false, true) => Self {
                align: true,
                push_in: true,
                rotate: true,
            },
            (false, false) => Self {
                align: false,
                push_in: false,
                rotate: true,
            },
        }
    }
}

/// Validates inputs and computes one directive per selected target.
///
/// Fails before drawing any random value if `source` is unset or the
/// configuration is invalid.
pub fn scatter(
    source: Option<&str>,
    targets: &[TargetPoint],
    config: &ScatterConfig,
    rng: &mut dyn RngCore,
) -> Result<Vec<PlacementDirective>> {
    scatter_with_events(source, targets, config, rng, &mut ())
}

pub fn scatter_with_events(
    source: Option<&str>,
    targets: &[TargetPoint],
    config: &ScatterConfig,
    rng: &mut dyn RngCore,
    sink: &mut dyn EventSink,
) -> Result<Vec<PlacementDirective>> {
    let source = source.ok_or(Error::NoSourceObject)?;
    config.validate()?;

    if sink.wants(ScatterEventKind::RunStarted) {
        sink.send(ScatterEvent::RunStarted {
            source: source.to_owned(),
            config: config.clone(),
            target_count: targets.len(),
        });
    }

    let selected = select_targets(targets.len(), config.coverage_percent, rng);
    debug!(
        "Selected {} of {} targets at {}% coverage.",
        selected.len(),
        targets.len(),
        config.coverage_percent
    );
    if sink.wants(ScatterEventKind::TargetsSelected) {
        sink.send(ScatterEvent::TargetsSelected {
            selected: selected.len(),
            candidates: targets.len(),
        });
    }

    let plan = StepPlan::for_config(config);
    let axis = config.primary_axis.unit();
    let mut missing_normals = 0usize;
    let mut directives = Vec::with_capacity(selected.len());

    for index in selected {
        let target = &targets[index];
        let scale = config.scale.sample(rng);

        let mut steps = Vec::with_capacity(3);
        if plan.align {
            match target.normal.and_then(|n| n.try_normalize()) {
                Some(normal) => steps.push(PlacementStep::AlignToNormal { axis, normal }),
                None => {
                    missing_normals += 1;
                    if sink.wants(ScatterEventKind::Warning) {
                        sink.send(ScatterEvent::Warning {
                            context: format!("target:{index}"),
                            message: "Target has no usable normal; alignment skipped".into(),
                        });
                    }
                }
            }
        }
        if plan.push_in {
            steps.push(PlacementStep::PushIn {
                direction: -axis,
                distance: config.push_in_distance,
            });
        }
        if plan.rotate {
            steps.push(PlacementStep::Rotate {
                degrees: config.rotation.sample(rng),
            });
        }

        let directive = PlacementDirective {
            target_index: index,
            position: target.position,
            scale,
            steps,
        };
        if sink.wants(ScatterEventKind::PlacementMade) {
            sink.send(ScatterEvent::PlacementMade {
                directive: directive.clone(),
            });
        }
        directives.push(directive);
    }

    if missing_normals > 0 {
        warn!(
            "{} of {} targets had no usable normal; alignment skipped for them.",
            missing_normals,
            directives.len()
        );
    }
    info!(
        "Scatter of '{}' produced {} placements.",
        source,
        directives.len()
    );
    if sink.wants(ScatterEventKind::RunFinished) {
        sink.send(ScatterEvent::RunFinished {
            placed: directives.len(),
        });
    }

    Ok(directives)
}
