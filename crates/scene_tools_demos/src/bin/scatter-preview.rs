//! Scatters a source object over a wavy ground grid with an in-memory host and
//! prints a summary of the created instances.
//! Usage: `scatter-preview [preset.ron] [seed]`.
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_tools::prelude::*;
use scene_tools_demos::{ground_grid, init_tracing, load_preset, parse_preset, PEBBLES_PRESET};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_preset(path)?,
        None => parse_preset(PEBBLES_PRESET)?,
    };
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 2025,
    };

    let mut host = RecordingHost::new()
        .with_selection(["pebble_geo", "ground_geo"])
        .with_vertices(ground_grid(16, 0.5));

    let mut session = ScatterSession::new();
    let source = session.capture_source(&host)?.to_owned();
    let candidates = session.capture_targets(&host)?;

    let mut sink = FnSink::new(|event| {
        if let ScatterEvent::Warning { context, message } = event {
            warn!("{context}: {message}");
        }
    });
    let mut rng = StdRng::seed_from_u64(seed);
    let instances = session.run_with_events(&mut host, &config, &mut rng, &mut sink)?;

    info!(
        "Placed {} '{}' instances on {} candidate vertices ({} host calls).",
        instances.len(),
        source,
        candidates,
        host.calls.len()
    );

    let directives = scatter(
        Some(source.as_str()),
        &session.targets,
        &config,
        &mut StdRng::seed_from_u64(seed),
    )?;
    for d in directives.iter().take(5) {
        let resolved = d.resolve();
        info!(
            "target {:>3}: translation {:?} scale {:?} rotation {:?}",
            d.target_index, resolved.translation, resolved.scale, resolved.rotation
        );
    }

    Ok(())
}
