//! Saves a placeholder document three times into `<project>/scenes`, bumping the
//! version each time. Usage: `smart-save [project-root] [existing-scene-path]`.
use scene_tools::prelude::*;
use scene_tools_demos::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut args = std::env::args().skip(1);
    let project_root = args
        .next()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("scene_tools_demo_project"));

    // Continue from an existing scene when given, otherwise start a new document.
    let mut file = match args.next() {
        Some(path) => SceneFile::from_path(path)?,
        None => SceneFile::new_in_project(&project_root),
    };

    let mut fs = LocalFileSystem::new().with_document("//Maya ASCII 2024 scene\n");
    for _ in 0..3 {
        let path = file.increment_save(&mut fs)?;
        info!("Now editing {}", path.display());
    }

    Ok(())
}
