use std::path::PathBuf;

use scene_tools::prelude::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "scene_tools_it_{}_{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn increment_save_on_disk_walks_versions() {
    let root = scratch_dir("walk");
    let mut fs = LocalFileSystem::new().with_document("//Maya ASCII scene");
    let mut file = SceneFile::new(
        root.join("scenes").join("env"),
        SceneFileName::new("env", "layout", 1, ".ma").unwrap(),
    );

    let first = file.increment_save(&mut fs).unwrap();
    assert_eq!(first.file_name().unwrap(), "env_layout_v001.ma");
    assert!(first.is_file());

    let second = file.increment_save(&mut fs).unwrap();
    assert_eq!(second.file_name().unwrap(), "env_layout_v002.ma");

    // A stray newer version and an unrelated file are both on disk.
    std::fs::write(file.folder.join("env_layout_v010.ma"), "").unwrap();
    std::fs::write(file.folder.join("env_lighting_v050.ma"), "").unwrap();
    let third = file.increment_save(&mut fs).unwrap();
    assert_eq!(third.file_name().unwrap(), "env_layout_v011.ma");
    assert_eq!(fs.last_saved(), Some(third.as_path()));

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn reopened_file_continues_from_parsed_path() {
    let root = scratch_dir("reopen");
    let mut fs = LocalFileSystem::new();
    fs.make_directories(&root).unwrap();
    std::fs::write(root.join("charRig_rig_v003.ma"), "").unwrap();

    let mut file = SceneFile::from_path(root.join("charRig_rig_v003.ma")).unwrap();
    assert_eq!(file.name.version(), 3);
    let saved = file.increment_save(&mut fs).unwrap();
    assert_eq!(saved, root.join("charRig_rig_v004.ma"));

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn memory_save_into_missing_folder_retries_once() {
    let mut fs = MemoryFileSystem::new();
    let name = SceneFileName::parse("prop_model_v002.mb").unwrap();
    let folder = PathBuf::from("proj/scenes/props");
    let path = save(&name, &folder, &mut fs).unwrap();
    assert_eq!(path, folder.join("prop_model_v002.mb"));
    assert_eq!(fs.save_calls, 2);
    assert_eq!(fs.make_directories_calls, 1);
}

#[test]
fn round_trip_over_many_names() {
    for descriptor in ["main", "charRig", "a", "set-01"] {
        for task in ["rig", "anim", "lookdev"] {
            for version in [1, 9, 10, 99, 100, 999, 1000, 12345] {
                for ext in [".ma", ".mb", ""] {
                    let name = SceneFileName::new(descriptor, task, version, ext).unwrap();
                    let rendered = name.render();
                    assert_eq!(SceneFileName::parse(&rendered).unwrap(), name, "{rendered}");
                }
            }
        }
    }
}
