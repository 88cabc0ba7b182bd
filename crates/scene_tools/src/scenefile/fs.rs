//! File system collaborator used by scene-file versioning and saving.
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Operations the versioning engine needs from the outside world.
///
/// `save_as` writes the host's current document. An implementation must report a
/// missing parent directory as [`io::ErrorKind::NotFound`] so the save can create
/// the folder and retry.
pub trait FileSystem {
    /// File names (not paths) of the regular files directly inside `folder`.
    ///
    /// A folder that does not exist yet lists as empty.
    fn list_entries(&self, folder: &Path) -> io::Result<Vec<String>>;

    fn exists(&self, path: &Path) -> bool;

    /// Recursively creates `path` and any missing parents.
    fn make_directories(&mut self, path: &Path) -> io::Result<()>;

    fn save_as(&mut self, path: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by the local disk, saving a fixed document payload.
#[derive(Debug, Clone, Default)]
pub struct LocalFileSystem {
    document: Vec<u8>,
    last_saved: Option<PathBuf>,
}

impl LocalFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `document` as the content written by every [`FileSystem::save_as`].
    pub fn with_document(mut self, document: impl Into<Vec<u8>>) -> Self {
        self.document = document.into();
        self
    }

    /// Path of the most recent successful save.
    pub fn last_saved(&self) -> Option<&Path> {
        self.last_saved.as_deref()
    }
}

impl FileSystem for LocalFileSystem {
    fn list_entries(&self, folder: &Path) -> io::Result<Vec<String>> {
        let entries = match std::fs::read_dir(folder) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            // Follows symlinks, so linked scene versions count as files.
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => names.push(name.to_owned()),
                None => debug!(
                    "Skipping non UTF-8 entry {:?} in '{}'.",
                    entry.file_name(),
                    folder.display()
                ),
            }
        }
        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn make_directories(&mut self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn save_as(&mut self, path: &Path) -> io::Result<()> {
        std::fs::write(path, &self.document)?;
        self.last_saved = Some(path.to_path_buf());
        Ok(())
    }
}

/// In-memory [`FileSystem`] that records how often each operation ran.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    directories: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
    save_error: Option<io::ErrorKind>,
    /// Number of `save_as` calls, successful or not.
    pub save_calls: usize,
    /// Number of `make_directories` calls.
    pub make_directories_calls: usize,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an existing directory and its ancestors.
    pub fn with_directory(mut self, path: impl AsRef<Path>) -> Self {
        self.insert_directory(path.as_ref());
        self
    }

    /// Adds an existing file, creating its parent directories.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.insert_directory(parent);
        }
        self.files.insert(path.to_path_buf());
        self
    }

    /// Makes every `save_as` fail with `kind`.
    pub fn with_save_error(mut self, kind: io::ErrorKind) -> Self {
        self.save_error = Some(kind);
        self
    }

    pub fn contains_file(&self, path: impl AsRef<Path>) -> bool {
        self.files.contains(path.as_ref())
    }

    fn insert_directory(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.directories.insert(ancestor.to_path_buf());
        }
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.as_os_str().is_empty() || self.directories.contains(path)
    }
}

impl FileSystem for MemoryFileSystem {
    fn list_entries(&self, folder: &Path) -> io::Result<Vec<String>> {
        Ok(self
            .files
            .iter()
            .filter(|f| f.parent() == Some(folder))
            .filter_map(|f| f.file_name().and_then(|n| n.to_str()).map(str::to_owned))
            .collect())
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_directory(path) || self.files.contains(path)
    }

    fn make_directories(&mut self, path: &Path) -> io::Result<()> {
        self.make_directories_calls += 1;
        self.insert_directory(path);
        Ok(())
    }

    fn save_as(&mut self, path: &Path) -> io::Result<()> {
        self.save_calls += 1;
        if let Some(kind) = self.save_error {
            return Err(io::Error::new(kind, "save rejected"));
        }
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        if !self.is_directory(parent) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory '{}' does not exist", parent.display()),
            ));
        }
        self.files.insert(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "scene_tools_fs_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_folder_lists_empty() {
        let fs = LocalFileSystem::new();
        let dir = scratch_dir("missing");
        assert!(fs.list_entries(&dir).unwrap().is_empty());
    }

    #[test]
    fn save_into_missing_folder_is_not_found() {
        let mut fs = LocalFileSystem::new();
        let dir = scratch_dir("not_found");
        let err = fs.save_as(&dir.join("a_b_v001.ma")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(fs.last_saved().is_none());
    }

    #[test]
    fn lists_only_files() {
        let mut fs = LocalFileSystem::new().with_document("doc");
        let dir = scratch_dir("files_only");
        fs.make_directories(&dir.join("nested")).unwrap();
        fs.save_as(&dir.join("a_b_v001.ma")).unwrap();

        let entries = fs.list_entries(&dir).unwrap();
        assert_eq!(entries, vec!["a_b_v001.ma".to_owned()]);
        assert_eq!(
            std::fs::read_to_string(dir.join("a_b_v001.ma")).unwrap(),
            "doc"
        );
        assert_eq!(fs.last_saved(), Some(dir.join("a_b_v001.ma").as_path()));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn memory_save_requires_parent_directory() {
        let mut fs = MemoryFileSystem::new();
        let err = fs.save_as(Path::new("proj/scenes/a_b_v001.ma")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        fs.make_directories(Path::new("proj/scenes")).unwrap();
        assert!(fs.exists(Path::new("proj")));
        fs.save_as(Path::new("proj/scenes/a_b_v001.ma")).unwrap();
        assert!(fs.contains_file("proj/scenes/a_b_v001.ma"));
        assert_eq!(fs.save_calls, 2);
        assert_eq!(fs.make_directories_calls, 1);
    }

    #[test]
    fn memory_lists_direct_children_only() {
        let fs = MemoryFileSystem::new()
            .with_file("scenes/a_b_v001.ma")
            .with_file("scenes/old/a_b_v009.ma")
            .with_file("other/a_b_v004.ma");
        assert_eq!(
            fs.list_entries(Path::new("scenes")).unwrap(),
            vec!["a_b_v001.ma".to_owned()]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_versions_are_listed() {
        let mut fs = LocalFileSystem::new();
        let dir = scratch_dir("symlink");
        fs.make_directories(&dir.join("archive")).unwrap();
        fs.save_as(&dir.join("char_rig_v001.ma")).unwrap();
        fs.save_as(&dir.join("archive").join("real_v5.ma")).unwrap();
        std::os::unix::fs::symlink(
            dir.join("archive").join("real_v5.ma"),
            dir.join("char_rig_v005.ma"),
        )
        .unwrap();

        let mut entries = fs.list_entries(&dir).unwrap();
        entries.sort();
        assert_eq!(entries, vec!["char_rig_v001.ma", "char_rig_v005.ma"]);
        let next = crate::scenefile::version::next_available_version(
            &fs, &dir, "char", "rig", ".ma",
        )
        .unwrap();
        assert_eq!(next, 6);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let mut fs = LocalFileSystem::new();
        let dir = scratch_dir("non_utf8");
        fs.make_directories(&dir).unwrap();
        fs.save_as(&dir.join("a_b_v002.ma")).unwrap();
        std::fs::write(dir.join(OsStr::from_bytes(b"a_b_v\xff09.ma")), "").unwrap();

        assert_eq!(fs.list_entries(&dir).unwrap(), vec!["a_b_v002.ma"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
