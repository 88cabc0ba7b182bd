//! Saving the current document under a versioned scene-file name.
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::scenefile::fs::FileSystem;
use crate::scenefile::version::next_version_for;
use crate::scenefile::{SceneFile, SceneFileName};

/// Saves the current document as `folder/name`.
///
/// A save that fails because `folder` does not exist creates the folder tree and
/// retries once. Any other failure is returned as [`Error::Save`].
pub fn save<F: FileSystem + ?Sized>(
    name: &SceneFileName,
    folder: &Path,
    fs: &mut F,
) -> Result<PathBuf> {
    let path = folder.join(name.render());
    match fs.save_as(&path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound && !fs.exists(folder) => {
            warn!(
                "Folder '{}' is missing; creating it before saving.",
                folder.display()
            );
            fs.make_directories(folder).map_err(|source| Error::Save {
                path: path.clone(),
                source,
            })?;
            fs.save_as(&path).map_err(|source| Error::Save {
                path: path.clone(),
                source,
            })?;
        }
        Err(source) => return Err(Error::Save { path, source }),
    }

    info!("Saved scene file '{}'.", path.display());
    Ok(path)
}

/// Moves `name` to the next free version in `folder` and saves it.
///
/// Returns the name that was written.
pub fn increment_and_save<F: FileSystem + ?Sized>(
    name: &SceneFileName,
    folder: &Path,
    fs: &mut F,
) -> Result<SceneFileName> {
    let version = next_version_for(fs, folder, name)?;
    let next = name.with_version(version)?;
    if version != name.version() {
        info!(
            "Incrementing {}_{} from v{:03} to v{:03}.",
            name.descriptor(),
            name.task(),
            name.version(),
            version
        );
    }
    save(&next, folder, fs)?;
    Ok(next)
}

impl SceneFile {
    /// Saves under the current name; see [`save`].
    pub fn save<F: FileSystem + ?Sized>(&self, fs: &mut F) -> Result<PathBuf> {
        save(&self.name, &self.folder, fs)
    }

    /// Bumps to the next free version in the folder and saves.
    ///
    /// The name is only replaced once the save succeeded. Returns the saved path.
    pub fn increment_save<F: FileSystem + ?Sized>(&mut self, fs: &mut F) -> Result<PathBuf> {
        let next = increment_and_save(&self.name, &self.folder, fs)?;
        self.name = next;
        Ok(self.path())
    }
}
