//! Scanning a folder for existing versions of a scene file.
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::scenefile::fs::FileSystem;
use crate::scenefile::{parse_digits, SceneFileName};

/// Returns the version encoded in `file_name` if it matches
/// `{descriptor}_{task}_v<digits>{extension}` exactly.
///
/// Descriptor, task and extension must match verbatim; only the digits vary.
pub fn matching_version(
    file_name: &str,
    descriptor: &str,
    task: &str,
    extension: &str,
) -> Option<u32> {
    let rest = file_name.strip_prefix(descriptor)?.strip_prefix('_')?;
    let rest = rest.strip_prefix(task)?.strip_prefix("_v")?;
    let digits = rest.strip_suffix(extension)?;
    parse_digits(digits)
}

/// Next free version in `folder` for the given descriptor, task and extension.
///
/// Returns 1 when nothing matches, otherwise the numerically largest matching
/// version plus one.
pub fn next_available_version<F: FileSystem + ?Sized>(
    fs: &F,
    folder: &Path,
    descriptor: &str,
    task: &str,
    extension: &str,
) -> Result<u32> {
    let entries = fs.list_entries(folder)?;
    let latest = entries
        .iter()
        .filter_map(|entry| matching_version(entry, descriptor, task, extension))
        .max();

    debug!(
        "Scanned {} entries in '{}' for {descriptor}_{task}_v*{extension}; latest: {latest:?}.",
        entries.len(),
        folder.display()
    );

    match latest {
        None => Ok(1),
        Some(v) => v.checked_add(1).ok_or_else(|| {
            Error::Other(format!(
                "version overflow for {descriptor}_{task} in '{}'",
                folder.display()
            ))
        }),
    }
}

/// [`next_available_version`] for the descriptor, task and extension of `name`.
pub fn next_version_for<F: FileSystem + ?Sized>(
    fs: &F,
    folder: &Path,
    name: &SceneFileName,
) -> Result<u32> {
    next_available_version(fs, folder, name.descriptor(), name.task(), name.extension())
}
