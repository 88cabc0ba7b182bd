//! Versioned scene-file naming.
//!
//! Scene files follow the `{descriptor}_{task}_v{version:03}{extension}` convention,
//! e.g. `charRig_rig_v003.ma`. [`SceneFileName`] parses and renders that convention,
//! [`version`] scans a folder for the next free version, and [`save`] writes the
//! current document through a [`fs::FileSystem`] collaborator.
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

pub mod fs;
pub mod save;
pub mod version;

pub const DEFAULT_DESCRIPTOR: &str = "main";
pub const DEFAULT_TASK: &str = "untitled";
pub const DEFAULT_EXTENSION: &str = ".ma";
/// Folder below a project root where new scene files are placed.
pub const SCENES_FOLDER: &str = "scenes";

const SEPARATOR: char = '_';
const VERSION_PREFIX: char = 'v';

/// Structured form of a versioned scene-file name.
///
/// Instances are immutable; use [`SceneFileName::with_version`] to get a renamed copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSceneFileName"))]
pub struct SceneFileName {
    descriptor: String,
    task: String,
    version: u32,
    extension: String,
}

/// Unchecked fields, deserialized before going through [`SceneFileName::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSceneFileName {
    descriptor: String,
    task: String,
    version: u32,
    extension: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSceneFileName> for SceneFileName {
    type Error = Error;

    fn try_from(raw: RawSceneFileName) -> Result<Self> {
        Self::new(raw.descriptor, raw.task, raw.version, raw.extension)
    }
}

impl SceneFileName {
    /// Builds a name from its four fields, validating each of them.
    pub fn new(
        descriptor: impl Into<String>,
        task: impl Into<String>,
        version: u32,
        extension: impl Into<String>,
    ) -> Result<Self> {
        let name = Self {
            descriptor: descriptor.into(),
            task: task.into(),
            version,
            extension: extension.into(),
        };
        name.validate()?;
        Ok(name)
    }

    /// Parses the file name component of `path`.
    ///
    /// The stem must split on `_` into exactly three tokens: descriptor, task and
    /// `v<digits>`. The extension is kept verbatim, including its leading dot.
    pub fn parse(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::malformed(path.display().to_string(), "no file name"))?;
        let (stem, extension) = split_extension(file_name);

        let tokens: Vec<&str> = stem.split(SEPARATOR).collect();
        let [descriptor, task, version] = tokens.as_slice() else {
            return Err(Error::malformed(
                file_name,
                format!(
                    "expected 3 '{SEPARATOR}' separated tokens, found {}",
                    tokens.len()
                ),
            ));
        };
        let version = parse_version_token(version)
            .ok_or_else(|| Error::malformed(file_name, format!("bad version token '{version}'")))?;

        Self::new(*descriptor, *task, version, extension)
            .map_err(|e| Error::malformed(file_name, e.to_string()))
    }

    /// Formats the name as `{descriptor}_{task}_v{version:03}{extension}`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Returns a copy of this name carrying `version`.
    pub fn with_version(&self, version: u32) -> Result<Self> {
        Self::new(
            self.descriptor.clone(),
            self.task.clone(),
            version,
            self.extension.clone(),
        )
    }

    fn validate(&self) -> Result<()> {
        for (label, value) in [("descriptor", &self.descriptor), ("task", &self.task)] {
            if value.is_empty() {
                return Err(Error::InvalidConfig(format!("{label} must not be empty")));
            }
            if value.contains(SEPARATOR) || value.contains(['/', '\\']) {
                return Err(Error::InvalidConfig(format!(
                    "{label} '{value}' must not contain '{SEPARATOR}' or path separators"
                )));
            }
        }
        if self.version == 0 {
            return Err(Error::InvalidConfig("version must be >= 1".into()));
        }
        if !self.extension.is_empty()
            && (!self.extension.starts_with('.')
                || self.extension[1..].contains(['.', '/', '\\'])
                || self.extension.len() == 1)
        {
            return Err(Error::InvalidConfig(format!(
                "extension '{}' must be empty or a single '.ext' suffix",
                self.extension
            )));
        }
        Ok(())
    }
}

impl fmt::Display for SceneFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{VERSION_PREFIX}{:03}{}",
            self.descriptor, self.task, self.version, self.extension
        )
    }
}

impl FromStr for SceneFileName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Splits `file_name` into stem and extension (with its leading dot).
///
/// Mirrors [`Path::extension`]: a leading dot alone does not start an extension.
pub(crate) fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name.split_at(idx),
        _ => (file_name, ""),
    }
}

/// Parses a `v<digits>` token into its numeric version.
pub(crate) fn parse_version_token(token: &str) -> Option<u32> {
    let digits = token.strip_prefix(VERSION_PREFIX)?;
    parse_digits(digits)
}

pub(crate) fn parse_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// A scene-file name paired with the folder it lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneFile {
    /// Folder the scene file is saved into.
    pub folder: PathBuf,
    /// Structured file name.
    pub name: SceneFileName,
}

impl SceneFile {
    pub fn new(folder: impl Into<PathBuf>, name: SceneFileName) -> Self {
        Self {
            folder: folder.into(),
            name,
        }
    }

    /// Parses a full path; the folder is the path's parent.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = SceneFileName::parse(path)?;
        let folder = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self { folder, name })
    }

    /// Default name for a new, unsaved document inside `<project_root>/scenes`.
    pub fn new_in_project(project_root: impl AsRef<Path>) -> Self {
        Self {
            folder: project_root.as_ref().join(SCENES_FOLDER),
            name: SceneFileName::default(),
        }
    }

    /// Full path of the scene file.
    pub fn path(&self) -> PathBuf {
        self.folder.join(self.name.render())
    }
}

impl Default for SceneFileName {
    fn default() -> Self {
        Self {
            descriptor: DEFAULT_DESCRIPTOR.to_owned(),
            task: DEFAULT_TASK.to_owned(),
            version: 1,
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }
}
