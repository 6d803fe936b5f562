//! Filesystem attribute lookup.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;
use std::fs::{self, Metadata};
use std::path::Path;
use std::time::SystemTime;
use tracing::trace;

use crate::error::IoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileKind {
    #[serde(rename = "directory")]
    Directory,
    #[serde(rename = "regular file")]
    RegularFile,
    #[serde(rename = "symlink")]
    Symlink,
    #[serde(rename = "unknown")]
    Unknown,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Directory => "directory",
            FileKind::RegularFile => "regular file",
            FileKind::Symlink => "symlink",
            FileKind::Unknown => "unknown",
        }
    }

    fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            FileKind::Directory
        } else if file_type.is_file() {
            FileKind::RegularFile
        } else if file_type.is_symlink() {
            FileKind::Symlink
        } else {
            FileKind::Unknown
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttributes {
    pub size: u64,
    /// Inode change time on Unix, birth time elsewhere.
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
    pub kind: FileKind,
    /// Permission bits; only the low nine are rendered.
    pub mode: u32,
}

pub trait AttributeSource: Send + Sync {
    fn stat(&self, path: &Path) -> Result<FileAttributes, IoError>;
}

/// Reads attributes from the operating system.
#[derive(Debug, Clone, Copy)]
pub struct FsAttributes {
    pub follow_symlinks: bool,
}

impl FsAttributes {
    pub fn new(follow_symlinks: bool) -> Self {
        Self { follow_symlinks }
    }
}

impl Default for FsAttributes {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AttributeSource for FsAttributes {
    fn stat(&self, path: &Path) -> Result<FileAttributes, IoError> {
        let metadata = if self.follow_symlinks {
            fs::metadata(path)
        } else {
            fs::symlink_metadata(path)
        }
        .map_err(|e| IoError::stat_error(path, e))?;

        let modified = system_time(metadata.modified().ok());
        let attributes = FileAttributes {
            size: metadata.len(),
            created: change_time(&metadata).unwrap_or(modified),
            modified,
            kind: FileKind::from_file_type(metadata.file_type()),
            mode: permission_bits(&metadata),
        };
        trace!(path = %path.display(), ?attributes, "stat");
        Ok(attributes)
    }
}

fn system_time(time: Option<SystemTime>) -> DateTime<Local> {
    DateTime::<Local>::from(time.unwrap_or(SystemTime::UNIX_EPOCH))
}

#[cfg(unix)]
fn change_time(metadata: &Metadata) -> Option<DateTime<Local>> {
    use chrono::TimeZone;
    use std::os::unix::fs::MetadataExt;

    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    Local.timestamp_opt(metadata.ctime(), nanos).single()
}

#[cfg(not(unix))]
fn change_time(metadata: &Metadata) -> Option<DateTime<Local>> {
    metadata.created().ok().map(DateTime::<Local>::from)
}

#[cfg(unix)]
fn permission_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permission_bits(metadata: &Metadata) -> u32 {
    if metadata.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}
