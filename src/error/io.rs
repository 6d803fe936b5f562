use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("stat '{path}': no such file or directory")]
    NotFound { path: PathBuf },

    #[error("stat '{path}': permission denied")]
    PermissionDenied { path: PathBuf },

    #[error("stat '{path}': {source}")]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("open '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IoError {
    /// Maps a failed attribute lookup onto the variant a user can act on.
    pub fn stat_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            ErrorKind::NotFound => Self::NotFound { path },
            ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Stat { path, source },
        }
    }

    pub fn open_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
