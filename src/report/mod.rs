//! The per-path metadata report and the pure helpers that fill it.

mod extension;
mod path;
mod permissions;

pub use extension::{extension_type, UNKNOWN_EXTENSION};
pub use path::{file_extension, file_name};
pub use permissions::render_permissions;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::attributes::FileKind;
use crate::scan::LineEnding;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: String,
    pub name: String,
    pub extension: String,
    pub extension_type: String,
    pub size_bytes: u64,
    pub creation_time: DateTime<Local>,
    pub modification_time: DateTime<Local>,
    pub filesystem_type: FileKind,
    pub permissions: String,
    pub line_ending: LineEnding,
    pub content_type: String,
}
