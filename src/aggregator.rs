//! Builds one [`FileReport`] per input path.

use rayon::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::attributes::{AttributeSource, FileKind, FsAttributes};
use crate::error::IoError;
use crate::report::{extension_type, file_extension, file_name, render_permissions, FileReport};
use crate::scan::{detect_line_ending, LineEnding};
use crate::signature::{FilePrefix, SignatureMatcher, UNKNOWN_LABEL};

#[derive(Debug, Clone, Copy, Default)]
pub struct AggregatorOptions {
    /// Maximum bytes examined by the line ending scan.
    pub scan_limit: Option<u64>,
    /// Inspect paths on the rayon pool. Output order is unchanged.
    pub parallel: bool,
    /// Stop at the first path whose attributes cannot be read.
    /// Forces sequential processing.
    pub fail_fast: bool,
}

/// The result of inspecting one input path.
#[derive(Debug)]
pub struct PathOutcome {
    pub path: PathBuf,
    pub result: Result<FileReport, IoError>,
}

impl PathOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn report(&self) -> Option<&FileReport> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&IoError> {
        self.result.as_ref().err()
    }
}

pub struct MetadataAggregator<A: AttributeSource = FsAttributes> {
    matcher: SignatureMatcher,
    attributes: A,
    options: AggregatorOptions,
}

impl MetadataAggregator<FsAttributes> {
    pub fn with_defaults() -> Self {
        Self::new(
            SignatureMatcher::builtin(),
            FsAttributes::default(),
            AggregatorOptions::default(),
        )
    }
}

impl<A: AttributeSource> MetadataAggregator<A> {
    pub fn new(matcher: SignatureMatcher, attributes: A, options: AggregatorOptions) -> Self {
        Self {
            matcher,
            attributes,
            options,
        }
    }

    /// Builds the report for a single path.
    ///
    /// Fails only when the attributes cannot be read. If the content can't
    /// be opened or read afterwards, the report still carries the
    /// attributes with an unknown content type and no line ending.
    ///
    /// Only regular files are opened. Directories, devices, FIFOs, sockets
    /// and unfollowed symlinks report no content.
    pub fn build_report(&self, path: &Path) -> Result<FileReport, IoError> {
        debug!(path = %path.display(), "building report");

        let path_str = path.to_string_lossy();
        let extension = file_extension(&path_str);
        let attributes = self.attributes.stat(path)?;

        let (content_type, line_ending) = if attributes.kind != FileKind::RegularFile {
            debug!(kind = %attributes.kind, "skipping content scan");
            (UNKNOWN_LABEL.to_string(), LineEnding::None)
        } else {
            let content_type = self.identify_content(path).unwrap_or_else(|e| {
                warn!(error = %e, "content type unavailable");
                UNKNOWN_LABEL.to_string()
            });
            let line_ending = self.scan_line_ending(path).unwrap_or_else(|e| {
                warn!(error = %e, "line ending unavailable");
                LineEnding::None
            });
            (content_type, line_ending)
        };

        Ok(FileReport {
            path: path_str.to_string(),
            name: file_name(&path_str).to_string(),
            extension: extension.to_string(),
            extension_type: extension_type(extension).to_string(),
            size_bytes: attributes.size,
            creation_time: attributes.created,
            modification_time: attributes.modified,
            filesystem_type: attributes.kind,
            permissions: render_permissions(attributes.kind, attributes.mode),
            line_ending,
            content_type,
        })
    }

    /// Builds reports for every path, in input order.
    pub fn build_reports<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Vec<PathOutcome> {
        if self.options.parallel && !self.options.fail_fast {
            debug!(count = paths.len(), "inspecting paths in parallel");
            return paths
                .par_iter()
                .map(|path| self.outcome(path.as_ref()))
                .collect();
        }

        let mut outcomes = Vec::with_capacity(paths.len());
        for path in paths {
            let outcome = self.outcome(path.as_ref());
            let failed = !outcome.is_ok();
            outcomes.push(outcome);
            if failed && self.options.fail_fast {
                debug!(remaining = paths.len() - outcomes.len(), "stopping at first failure");
                break;
            }
        }
        outcomes
    }

    fn outcome(&self, path: &Path) -> PathOutcome {
        PathOutcome {
            path: path.to_path_buf(),
            result: self.build_report(path),
        }
    }

    fn identify_content(&self, path: &Path) -> Result<String, IoError> {
        let file = File::open(path).map_err(|e| IoError::open_error(path, e))?;
        let prefix = FilePrefix::read_from(file).map_err(|e| IoError::read_error(path, e))?;
        trace!(prefix = ?prefix.as_bytes(), "read prefix");
        Ok(self.matcher.identify(&prefix).to_string())
    }

    fn scan_line_ending(&self, path: &Path) -> Result<LineEnding, IoError> {
        let file = File::open(path).map_err(|e| IoError::open_error(path, e))?;
        detect_line_ending(file, self.options.scan_limit).map_err(|e| IoError::read_error(path, e))
    }
}
