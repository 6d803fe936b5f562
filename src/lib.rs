//! filemeta
//!
//! Inspects files and reports their metadata alongside a content type
//! identified from leading signature bytes and the line ending in use.
pub mod aggregator;
pub mod attributes;
pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;
pub mod scan;
pub mod signature;

use std::path::Path;

pub use aggregator::{AggregatorOptions, MetadataAggregator, PathOutcome};
pub use attributes::{AttributeSource, FileAttributes, FileKind, FsAttributes};
pub use report::FileReport;
pub use scan::LineEnding;
pub use signature::{FilePrefix, SignatureMatcher};

/// Inspects a single path with the built-in signatures and default options.
pub fn inspect<P: AsRef<Path>>(path: P) -> error::Result<FileReport> {
    Ok(MetadataAggregator::with_defaults().build_report(path.as_ref())?)
}
