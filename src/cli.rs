use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::aggregator::AggregatorOptions;
use crate::logging::Verbosity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "filemeta")]
#[command(about = "Report file metadata, line endings and content type from magic bytes", long_about = None)]
pub struct Args {
    /// Files to inspect, reported in the order given
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Extra content signatures (JSON or YAML), checked after the built-in ones
    #[arg(long, value_name = "FILE")]
    pub signatures: Option<PathBuf>,

    /// Report symlinks themselves instead of their targets
    #[arg(long)]
    pub no_follow: bool,

    /// Stop looking for a line ending after this many bytes
    #[arg(long, value_name = "BYTES")]
    pub scan_limit: Option<u64>,

    /// Inspect files in parallel (output order is unchanged)
    #[arg(short = 'j', long)]
    pub parallel: bool,

    /// Stop at the first file that cannot be inspected
    #[arg(long)]
    pub fail_fast: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref signatures) = self.signatures {
            if !signatures.is_file() {
                anyhow::bail!("Signatures file does not exist: {}", signatures.display());
            }
        }
        if self.scan_limit == Some(0) {
            anyhow::bail!("--scan-limit must be greater than zero");
        }
        Ok(())
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.verbose, self.quiet)
    }

    pub fn aggregator_options(&self) -> AggregatorOptions {
        AggregatorOptions {
            scan_limit: self.scan_limit,
            parallel: self.parallel,
            fail_fast: self.fail_fast,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("filemeta").chain(args.iter().copied()))
    }

    #[test]
    fn test_requires_at_least_one_path() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_paths_keep_order() {
        let args = parse(&["c.txt", "a.txt", "b.txt"]).unwrap();
        assert_eq!(
            args.paths,
            vec![
                PathBuf::from("c.txt"),
                PathBuf::from("a.txt"),
                PathBuf::from("b.txt")
            ]
        );
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_flags() {
        let args = parse(&[
            "-f",
            "json",
            "--no-follow",
            "--scan-limit",
            "4096",
            "-j",
            "-vv",
            "x",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.no_follow);
        assert!(args.parallel);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.verbosity(), Verbosity::Debug);

        let options = args.aggregator_options();
        assert_eq!(options.scan_limit, Some(4096));
        assert!(options.parallel);
        assert!(!options.fail_fast);
    }

    #[test]
    fn test_invalid_format() {
        assert!(parse(&["--format", "xml", "x"]).is_err());
    }

    #[test]
    fn test_validate_missing_signatures_file() {
        let args = parse(&["--signatures", "/nonexistent/sigs.json", "x"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_existing_signatures_file() {
        let temp_dir = TempDir::new().unwrap();
        let sigs = temp_dir.path().join("sigs.json");
        fs::write(&sigs, r#"{"signatures": []}"#).unwrap();

        let args = parse(&["--signatures", sigs.to_str().unwrap(), "x"]).unwrap();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_scan_limit() {
        let args = parse(&["--scan-limit", "0", "x"]).unwrap();
        assert!(args.validate().is_err());
    }
}
