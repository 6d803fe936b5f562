use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing::info;

use filemeta::cli::{Args, OutputFormat};
use filemeta::output::OutputFormatter;
use filemeta::{logging, FsAttributes, MetadataAggregator, SignatureMatcher};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init(args.verbosity());
    args.validate().context("Invalid arguments")?;

    let matcher = SignatureMatcher::with_user_rules(args.signatures.as_deref())
        .context("Cannot load signatures")?;
    info!(rules = matcher.rules().len(), "signature table ready");

    let aggregator = MetadataAggregator::new(
        matcher,
        FsAttributes::new(!args.no_follow),
        args.aggregator_options(),
    );
    let outcomes = aggregator.build_reports(&args.paths);

    if args.format == OutputFormat::Text {
        for error in outcomes.iter().filter_map(|o| o.error()) {
            eprintln!("filemeta: {error}");
        }
    }

    let rendered = OutputFormatter::format(&outcomes, args.format)?;
    match args.output_file {
        Some(ref path) => std::fs::write(path, &rendered)
            .with_context(|| format!("Cannot write output to {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Cannot write output to stdout")?;
        }
    }

    let failures = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!(inspected = outcomes.len(), failures, "done");

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
