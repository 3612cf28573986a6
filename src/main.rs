use anyhow::Result;
use clap::Parser;
use rabbitbench::cli::{Cli, OutputFormat};
use rabbitbench::output;
use rabbitbench::pipeline::evaluate_report;
use rabbitbench::report::Report;
use rabbitbench::thresholds_file::ThresholdsFile;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let thresholds = ThresholdsFile::from_file(&args.thresholds)?;
    let report = Report::from_file(&args.report)?;

    tracing::debug!(
        rules = thresholds.threshold.len(),
        results = report.results.len(),
        "inputs loaded"
    );

    let summary = evaluate_report(&report, &thresholds);

    match args.format {
        OutputFormat::Text => print!("{}", output::to_text(&summary)),
        OutputFormat::Json => println!("{}", output::to_json(&summary)?),
    }

    if args.fail_on_alert && summary.has_alerts() {
        std::process::exit(1);
    }

    Ok(())
}
