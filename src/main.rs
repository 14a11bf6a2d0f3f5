use anyhow::{Context, Result};
use clap::Parser;
use monthvary::{confirmation_line, vary_file, OutputFormat};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// With no arguments, reads `original_data.csv`, writes `modified_data3.csv`, and
/// prints one confirmation line naming the output file.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Create a synthetic variant of a CSV table by adding Gaussian noise to its monthly columns"
)]
struct Args {
    #[arg(short, long, default_value = "original_data.csv")]
    input: PathBuf,
    /// Also the path named in the confirmation line
    #[arg(short, long, default_value = "modified_data3.csv")]
    output: PathBuf,
    /// Output format; inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    // logs go to stderr, stdout only carries the confirmation line
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let format = args
        .format
        .unwrap_or_else(|| OutputFormat::from_path(&args.output));

    let mut rng = rand::rng();
    let summary = vary_file(&args.input, &args.output, format, &mut rng)
        .with_context(|| format!("creating variations of {}", args.input.display()))?;
    info!(
        rows = summary.rows,
        columns = summary.columns,
        monthly = summary.monthly_columns.len(),
        bytes = summary.bytes_written,
        "done"
    );

    println!("{}", confirmation_line(&args.output));
    Ok(())
}
