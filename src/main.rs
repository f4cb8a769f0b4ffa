use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use abcompute::config::PlanFile;
use abcompute::export::{export_csv, format_table};

/// Sample size and duration planner for A/B experiments
#[derive(Parser, Debug)]
#[command(name = "abcompute")]
#[command(author, version, about)]
struct Cli {
    /// Request file (TOML) describing metrics, MDE sweep and traffic
    request: PathBuf,

    /// Also write the results as CSV to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Significance level, overriding the request file
    #[arg(long)]
    alpha: Option<f64>,

    /// Target power, overriding the request file
    #[arg(long)]
    power: Option<f64>,

    /// Use a one-sided test
    #[arg(long)]
    one_sided: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env("ABCOMPUTE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut file = PlanFile::load(&cli.request)
        .with_context(|| format!("failed to load {}", cli.request.display()))?;
    if let Some(alpha) = cli.alpha {
        file.significance_level = alpha;
    }
    if let Some(power) = cli.power {
        file.power = power;
    }
    if cli.one_sided {
        file.two_sided = false;
    }

    let base_dir = cli.request.parent().unwrap_or(Path::new("."));
    let request = file.into_request(base_dir)?;
    tracing::debug!(
        metrics = request.metrics.len(),
        alpha = request.config.significance_level(),
        power = request.config.power(),
        two_sided = request.two_sided,
        "planning experiment"
    );

    let table = request.run().context("failed to compute sample sizes")?;
    print!("{}", format_table(&table));

    if let Some(output) = &cli.output {
        export_csv(&table, output)
            .with_context(|| format!("failed to write {}", output.display()))?;
    }
    Ok(())
}
