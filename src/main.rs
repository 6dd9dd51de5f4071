//! Command-line driver: trains on the labeled rows of the input and prints a
//! predicted class for every test row.

use anyhow::{Context, Result};
use clap::Parser;
use entropy_tree::{
    load_config, load_from_path, load_from_stdin, Config, ConfigBuilder, Dataset, Predictor,
    TreeBuilder, VerbosityLevel,
};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Fixed-depth entropy decision tree classifier
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "entropy-tree")]
#[command(version)]
#[command(
    about = "Train a depth-2 entropy decision tree on labeled rows and classify rows labeled -1"
)]
struct Cli {
    /// Record file to read; standard input when absent or `-`
    input: Option<PathBuf>,

    /// Configuration file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Build sibling subtrees in parallel
    #[arg(long)]
    parallel: bool,

    /// Log training and classification durations
    #[arg(long)]
    timing: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn apply_overrides(&self, config: Config) -> entropy_tree::Result<Config> {
        let mut builder = ConfigBuilder::from_config(config);
        if self.parallel {
            builder = builder.parallel_branches(true);
        }
        if self.timing {
            builder = builder.report_timing(true);
        }
        if self.verbose {
            builder = builder.verbosity(VerbosityLevel::Debug);
        } else if self.quiet {
            builder = builder.verbosity(VerbosityLevel::Error);
        }
        builder.build()
    }
}

fn init_logging(verbosity: VerbosityLevel) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(verbosity.level_filter());
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    let _ = builder.try_init();
}

/// Returns the file to read, or `None` for standard input.
fn input_file(input: Option<&Path>) -> Option<&Path> {
    input.filter(|path| path.as_os_str() != "-")
}

fn load_dataset(input: Option<&Path>) -> Result<Dataset> {
    match input_file(input) {
        Some(path) => load_from_path(path)
            .with_context(|| format!("failed to load records from {}", path.display())),
        None => load_from_stdin().context("failed to load records from standard input"),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.apply_overrides(load_config(cli.config.as_deref())?)?;
    init_logging(config.verbosity);
    log::debug!("Using {:?}", config);

    let dataset = load_dataset(cli.input.as_deref())?;
    let (training, test) = dataset.split();
    log::info!(
        "{} training record(s), {} test record(s)",
        training.len(),
        test.len()
    );
    if training.is_empty() && !test.is_empty() {
        log::warn!("Input has test records but no training records");
    }

    let started = Instant::now();
    let tree = TreeBuilder::from_config(&config)
        .build(&training)
        .context("failed to train decision tree")?;
    if config.report_timing {
        log::info!("Training took {:?}", started.elapsed());
    }

    let started = Instant::now();
    let predictions = Predictor::new(&tree).predict_all(&test);
    if config.report_timing {
        log::info!("Classification took {:?}", started.elapsed());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for prediction in &predictions {
        writeln!(out, "{}", prediction)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
