use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use log::info;

use accessor_synth::{Config, SynthesisDriver};

/// Turn getter/setter method pairs of parsed API models into properties
#[derive(Debug, Parser)]
#[command(name = "accessor-synth", version, about)]
struct Cli {
    /// Model file or directory of model files (JSON)
    input: PathBuf,
    
    /// Directory receiving the processed models and the report
    #[arg(short, long, default_value = "synth_output")]
    output: PathBuf,
    
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    
    /// Keep every getter-only candidate as a property
    #[arg(long)]
    no_heuristics: bool,
    
    /// Number of worker threads
    #[arg(short = 'j', long)]
    threads: Option<usize>,
    
    /// Maximum number of model files to process
    #[arg(long)]
    max_files: Option<usize>,
    
    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
    
    let mut config = match &cli.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    };
    if cli.no_heuristics {
        config.synthesis.use_heuristics = false;
    }
    if cli.threads.is_some() {
        config.run.parallel_threads = cli.threads;
    }
    if cli.max_files.is_some() {
        config.run.max_files = cli.max_files;
    }
    config.run.verbose_errors |= cli.verbose;
    
    let driver = SynthesisDriver::new(config, &cli.output)?;
    let result = driver.process_input(&cli.input)?;
    
    info!(
        "Done: {} properties, {} renames, {} failed files",
        result.report.stats.properties_committed,
        result.report.renames.len(),
        result.error_file_paths.len()
    );
    
    if result.error_file_paths.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} model files could not be processed", result.error_file_paths.len())
    }
}
