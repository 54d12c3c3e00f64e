mod file_collector;
mod progress;

use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use chrono::Utc;
use log::{debug, info, warn};
use serde::{Serialize, Deserialize};

use crate::model::ModelStorage;
use crate::synth::{AccessorSynthesisPass, Config, RenameLog, RenameRecord, RunOptions, SynthesisReport, SynthesisStats};
use crate::utils::file_utils;

// Re-export from submodules
pub use file_collector::FileCollector;
pub use progress::ProgressTracker;

/// Name of the report written next to the processed models
pub const REPORT_FILE_NAME: &str = "synthesis_report.json";

/// Result of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverResult {
    /// Merged synthesis report over all successful files
    pub report: SynthesisReport,
    
    /// Files processed and written successfully
    pub processed_files: Vec<PathBuf>,
    
    /// Files that failed to load or save
    pub error_file_paths: Vec<PathBuf>,
}

/// Runs the synthesis pass over model files on disk
#[derive(Debug)]
pub struct SynthesisDriver {
    /// Batch options
    options: RunOptions,
    
    /// The configured pass, shared by every worker
    pass: AccessorSynthesisPass,
    
    /// Directory receiving processed models and the report
    output_dir: PathBuf,
    
    /// File collector for finding model files
    file_collector: FileCollector,
    
    /// Progress display for large batches
    progress_tracker: ProgressTracker,
}

impl SynthesisDriver {
    /// Create a driver; loads the verb list before any worker starts
    pub fn new(config: Config, output_dir: impl AsRef<Path>) -> Result<Self> {
        let pass = AccessorSynthesisPass::new(config.synthesis)
            .context("Failed to initialize accessor synthesis")?;
        
        Ok(Self {
            options: config.run,
            pass,
            output_dir: output_dir.as_ref().to_path_buf(),
            file_collector: FileCollector::new(),
            progress_tracker: ProgressTracker::new(),
        })
    }
    
    /// Replace the progress tracker
    pub fn with_progress_tracker(mut self, progress_tracker: ProgressTracker) -> Self {
        self.progress_tracker = progress_tracker;
        self
    }
    
    /// Process a model file or every model file below a directory
    pub fn process_input(&self, input: impl AsRef<Path>) -> Result<DriverResult> {
        let input = input.as_ref();
        info!("Scanning input: {}", input.display());
        
        let files = self.file_collector.collect_files(input)?;
        info!("Found {} model files to process", files.len());
        
        // A single file is written straight into the output directory
        let input_root = if input.is_dir() {
            input
        } else {
            input.parent().unwrap_or(input)
        };
        self.process_files(input_root, &files)
    }
    
    /// Process the given model files and write the results.
    ///
    /// Outputs mirror the layout of the files below `input_root`.
    pub fn process_files(&self, input_root: impl AsRef<Path>, files: &[PathBuf]) -> Result<DriverResult> {
        let input_root = input_root.as_ref();
        let files = match self.options.max_files {
            Some(max_files) if files.len() > max_files => {
                warn!("Limiting to {} files out of {}", max_files, files.len());
                &files[..max_files]
            }
            _ => files,
        };
        
        file_utils::ensure_dir_exists(&self.output_dir)?;
        
        let thread_count = self.options.parallel_threads.unwrap_or_else(|| {
            let available = num_cpus::get();
            let used = std::cmp::max(1, available.saturating_sub(1));
            debug!("Using {} threads for parallel processing (available: {})", used, available);
            used
        });
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .build()
            .context("Failed to build thread pool")?;
        
        let outcomes = pool.install(|| {
            self.progress_tracker.track_path_progress(files, |file| {
                let outcome = self.process_file(input_root, file).map_err(|e| {
                    if self.options.verbose_errors {
                        warn!("Failed to process {}: {:#}", file.display(), e);
                    } else {
                        warn!("Failed to process {}: {}", file.display(), e);
                    }
                });
                Some((file.clone(), outcome))
            })
        });
        
        let mut stats = SynthesisStats::new();
        let mut renames = Vec::new();
        let mut processed_files = Vec::new();
        let mut error_file_paths = Vec::new();
        
        for (file, outcome) in outcomes {
            match outcome {
                Ok((file_stats, file_renames)) => {
                    stats.merge(&file_stats);
                    renames.extend(file_renames);
                    processed_files.push(file);
                }
                Err(()) => error_file_paths.push(file),
            }
        }
        
        let result = DriverResult {
            report: SynthesisReport {
                generated_at: Utc::now(),
                options: *self.pass.options(),
                stats,
                renames,
            },
            processed_files,
            error_file_paths,
        };
        
        let report_path = self.output_dir.join(REPORT_FILE_NAME);
        let content = serde_json::to_string_pretty(&result)
            .context("Failed to serialize synthesis report")?;
        file_utils::write_string_to_file(&report_path, &content)?;
        
        info!(
            "Processed {} files ({} failed), committed {} properties",
            result.processed_files.len(),
            result.error_file_paths.len(),
            result.report.stats.properties_committed
        );
        
        Ok(result)
    }
    
    /// Load, transform and save one model
    fn process_file(&self, input_root: &Path, file: &Path) -> Result<(SynthesisStats, Vec<RenameRecord>)> {
        let mut model = ModelStorage::new(file).load()?;
        
        let mut log = RenameLog::new();
        let stats = self.pass.run(&mut model, &mut log);
        
        // Mirror the input layout so equal file names never collide
        ModelStorage::new(file_utils::output_path_for(file, input_root, &self.output_dir)).save(&model)?;
        Ok((stats, log.into_records()))
    }
}
