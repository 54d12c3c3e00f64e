use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// Only show a bar for batches larger than this
const MIN_ITEMS_FOR_BAR: usize = 10;

/// Progress tracker for parallel model processing
#[derive(Debug, Default)]
pub struct ProgressTracker {
    /// Hide the bar regardless of batch size
    hidden: bool,
}

impl ProgressTracker {
    /// Create a new progress tracker
    pub fn new() -> Self {
        Self { hidden: false }
    }
    
    /// Create a tracker that never draws
    pub fn hidden() -> Self {
        Self { hidden: true }
    }
    
    /// Run `operation` over `paths` in parallel, keeping the `Some` results in input order
    pub fn track_path_progress<F, R>(&self, paths: &[PathBuf], operation: F) -> Vec<R>
    where
        F: Fn(&PathBuf) -> Option<R> + Sync + Send,
        R: Send,
    {
        let progress_bar = (!self.hidden && paths.len() > MIN_ITEMS_FOR_BAR).then(|| {
            let pb = ProgressBar::new(paths.len() as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} models ({eta}) {msg}")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb
        });
        
        let processed_count = AtomicUsize::new(0);
        
        let results: Vec<R> = paths.par_iter()
            .filter_map(|path| {
                let current_count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
                if let Some(pb) = &progress_bar {
                    pb.set_position(current_count as u64);
                    
                    // Update message occasionally to avoid too many updates
                    if current_count % 10 == 0 || current_count == 1 || current_count == paths.len() {
                        if let Some(file_name) = path.file_name() {
                            pb.set_message(format!("Processing: {}", file_name.to_string_lossy()));
                        }
                    }
                }
                
                operation(path)
            })
            .collect();
        
        if let Some(pb) = progress_bar {
            pb.finish_with_message("Processing complete");
        }
        
        results
    }
}
