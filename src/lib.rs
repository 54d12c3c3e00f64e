pub mod error;
pub mod model;
pub mod synth;
pub mod driver;
pub mod utils;

// Re-export main types and functions for easier access
pub use error::SynthError;
pub use model::{ApiModel, ModelStorage};
pub use synth::{AccessorSynthesisPass, Config, PassOptions, RunOptions, SynthesisReport, SynthesisStats};
pub use driver::SynthesisDriver;

// Re-export utility functions
pub use utils::file_utils;
