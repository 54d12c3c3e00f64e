pub mod verbs;
pub mod classifier;
pub mod naming;
pub mod registry;
pub mod heuristics;
pub mod overrides;
pub mod renamer;
pub mod comments;
pub mod diagnostics;
pub mod options;
pub mod stats;
mod orchestrator;

// Re-export the main API for easier access
pub use orchestrator::{AccessorSynthesisPass, SynthesisReport};
pub use options::{Config, PassOptions, RunOptions};
pub use diagnostics::{DiagnosticSink, LogSink, MemberKind, RenameLog, RenameRecord};
pub use stats::SynthesisStats;
pub use verbs::VerbDictionary;
