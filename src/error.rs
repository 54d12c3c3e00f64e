use thiserror::Error;

/// Errors raised by the synthesis library
#[derive(Debug, Error)]
pub enum SynthError {
    /// No embedded verb list could be found
    #[error("cannot find embedded verbs data resource")]
    MissingVerbResource,
    
    /// More than one embedded resource claims to be the verb list
    #[error("found {count} embedded verbs data resources, expected exactly one")]
    AmbiguousVerbResource { count: usize },
    
    /// Configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    
    /// The input graph breaks a structural contract
    #[error("malformed API model `{model}`: {reason}")]
    Model { model: String, reason: String },
}
