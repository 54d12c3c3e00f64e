//! English verb stems used to tell actions apart from properties.
//!
//! The list ships inside the binary. It is loaded once with [`init`] before
//! any class is processed and is read-only afterwards.

use std::collections::HashSet;
use log::{debug, trace};
use once_cell::sync::OnceCell;

use crate::error::SynthError;

/// A data file compiled into the binary
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedResource {
    pub name: &'static str,
    pub contents: &'static str,
}

/// File name suffix identifying the verb list among embedded resources
pub const VERBS_RESOURCE_SUFFIX: &str = "verbs.txt";

/// Every resource embedded in this crate
pub static EMBEDDED_RESOURCES: &[EmbeddedResource] = &[EmbeddedResource {
    name: "resources/verbs.txt",
    contents: include_str!("../../resources/verbs.txt"),
}];

static VERBS: OnceCell<VerbDictionary> = OnceCell::new();

/// Immutable set of verb stems
#[derive(Debug, Clone, Default)]
pub struct VerbDictionary {
    verbs: HashSet<String>,
}

impl VerbDictionary {
    /// Build a dictionary from newline-delimited text, skipping blank lines
    pub fn parse(contents: &str) -> Self {
        let verbs = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { verbs }
    }
    
    /// Locate the single verb list among `resources` and parse it
    pub fn from_resources(resources: &[EmbeddedResource]) -> Result<Self, SynthError> {
        let mut matching = resources
            .iter()
            .filter(|resource| resource.name.ends_with(VERBS_RESOURCE_SUFFIX));
        
        let resource = match (matching.next(), matching.count()) {
            (None, _) => return Err(SynthError::MissingVerbResource),
            (Some(resource), 0) => resource,
            (Some(_), rest) => return Err(SynthError::AmbiguousVerbResource { count: rest + 1 }),
        };
        
        trace!("Reading verbs from {}", resource.name);
        Ok(Self::parse(resource.contents))
    }
    
    pub fn contains(&self, word: &str) -> bool {
        self.verbs.contains(word)
    }
    
    pub fn len(&self) -> usize {
        self.verbs.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

/// Load the process-wide dictionary, once.
///
/// Call this before spawning workers; later calls return the same instance.
pub fn init() -> Result<&'static VerbDictionary, SynthError> {
    VERBS.get_or_try_init(|| {
        let dictionary = VerbDictionary::from_resources(EMBEDDED_RESOURCES)?;
        debug!("Loaded {} verbs", dictionary.len());
        Ok(dictionary)
    })
}

/// The process-wide dictionary, if [`init`] already ran
pub fn get() -> Option<&'static VerbDictionary> {
    VERBS.get()
}
