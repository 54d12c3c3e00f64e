use serde::{Serialize, Deserialize};

/// Counters collected while synthesizing properties
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisStats {
    /// Number of classes processed
    pub classes_visited: usize,
    
    /// Number of properties committed to their classes
    pub properties_committed: usize,
    
    /// Number of methods now reachable only through a property
    pub methods_absorbed: usize,
    
    /// Number of accessor candidates reverted to plain methods
    pub methods_demoted: usize,
    
    /// Number of methods and events renamed to avoid a property name
    pub members_renamed: usize,
}

impl SynthesisStats {
    /// Create a new stats instance
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Merge another stats instance into this one
    pub fn merge(&mut self, other: &Self) {
        self.classes_visited += other.classes_visited;
        self.properties_committed += other.properties_committed;
        self.methods_absorbed += other.methods_absorbed;
        self.methods_demoted += other.methods_demoted;
        self.members_renamed += other.members_renamed;
    }
    
    /// Average number of committed properties per visited class
    pub fn avg_properties_per_class(&self) -> f64 {
        if self.classes_visited == 0 {
            return 0.0;
        }
        
        self.properties_committed as f64 / self.classes_visited as f64
    }
    
    /// Whether the run changed nothing
    pub fn is_noop(&self) -> bool {
        self.properties_committed == 0 && self.methods_absorbed == 0 && self.members_renamed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn merge_adds_counters() {
        let mut total = SynthesisStats { classes_visited: 2, properties_committed: 3, ..Default::default() };
        total.merge(&SynthesisStats { classes_visited: 1, members_renamed: 1, ..Default::default() });
        
        assert_eq!(total.classes_visited, 3);
        assert_eq!(total.members_renamed, 1);
        assert!((total.avg_properties_per_class() - 1.0).abs() < f64::EPSILON);
        assert!(!total.is_noop());
    }
}
