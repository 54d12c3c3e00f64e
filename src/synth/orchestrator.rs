use std::collections::HashSet;
use chrono::{DateTime, Utc};
use log::{debug, info, trace};
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::error::SynthError;
use crate::model::{ApiModel, ClassId, MethodId, Property};
use super::classifier;
use super::comments::merge_accessor_comments;
use super::diagnostics::{DiagnosticSink, RenameLog, RenameRecord};
use super::heuristics::filter_action_getters;
use super::naming;
use super::options::PassOptions;
use super::overrides::resolve_override;
use super::registry::{demote, AccessorRole, PropertyRegistry};
use super::renamer::rename_conflicting_members;
use super::stats::SynthesisStats;
use super::verbs::{self, VerbDictionary};

/// Outcome of a run over one or more models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisReport {
    /// When the run finished
    pub generated_at: DateTime<Utc>,
    
    /// Options the run used
    pub options: PassOptions,
    
    /// Totals over every processed model
    pub stats: SynthesisStats,
    
    /// Every rename performed, in processing order
    pub renames: Vec<RenameRecord>,
}

/// Turns getter/setter methods into properties, class by class
#[derive(Debug, Clone, Copy)]
pub struct AccessorSynthesisPass {
    /// Pass configuration
    options: PassOptions,
    
    /// Verb stems for the action heuristic
    verbs: &'static VerbDictionary,
}

impl AccessorSynthesisPass {
    /// Create the pass, loading the embedded verb list if needed
    pub fn new(options: PassOptions) -> Result<Self, SynthError> {
        Ok(Self::with_dictionary(options, verbs::init()?))
    }
    
    /// Create the pass around an already loaded dictionary
    pub fn with_dictionary(options: PassOptions, verbs: &'static VerbDictionary) -> Self {
        Self { options, verbs }
    }
    
    pub fn options(&self) -> &PassOptions {
        &self.options
    }
    
    /// Process every class of `model` once, bases before derived classes
    pub fn run(&self, model: &mut ApiModel, sink: &mut dyn DiagnosticSink) -> SynthesisStats {
        let mut stats = SynthesisStats::new();
        let mut visited = HashSet::new();
        
        for class in model.class_ids().collect::<Vec<_>>() {
            self.visit_class(model, class, &mut visited, &mut stats, sink);
        }
        
        debug!(
            "Model `{}`: {} classes, {} properties, {} demoted, {} renamed",
            model.name, stats.classes_visited, stats.properties_committed, stats.methods_demoted, stats.members_renamed
        );
        stats
    }
    
    /// Process independent models in parallel
    pub fn run_units(&self, units: &mut [ApiModel]) -> SynthesisReport {
        info!("Synthesizing properties for {} models", units.len());
        
        let results: Vec<(SynthesisStats, Vec<RenameRecord>)> = units
            .par_iter_mut()
            .map(|unit| {
                let mut log = RenameLog::new();
                let stats = self.run(unit, &mut log);
                (stats, log.into_records())
            })
            .collect();
        
        let mut report = SynthesisReport {
            generated_at: Utc::now(),
            options: self.options,
            stats: SynthesisStats::new(),
            renames: Vec::new(),
        };
        for (stats, renames) in results {
            report.stats.merge(&stats);
            report.renames.extend(renames);
        }
        
        info!(
            "Committed {} properties across {} classes",
            report.stats.properties_committed, report.stats.classes_visited
        );
        report
    }
    
    fn visit_class(
        &self,
        model: &mut ApiModel,
        class: ClassId,
        visited: &mut HashSet<ClassId>,
        stats: &mut SynthesisStats,
        sink: &mut dyn DiagnosticSink,
    ) {
        let class = model.definition_of(class);
        if !visited.insert(class) {
            return;
        }
        
        // Base properties must exist before overrides look for them
        let bases: Vec<ClassId> = model.class(class).bases.iter().map(|b| b.class).collect();
        for base in bases {
            self.visit_class(model, base, visited, stats, sink);
        }
        
        let class_stats = self.process_class(model, class, sink);
        stats.merge(&class_stats);
    }
    
    /// Run every step for a single class and commit the surviving properties
    pub fn process_class(&self, model: &mut ApiModel, class: ClassId, sink: &mut dyn DiagnosticSink) -> SynthesisStats {
        let mut stats = SynthesisStats {
            classes_visited: 1,
            ..SynthesisStats::default()
        };
        
        let mut registry = self.collect_candidates(model, class);
        
        // Committed properties completed by a new accessor
        for &index in registry.completed() {
            let property = &model.class(class).properties[index];
            let comment = merge_accessor_comments(model, property);
            trace!("Completed committed property {}::{}", model.class(class).name, property.name);
            model.class_mut(class).properties[index].comment = comment;
            stats.methods_absorbed += 1;
        }
        
        if self.options.use_heuristics {
            stats.methods_demoted += filter_action_getters(model, &mut registry, self.verbs);
        }
        
        // Override resolution, finalization, then commit
        for mut property in registry.into_properties() {
            stats.methods_demoted += resolve_override(model, class, &mut property);
            
            let (keep, demoted) = finalize(model, class, &mut property);
            stats.methods_demoted += demoted;
            if !keep {
                continue;
            }
            
            stats.members_renamed += rename_conflicting_members(model, class, &property.name, sink);
            property.comment = merge_accessor_comments(model, &property);
            property.namespace = class;
            
            stats.methods_absorbed += property.accessors().filter(|id| id.class == class).count();
            stats.properties_committed += 1;
            trace!("Committed property {}::{}", model.class(class).name, property.name);
            model.class_mut(class).properties.push(property);
        }
        
        stats
    }
    
    /// Classify the eligible methods of `class` and merge them into its properties
    fn collect_candidates(&self, model: &mut ApiModel, class: ClassId) -> PropertyRegistry {
        let mut registry = PropertyRegistry::new(class);
        
        let candidates: Vec<MethodId> = model
            .class(class)
            .method_ids()
            .filter(|id| classifier::is_candidate(model.method(*id)))
            .collect();
        
        for id in candidates {
            let method = model.method(id);
            
            if classifier::is_getter(method) {
                let name = naming::property_name_from_getter(&method.name);
                let qualified_type = method.return_type.clone();
                registry.get_or_create(model, id, &name, qualified_type, AccessorRole::Getter);
                continue;
            }
            
            if classifier::is_setter(method) {
                let name = naming::property_name_from_setter(&method.name);
                if name.is_empty() {
                    continue;
                }
                let Some(parameter) = method.regular_parameters().next() else {
                    continue;
                };
                let qualified_type = parameter.qualified_type.clone();
                registry.get_or_create(model, id, &name, qualified_type, AccessorRole::Setter);
            }
        }
        
        registry
    }
}

/// Decide whether a pending property can be committed.
///
/// A property needs a getter, and a getter-only property cannot stand for an
/// overloaded method set. Returns whether to keep it and how many accessors
/// were demoted.
fn finalize(model: &mut ApiModel, class: ClassId, property: &mut Property) -> (bool, usize) {
    let Some(getter) = property.getter else {
        let demoted = property
            .setter
            .take()
            .map_or(0, |setter| usize::from(demote(model, class, setter)));
        return (false, demoted);
    };
    
    if property.setter.is_none() && has_overloads(model, class, getter) {
        trace!("{} is overloaded, keeping it a method", model.method(getter).name);
        property.getter = None;
        return (false, usize::from(demote(model, class, getter)));
    }
    
    (true, 0)
}

/// Whether `class` declares another non-excluded method sharing the getter's name
fn has_overloads(model: &ApiModel, class: ClassId, getter: MethodId) -> bool {
    let name = &model.method(getter).original_name;
    model
        .class(class)
        .method_ids()
        .any(|id| id != getter && !model.method(id).is_ignored() && model.method(id).original_name == *name)
}
