//! Properties built from overriding accessors.
//!
//! A derived class often overrides only one half of an inherited property.
//! The missing half is borrowed from the ancestor property; when no ancestor
//! property exists the override stays a plain method.

use std::collections::HashSet;
use log::trace;

use crate::model::{ApiModel, ClassId, MethodId, Property};
use super::registry::demote;

/// Accessors of a property found in an ancestor class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseAccessors {
    /// Ancestor class owning the property
    pub class: ClassId,
    pub getter: Option<MethodId>,
    pub setter: Option<MethodId>,
}

/// Whether either accessor of `property` overrides a base method
pub fn is_override(model: &ApiModel, property: &Property) -> bool {
    property.accessors().any(|id| model.method(id).is_override)
}

/// Depth-first search of the bases of `class` for the property `property` overrides.
///
/// An ancestor property matches when one of its accessors is the target of a
/// local `overridden` link. Field-backed properties, which only come from the
/// input model, also match an ancestor bound to the same field.
pub fn find_base_property(model: &ApiModel, class: ClassId, property: &Property) -> Option<BaseAccessors> {
    let targets: Vec<MethodId> = property
        .accessors()
        .filter_map(|id| model.method(id).overridden)
        .collect();
    
    let mut seen = HashSet::new();
    seen.insert(model.definition_of(class));
    search_bases(model, class, &targets, property.field.as_deref(), &mut seen)
}

fn search_bases(
    model: &ApiModel,
    class: ClassId,
    targets: &[MethodId],
    field: Option<&str>,
    seen: &mut HashSet<ClassId>,
) -> Option<BaseAccessors> {
    for base in &model.class(class).bases {
        let base_id = model.definition_of(base.class);
        if !seen.insert(base_id) {
            continue;
        }
        
        let found = model.class(base_id).properties.iter().find(|candidate| {
            let linked = candidate.accessors().any(|id| targets.contains(&id));
            let same_field = field.is_some() && candidate.field.as_deref() == field;
            linked || same_field
        });
        if let Some(found) = found {
            return Some(BaseAccessors {
                class: base_id,
                getter: found.getter,
                setter: found.setter,
            });
        }
        
        if let Some(found) = search_bases(model, base_id, targets, field, seen) {
            return Some(found);
        }
    }
    None
}

/// Reconcile an overriding property with its ancestor.
///
/// Returns the number of local accessors demoted.
pub fn resolve_override(model: &mut ApiModel, class: ClassId, property: &mut Property) -> usize {
    if !is_override(model, property) {
        return 0;
    }
    
    let mut demoted = 0;
    match find_base_property(model, class, property) {
        None => {
            trace!("No base property for override {}, keeping one accessor at most", property.name);
            let accessor = match property.setter.take() {
                Some(setter) => Some(setter),
                None => property.getter.take(),
            };
            if let Some(accessor) = accessor {
                demoted += usize::from(demote(model, class, accessor));
            }
        }
        Some(base) if property.getter.is_none() && base.setter.is_some() => {
            trace!("Property {} borrows its getter from {}", property.name, model.class(base.class).name);
            property.getter = base.getter;
        }
        Some(base) if property.setter.is_none() || base.setter.is_none() => {
            if let Some(setter) = property.setter.take() {
                demoted += usize::from(demote(model, class, setter));
            }
            trace!("Property {} takes its setter from {}", property.name, model.class(base.class).name);
            property.setter = base.setter;
        }
        Some(_) => {}
    }
    demoted
}
