use log::trace;

use crate::model::ApiModel;
use super::naming;
use super::registry::{demote, PropertyRegistry};
use super::verbs::VerbDictionary;

/// First words that mark a getter as a property even if they are verbs
const PROPERTY_PREFIXES: &[&str] = &["get", "is", "has"];

/// First words that mark a getter as a conversion or factory
const ACTION_PREFIXES: &[&str] = &["to", "new"];

/// Whether a getter-only method name reads as an action rather than a value.
///
/// `getSize`, `isEmpty` and `hasFocus` never do. `toString`, `newInstance` and
/// names starting with a dictionary verb (`update`, `clone`) do. Everything else
/// stays a property.
pub fn is_action_like(getter_name: &str, verbs: &VerbDictionary) -> bool {
    let word = naming::first_word(getter_name);
    if word.len() < getter_name.len() && naming::matches_word(&word, PROPERTY_PREFIXES) {
        return false;
    }
    
    naming::matches_word(&word, ACTION_PREFIXES) || verbs.contains(word.trim_end_matches('_'))
}

/// Revert getter-only properties whose getter looks like an action.
///
/// Returns the number of getters turned back into plain methods.
pub fn filter_action_getters(model: &mut ApiModel, registry: &mut PropertyRegistry, verbs: &VerbDictionary) -> usize {
    let class = registry.class();
    let mut demoted = 0;
    
    for index in (0..registry.len()).rev() {
        let property = &registry.properties()[index];
        if property.has_setter() {
            continue;
        }
        let Some(getter) = property.getter else {
            continue;
        };
        
        if is_action_like(&model.method(getter).name, verbs) {
            trace!("{} looks like an action, keeping it a method", model.method(getter).name);
            demote(model, class, getter);
            registry.remove(index);
            demoted += 1;
        }
    }
    
    demoted
}
