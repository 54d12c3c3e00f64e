use crate::model::{ApiModel, ClassId};
use super::classifier::PASS_NAME;
use super::diagnostics::{DiagnosticSink, MemberKind, RenameRecord};
use super::naming::capitalize;

/// Rename members of `class` that would clash with the property `property_name`.
///
/// Generated methods become `get<Name>`, events become `on<Name>`. Renamed
/// methods are excluded from accessor synthesis so a later run cannot turn
/// them into properties again. Returns the number of renamed members.
pub fn rename_conflicting_members(
    model: &mut ApiModel,
    class: ClassId,
    property_name: &str,
    sink: &mut dyn DiagnosticSink,
) -> usize {
    let class = model.class_mut(class);
    let mut records = Vec::new();
    
    for method in class.methods.iter_mut().filter(|m| m.is_generated() && m.name == property_name) {
        let old_name = std::mem::replace(&mut method.name, format!("get{}", capitalize(property_name)));
        method.excluded_passes.insert(PASS_NAME.to_string());
        records.push((MemberKind::Method, old_name, method.name.clone()));
    }
    
    for event in class.events.iter_mut().filter(|e| e.name == property_name) {
        let old_name = std::mem::replace(&mut event.name, format!("on{}", capitalize(property_name)));
        records.push((MemberKind::Event, old_name, event.name.clone()));
    }
    
    let renamed = records.len();
    for (member, old_name, new_name) in records {
        sink.record_rename(RenameRecord {
            class_name: class.name.clone(),
            member,
            old_name,
            new_name,
        });
    }
    renamed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GenerationKind, Method, Parameter, PrimitiveType, QualifiedType};
    use crate::synth::diagnostics::RenameLog;
    
    #[test]
    fn generated_methods_and_events_are_renamed() {
        let mut model = ApiModel::new("unit");
        let class = model.add_class("Button");
        let int = QualifiedType::builtin(PrimitiveType::Int);
        let clash = model.add_method(class, Method::new("clicked", QualifiedType::void())
            .with_param(Parameter::regular("x", int.clone()))
            .with_param(Parameter::regular("y", int.clone())));
        let absorbed = model.add_method(class, Method::new("clicked", int));
        model.method_mut(absorbed).generation_kind = GenerationKind::Internal;
        model.add_event(class, "clicked");
        
        let mut log = RenameLog::new();
        let renamed = rename_conflicting_members(&mut model, class, "clicked", &mut log);
        
        assert_eq!(renamed, 2);
        assert_eq!(model.method(clash).name, "getClicked");
        assert!(model.method(clash).is_excluded_from(PASS_NAME));
        assert_eq!(model.method(absorbed).name, "clicked");
        assert_eq!(model.class(class).events[0].name, "onClicked");
        
        let records = log.records();
        assert_eq!(records[0].member, MemberKind::Method);
        assert_eq!(records[0].old_name, "clicked");
        assert_eq!(records[1].new_name, "onClicked");
        assert_eq!(records[1].class_name, "Button");
    }
}
