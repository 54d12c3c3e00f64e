use crate::model::{Method, MethodKind, PrimitiveType, SynthKind};

/// Name under which methods can opt out of accessor synthesis
pub const PASS_NAME: &str = "accessor_synthesis";

/// Whether `method` takes part in accessor detection at all
pub fn is_candidate(method: &Method) -> bool {
    let special = match method.kind {
        MethodKind::Normal => false,
        MethodKind::Constructor | MethodKind::Destructor | MethodKind::Operator => true,
    };
    let synthesized = match method.synth_kind {
        SynthKind::Ordinary => false,
        SynthKind::DefaultValueOverload | SynthKind::ComplementOperator | SynthKind::FieldAccessor => true,
    };
    
    !special && !synthesized && method.is_generated() && !method.is_excluded_from(PASS_NAME)
}

/// A getter yields a value and takes no real arguments
pub fn is_getter(method: &Method) -> bool {
    !method.is_destructor()
        && !method.return_type.ty.is_void()
        && method.regular_parameters().next().is_none()
}

/// A setter takes exactly one real argument and returns nothing or a success flag
pub fn is_setter(method: &Method) -> bool {
    let returns = method.return_type.ty.desugar();
    let returns_unit_or_flag = returns.is_void() || returns.is_primitive(PrimitiveType::Bool);
    
    returns_unit_or_flag && method.regular_parameters().count() == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GenerationKind, Parameter, QualifiedType, Type};
    
    fn int() -> QualifiedType {
        QualifiedType::builtin(PrimitiveType::Int)
    }
    
    #[test]
    fn getter_ignores_indirect_return_parameters() {
        let method = Method::new("getName", QualifiedType::named("std::string"))
            .with_param(Parameter::indirect_return(QualifiedType::named("std::string")));
        assert!(is_getter(&method));
        assert!(!is_setter(&method));
    }
    
    #[test]
    fn getter_needs_a_value() {
        assert!(!is_getter(&Method::new("reset", QualifiedType::void())));
        assert!(!is_getter(&Method::new("at", int()).with_param(Parameter::regular("i", int()))));
    }
    
    #[test]
    fn setter_may_report_success() {
        let flag = QualifiedType::new(Type::Typedef {
            name: "Status".to_string(),
            underlying: Box::new(QualifiedType::builtin(PrimitiveType::Bool)),
        });
        let method = Method::new("setWidth", flag).with_param(Parameter::regular("w", int()));
        assert!(is_setter(&method));
    }
    
    #[test]
    fn setter_needs_exactly_one_argument() {
        let two = Method::new("setSize", QualifiedType::void())
            .with_param(Parameter::regular("w", int()))
            .with_param(Parameter::regular("h", int()));
        assert!(!is_setter(&two));
        assert!(!is_setter(&Method::new("setWidth", int()).with_param(Parameter::regular("w", int()))));
    }
    
    #[test]
    fn special_and_synthesized_methods_are_skipped() {
        assert!(is_candidate(&Method::new("getWidth", int())));
        assert!(!is_candidate(&Method::new("Widget", QualifiedType::void()).with_kind(MethodKind::Constructor)));
        assert!(!is_candidate(&Method::new("operator int", int()).with_kind(MethodKind::Operator)));
        assert!(!is_candidate(&Method::new("getWidth", int()).with_synth_kind(SynthKind::DefaultValueOverload)));
        
        let mut internal = Method::new("getWidth", int());
        internal.generation_kind = GenerationKind::Internal;
        assert!(!is_candidate(&internal));
        
        let mut opted_out = Method::new("getWidth", int());
        opted_out.excluded_passes.insert(PASS_NAME.to_string());
        assert!(!is_candidate(&opted_out));
    }
}
