use serde::{Serialize, Deserialize};

use super::ClassId;

/// Builtin types the parser can hand over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    Void,
    Bool,
    Char,
    WideChar,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    LongLong,
    ULongLong,
    Float,
    Double,
    LongDouble,
    IntPtr,
    UIntPtr,
    Null,
}

/// Flavour of an indirection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Pointer,
    LValueReference,
    RValueReference,
}

/// A type as seen by the binding generator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    /// Builtin primitive
    Builtin(PrimitiveType),
    
    /// Pointer or reference to another qualified type
    Pointer {
        pointee: Box<QualifiedType>,
        kind: PointerKind,
    },
    
    /// Reference to a class declared in the same model
    Tag(ClassId),
    
    /// Named alias of another type
    Typedef {
        name: String,
        underlying: Box<QualifiedType>,
    },
    
    /// A type the parser could not resolve further, kept by spelling
    Named(String),
}

impl Type {
    /// Strip every typedef layer
    pub fn desugar(&self) -> &Type {
        let mut current = self;
        while let Type::Typedef { underlying, .. } = current {
            current = &underlying.ty;
        }
        current
    }
    
    /// Check whether the desugared type is the given primitive
    pub fn is_primitive(&self, primitive: PrimitiveType) -> bool {
        matches!(self.desugar(), Type::Builtin(p) if *p == primitive)
    }
    
    /// Shorthand for `is_primitive(PrimitiveType::Void)`
    pub fn is_void(&self) -> bool {
        self.is_primitive(PrimitiveType::Void)
    }
}

/// A type together with its cv-qualification
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedType {
    /// The qualified type
    pub ty: Type,
    
    /// Whether the type is const-qualified
    #[serde(default)]
    pub is_const: bool,
}

impl QualifiedType {
    pub fn new(ty: Type) -> Self {
        Self { ty, is_const: false }
    }
    
    pub fn builtin(primitive: PrimitiveType) -> Self {
        Self::new(Type::Builtin(primitive))
    }
    
    pub fn void() -> Self {
        Self::builtin(PrimitiveType::Void)
    }
    
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Type::Named(name.into()))
    }
    
    pub fn tag(class: ClassId) -> Self {
        Self::new(Type::Tag(class))
    }
    
    /// Wrap this type in a pointer or reference
    pub fn pointer_to(pointee: QualifiedType, kind: PointerKind) -> Self {
        Self::new(Type::Pointer {
            pointee: Box::new(pointee),
            kind,
        })
    }
    
    /// Mark this type const
    pub fn into_const(mut self) -> Self {
        self.is_const = true;
        self
    }
    
    /// The type accessor matching compares on.
    ///
    /// A pointer or reference is replaced by its pointee and the qualifiers of
    /// the pointee are dropped. Constness reported for `const T&` parameters is
    /// not reliable, so it never takes part in the comparison.
    pub fn underlying(&self) -> &Type {
        match &self.ty {
            Type::Tag(_) => &self.ty,
            Type::Pointer { pointee, .. } => &pointee.ty,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn desugar_strips_nested_typedefs() {
        let inner = QualifiedType::new(Type::Typedef {
            name: "BOOL".to_string(),
            underlying: Box::new(QualifiedType::builtin(PrimitiveType::Bool)),
        });
        let outer = Type::Typedef {
            name: "Flag".to_string(),
            underlying: Box::new(inner),
        };
        
        assert!(outer.is_primitive(PrimitiveType::Bool));
        assert!(!outer.is_void());
    }
    
    #[test]
    fn underlying_ignores_reference_constness() {
        let by_value = QualifiedType::named("std::string");
        let by_ref = QualifiedType::pointer_to(
            QualifiedType::named("std::string").into_const(),
            PointerKind::LValueReference,
        );
        
        assert_eq!(by_value.underlying(), by_ref.underlying());
    }
    
    #[test]
    fn underlying_keeps_tag_types() {
        let tag = QualifiedType::tag(ClassId(3));
        assert_eq!(tag.underlying(), &Type::Tag(ClassId(3)));
    }
}
