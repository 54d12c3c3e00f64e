use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};

use super::types::QualifiedType;

/// Index of a class inside its `ApiModel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(pub usize);

/// Stable address of a method: owning class plus position in its method list.
///
/// Methods are never removed from a class, so the id stays valid for the
/// lifetime of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MethodId {
    pub class: ClassId,
    pub index: usize,
}

/// Member visibility, ordered from most to least restrictive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessSpecifier {
    Private,
    Protected,
    #[default]
    Public,
}

/// Whether and how a declaration reaches the emitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    /// Emitted as a standalone declaration
    #[default]
    Generate,
    
    /// Kept for internal use only, e.g. absorbed into a property
    Internal,
    
    /// Not emitted at all
    Excluded,
}

/// Origin of a method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthKind {
    /// Declared in the native API
    #[default]
    Ordinary,
    
    /// Overload generated to emulate default argument values
    DefaultValueOverload,
    
    /// Operator generated as the complement of a declared one
    ComplementOperator,
    
    /// Accessor generated for a public field
    FieldAccessor,
}

/// Special member categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[default]
    Normal,
    Constructor,
    Destructor,
    Operator,
}

/// How a parameter is passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    #[default]
    Regular,
    
    /// Hidden out-parameter carrying the return value
    IndirectReturn,
}

/// A structured piece of documentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentBlock {
    Paragraph { text: String },
    Param { name: String, text: String },
    Returns { text: String },
    Command { name: String, text: String },
}

/// Parsed body of a documentation comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullComment {
    pub blocks: Vec<CommentBlock>,
}

/// Syntax the comment was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    #[default]
    Invalid,
    BcplSlash,
    BcplExcl,
    JavaDoc,
    Qt,
    Merged,
}

/// Documentation attached to a declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub kind: CommentKind,
    
    /// First sentence of the comment
    #[serde(default)]
    pub brief: String,
    
    /// Full raw text
    #[serde(default)]
    pub text: String,
    
    /// Structured form, if the parser produced one
    #[serde(default)]
    pub full: Option<FullComment>,
}

impl RawComment {
    pub fn new(brief: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: CommentKind::BcplSlash,
            brief: brief.into(),
            text: text.into(),
            full: None,
        }
    }
    
    pub fn with_blocks(mut self, blocks: Vec<CommentBlock>) -> Self {
        self.full = Some(FullComment { blocks });
        self
    }
}

/// A method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    
    #[serde(default)]
    pub kind: ParameterKind,
    
    pub qualified_type: QualifiedType,
}

impl Parameter {
    pub fn regular(name: impl Into<String>, qualified_type: QualifiedType) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Regular,
            qualified_type,
        }
    }
    
    pub fn indirect_return(qualified_type: QualifiedType) -> Self {
        Self {
            name: String::new(),
            kind: ParameterKind::IndirectReturn,
            qualified_type,
        }
    }
}

/// A method declared by a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    /// Name the emitter will use
    pub name: String,
    
    /// Name as spelled in the native API
    pub original_name: String,
    
    /// Class declaring this method
    pub namespace: ClassId,
    
    #[serde(default)]
    pub kind: MethodKind,
    
    #[serde(default)]
    pub is_static: bool,
    
    #[serde(default)]
    pub is_override: bool,
    
    /// Base method this one overrides
    #[serde(default)]
    pub overridden: Option<MethodId>,
    
    /// Interface method this one implements explicitly
    #[serde(default)]
    pub explicit_interface_impl: Option<MethodId>,
    
    #[serde(default)]
    pub generation_kind: GenerationKind,
    
    #[serde(default)]
    pub synth_kind: SynthKind,
    
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    
    pub return_type: QualifiedType,
    
    #[serde(default)]
    pub comment: Option<RawComment>,
    
    #[serde(default)]
    pub access: AccessSpecifier,
    
    /// Names of passes that must leave this method alone
    #[serde(default)]
    pub excluded_passes: BTreeSet<String>,
}

impl Method {
    /// Create a public, generated, ordinary method.
    ///
    /// The namespace is filled in by `ApiModel::add_method`.
    pub fn new(name: impl Into<String>, return_type: QualifiedType) -> Self {
        let name = name.into();
        Self {
            original_name: name.clone(),
            name,
            namespace: ClassId(0),
            kind: MethodKind::Normal,
            is_static: false,
            is_override: false,
            overridden: None,
            explicit_interface_impl: None,
            generation_kind: GenerationKind::Generate,
            synth_kind: SynthKind::Ordinary,
            parameters: Vec::new(),
            return_type,
            comment: None,
            access: AccessSpecifier::Public,
            excluded_passes: BTreeSet::new(),
        }
    }
    
    pub fn with_param(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
    
    pub fn with_kind(mut self, kind: MethodKind) -> Self {
        self.kind = kind;
        self
    }
    
    pub fn with_access(mut self, access: AccessSpecifier) -> Self {
        self.access = access;
        self
    }
    
    pub fn with_comment(mut self, comment: RawComment) -> Self {
        self.comment = Some(comment);
        self
    }
    
    pub fn with_synth_kind(mut self, synth_kind: SynthKind) -> Self {
        self.synth_kind = synth_kind;
        self
    }
    
    pub fn static_method(mut self) -> Self {
        self.is_static = true;
        self
    }
    
    /// Mark this method as overriding `base`
    pub fn overriding(mut self, base: MethodId) -> Self {
        self.is_override = true;
        self.overridden = Some(base);
        self
    }
    
    pub fn implementing(mut self, interface_method: MethodId) -> Self {
        self.explicit_interface_impl = Some(interface_method);
        self
    }
    
    pub fn is_constructor(&self) -> bool {
        matches!(self.kind, MethodKind::Constructor)
    }
    
    pub fn is_destructor(&self) -> bool {
        matches!(self.kind, MethodKind::Destructor)
    }
    
    pub fn is_operator(&self) -> bool {
        matches!(self.kind, MethodKind::Operator)
    }
    
    pub fn is_generated(&self) -> bool {
        matches!(self.generation_kind, GenerationKind::Generate)
    }
    
    pub fn is_ignored(&self) -> bool {
        matches!(self.generation_kind, GenerationKind::Excluded)
    }
    
    pub fn is_excluded_from(&self, pass: &str) -> bool {
        self.excluded_passes.contains(pass)
    }
    
    /// Parameters that are real arguments at the call site
    pub fn regular_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| matches!(p.kind, ParameterKind::Regular))
    }
}

/// A property unifying a getter and/or a setter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    
    pub original_name: String,
    
    pub qualified_type: QualifiedType,
    
    #[serde(default)]
    pub getter: Option<MethodId>,
    
    #[serde(default)]
    pub setter: Option<MethodId>,
    
    /// Backing field of a field-backed property
    #[serde(default)]
    pub field: Option<String>,
    
    /// Class owning this property
    pub namespace: ClassId,
    
    #[serde(default)]
    pub access: AccessSpecifier,
    
    #[serde(default)]
    pub comment: Option<RawComment>,
    
    #[serde(default)]
    pub explicit_interface_impl: Option<MethodId>,
}

impl Property {
    pub fn new(name: impl Into<String>, qualified_type: QualifiedType, namespace: ClassId, access: AccessSpecifier) -> Self {
        let name = name.into();
        Self {
            original_name: name.clone(),
            name,
            qualified_type,
            getter: None,
            setter: None,
            field: None,
            namespace,
            access,
            comment: None,
            explicit_interface_impl: None,
        }
    }
    
    pub fn has_getter(&self) -> bool {
        self.getter.is_some()
    }
    
    pub fn has_setter(&self) -> bool {
        self.setter.is_some()
    }
    
    /// Accessors currently bound to this property
    pub fn accessors(&self) -> impl Iterator<Item = MethodId> {
        self.getter.into_iter().chain(self.setter)
    }
}

/// An event; only relevant as a naming-collision target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub namespace: ClassId,
}

/// Inheritance edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseClassSpecifier {
    pub class: ClassId,
    
    #[serde(default)]
    pub access: AccessSpecifier,
}

/// A class and everything it owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: ClassId,
    
    pub name: String,
    
    #[serde(default)]
    pub access: AccessSpecifier,
    
    #[serde(default)]
    pub bases: Vec<BaseClassSpecifier>,
    
    #[serde(default)]
    pub methods: Vec<Method>,
    
    #[serde(default)]
    pub properties: Vec<Property>,
    
    #[serde(default)]
    pub events: Vec<Event>,
    
    /// Complete definition this class is a partial or specialized view of
    #[serde(default)]
    pub definition: Option<ClassId>,
}

impl Class {
    pub fn new(id: ClassId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            access: AccessSpecifier::Public,
            bases: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            events: Vec::new(),
            definition: None,
        }
    }
    
    /// Ids of all methods in declaration order
    pub fn method_ids(&self) -> impl Iterator<Item = MethodId> + '_ {
        (0..self.methods.len()).map(|index| MethodId { class: self.id, index })
    }
    
    pub fn find_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
    
    pub fn find_method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
    
    /// Whether this class is only a view of another definition
    pub fn is_view(&self) -> bool {
        self.definition.is_some_and(|definition| definition != self.id)
    }
}
