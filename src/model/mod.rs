pub mod types;
pub mod class;
pub mod api_model;
pub mod storage;

// Re-export the model types for easier access
pub use types::{PrimitiveType, PointerKind, Type, QualifiedType};
pub use class::{
    AccessSpecifier, BaseClassSpecifier, Class, ClassId, CommentBlock, CommentKind, Event,
    FullComment, GenerationKind, Method, MethodId, MethodKind, Parameter, ParameterKind,
    Property, RawComment, SynthKind,
};
pub use api_model::ApiModel;
pub use storage::ModelStorage;
