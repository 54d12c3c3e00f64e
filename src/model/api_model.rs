use std::collections::HashSet;
use serde::{Serialize, Deserialize};

use crate::error::SynthError;
use super::class::{BaseClassSpecifier, Class, ClassId, Event, Method, MethodId};
use super::types::{QualifiedType, Type};

/// One translation unit worth of classes, stored as an arena indexed by `ClassId`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiModel {
    /// Name of the unit, usually the header or module it came from
    #[serde(default)]
    pub name: String,
    
    /// All classes; `classes[i].id == ClassId(i)`
    #[serde(default)]
    pub classes: Vec<Class>,
}

impl ApiModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: Vec::new(),
        }
    }
    
    /// Append an empty class and return its id
    pub fn add_class(&mut self, name: impl Into<String>) -> ClassId {
        let id = ClassId(self.classes.len());
        self.classes.push(Class::new(id, name));
        id
    }
    
    /// Append `method` to `class`, fixing its namespace
    pub fn add_method(&mut self, class: ClassId, mut method: Method) -> MethodId {
        method.namespace = class;
        let methods = &mut self.class_mut(class).methods;
        methods.push(method);
        MethodId {
            class,
            index: methods.len() - 1,
        }
    }
    
    pub fn add_base(&mut self, derived: ClassId, base: ClassId) {
        self.class_mut(derived).bases.push(BaseClassSpecifier {
            class: base,
            access: Default::default(),
        });
    }
    
    pub fn add_event(&mut self, class: ClassId, name: impl Into<String>) {
        self.class_mut(class).events.push(Event {
            name: name.into(),
            namespace: class,
        });
    }
    
    pub fn class(&self, id: ClassId) -> &Class {
        &self.classes[id.0]
    }
    
    pub fn class_mut(&mut self, id: ClassId) -> &mut Class {
        &mut self.classes[id.0]
    }
    
    pub fn method(&self, id: MethodId) -> &Method {
        &self.classes[id.class.0].methods[id.index]
    }
    
    pub fn method_mut(&mut self, id: MethodId) -> &mut Method {
        &mut self.classes[id.class.0].methods[id.index]
    }
    
    pub fn class_ids(&self) -> impl Iterator<Item = ClassId> {
        (0..self.classes.len()).map(ClassId)
    }
    
    pub fn find_class(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name == name)
    }
    
    /// Follow `definition` links to the complete class.
    ///
    /// Stops at the first class already seen so a cyclic chain resolves to
    /// the last distinct class instead of looping.
    pub fn definition_of(&self, id: ClassId) -> ClassId {
        let mut current = id;
        let mut seen = HashSet::new();
        while seen.insert(current) {
            match self.class(current).definition {
                Some(next) if next != current => current = next,
                _ => break,
            }
        }
        current
    }
    
    /// Check the id and back-reference invariants the passes rely on
    pub fn validate(&self) -> Result<(), SynthError> {
        let fail = |reason: String| SynthError::Model {
            model: self.name.clone(),
            reason,
        };
        
        for (index, class) in self.classes.iter().enumerate() {
            if class.id != ClassId(index) {
                return Err(fail(format!("class `{}` at index {} has id {}", class.name, index, class.id.0)));
            }
            
            for base in &class.bases {
                self.check_class(base.class)
                    .map_err(|_| fail(format!("class `{}` has dangling base {}", class.name, base.class.0)))?;
            }
            if let Some(definition) = class.definition {
                self.check_class(definition)
                    .map_err(|_| fail(format!("class `{}` has dangling definition {}", class.name, definition.0)))?;
            }
            
            for method in &class.methods {
                if method.namespace != class.id {
                    return Err(fail(format!("method `{}` is listed in `{}` but declared in {}", method.name, class.name, method.namespace.0)));
                }
                for link in method.overridden.iter().chain(&method.explicit_interface_impl) {
                    self.check_method(*link)
                        .map_err(|_| fail(format!("method `{}::{}` links to a missing method", class.name, method.name)))?;
                }
                self.check_type(&method.return_type)
                    .map_err(|_| fail(format!("method `{}::{}` returns an unknown class", class.name, method.name)))?;
                for parameter in &method.parameters {
                    self.check_type(&parameter.qualified_type)
                        .map_err(|_| fail(format!("parameter of `{}::{}` refers to an unknown class", class.name, method.name)))?;
                }
            }
            
            for property in &class.properties {
                if property.namespace != class.id {
                    return Err(fail(format!("property `{}` is listed in `{}` but owned by {}", property.name, class.name, property.namespace.0)));
                }
                for accessor in property.accessors().chain(property.explicit_interface_impl) {
                    self.check_method(accessor)
                        .map_err(|_| fail(format!("property `{}::{}` links to a missing method", class.name, property.name)))?;
                }
            }
        }
        
        Ok(())
    }
    
    fn check_class(&self, id: ClassId) -> Result<(), ()> {
        if id.0 < self.classes.len() { Ok(()) } else { Err(()) }
    }
    
    fn check_method(&self, id: MethodId) -> Result<(), ()> {
        self.check_class(id.class)?;
        if id.index < self.class(id.class).methods.len() { Ok(()) } else { Err(()) }
    }
    
    fn check_type(&self, qualified_type: &QualifiedType) -> Result<(), ()> {
        match &qualified_type.ty {
            Type::Tag(id) => self.check_class(*id),
            Type::Pointer { pointee, .. } => self.check_type(pointee),
            Type::Typedef { underlying, .. } => self.check_type(underlying),
            Type::Builtin(_) | Type::Named(_) => Ok(()),
        }
    }
}
