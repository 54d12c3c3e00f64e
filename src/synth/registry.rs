use log::trace;

use crate::model::{AccessSpecifier, ApiModel, ClassId, GenerationKind, MethodId, Property, QualifiedType};
use super::{naming, overrides};

/// Which half of a property a method provides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorRole {
    Getter,
    Setter,
}

/// Revert an accessor of `class` to a plain method.
///
/// Accessors borrowed from a base class belong to that class and keep their
/// tag. Returns whether the method was re-tagged.
pub fn demote(model: &mut ApiModel, class: ClassId, method: MethodId) -> bool {
    if method.class != class {
        return false;
    }
    model.method_mut(method).generation_kind = GenerationKind::Generate;
    true
}

/// Where an accessor ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertySlot {
    /// A property already committed on the class, by index
    Existing(usize),
    /// A property pending in the registry, by index
    Pending(usize),
}

/// Properties being assembled for one class
#[derive(Debug)]
pub struct PropertyRegistry {
    /// Class the properties will belong to
    class: ClassId,
    
    /// Pending properties in creation order
    properties: Vec<Property>,
    
    /// Committed properties that received their missing accessor
    completed: Vec<usize>,
}

/// Data of the accessor being attached, read before the property is borrowed
struct Accessor {
    id: MethodId,
    access: AccessSpecifier,
    interface_method: Option<MethodId>,
    return_type: QualifiedType,
}

impl PropertyRegistry {
    /// Create an empty registry for `class`
    pub fn new(class: ClassId) -> Self {
        Self {
            class,
            properties: Vec::new(),
            completed: Vec::new(),
        }
    }
    
    pub fn class(&self) -> ClassId {
        self.class
    }
    
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
    
    pub fn len(&self) -> usize {
        self.properties.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
    
    /// Indices of committed class properties completed by this registry
    pub fn completed(&self) -> &[usize] {
        &self.completed
    }
    
    /// Drop the pending property at `index`
    pub fn remove(&mut self, index: usize) -> Property {
        self.properties.remove(index)
    }
    
    /// Hand the pending properties over for finalization
    pub fn into_properties(self) -> Vec<Property> {
        self.properties
    }
    
    /// Attach `method` to a matching property, creating a pending one if needed.
    ///
    /// Properties already on the class are searched before pending ones,
    /// except overriding ones, whose accessors were settled against their base.
    /// The method is re-tagged `Internal`.
    pub fn get_or_create(
        &mut self,
        model: &mut ApiModel,
        method_id: MethodId,
        name: &str,
        qualified_type: QualifiedType,
        role: AccessorRole,
    ) -> PropertySlot {
        let method = model.method(method_id);
        let accessor = Accessor {
            id: method_id,
            access: method.access,
            interface_method: method.explicit_interface_impl,
            return_type: method.return_type.clone(),
        };
        
        let existing = model
            .class(self.class)
            .properties
            .iter()
            .position(|property| {
                !overrides::is_override(model, property)
                    && accepts(model, property, method_id, name, &qualified_type, role)
            });
        
        let slot = match existing {
            Some(index) => {
                let property = &mut model.class_mut(self.class).properties[index];
                attach(property, &accessor, name, role);
                self.completed.push(index);
                PropertySlot::Existing(index)
            }
            None => {
                let pending = self
                    .properties
                    .iter()
                    .position(|property| accepts(model, property, method_id, name, &qualified_type, role));
                let index = match pending {
                    Some(index) => index,
                    None => {
                        self.properties.push(Property::new(name, qualified_type, self.class, accessor.access));
                        self.properties.len() - 1
                    }
                };
                attach(&mut self.properties[index], &accessor, name, role);
                PropertySlot::Pending(index)
            }
        };
        
        trace!("{:?} {} attached to property {} ({:?})", role, model.method(method_id).name, name, slot);
        model.method_mut(method_id).generation_kind = GenerationKind::Internal;
        slot
    }
}

/// Whether `property` has a free slot `method` can fill under the name `name`
fn accepts(
    model: &ApiModel,
    property: &Property,
    method_id: MethodId,
    name: &str,
    qualified_type: &QualifiedType,
    role: AccessorRole,
) -> bool {
    if property.field.is_some() {
        return false;
    }
    
    let (slot, partner) = match role {
        AccessorRole::Getter => (property.getter, property.setter),
        AccessorRole::Setter => (property.setter, property.getter),
    };
    let Some(partner) = partner else {
        return false;
    };
    if slot.is_some() {
        return false;
    }
    
    let partner = model.method(partner);
    if partner.is_static != model.method(method_id).is_static
        || property.qualified_type.underlying() != qualified_type.underlying()
    {
        return false;
    }
    
    // Only a setter may pair through the `is` rewrite of its getter
    property.name == name
        || (role == AccessorRole::Setter && naming::read_write_property_name(&partner.name, name) == name)
}

/// Fill the accessor slot of `property` and give it its final name
fn attach(property: &mut Property, accessor: &Accessor, name: &str, role: AccessorRole) {
    property.access = property.access.max(accessor.access);
    match role {
        AccessorRole::Getter => {
            property.getter = Some(accessor.id);
            property.qualified_type = accessor.return_type.clone();
        }
        AccessorRole::Setter => property.setter = Some(accessor.id),
    }
    property.original_name = name.to_string();
    property.name = name.to_string();
    if accessor.interface_method.is_some() {
        property.explicit_interface_impl = accessor.interface_method;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccessSpecifier, Method, Parameter, PointerKind, PrimitiveType};
    
    fn int() -> QualifiedType {
        QualifiedType::builtin(PrimitiveType::Int)
    }
    
    fn setter(name: &str, ty: QualifiedType) -> Method {
        Method::new(name, QualifiedType::void()).with_param(Parameter::regular("value", ty))
    }
    
    #[test]
    fn getter_and_setter_share_one_property() {
        let mut model = ApiModel::new("unit");
        let class = model.add_class("Counter");
        let get = model.add_method(class, Method::new("getCount", int()));
        let set = model.add_method(class, setter("setCount", int()));
        
        let mut registry = PropertyRegistry::new(class);
        let first = registry.get_or_create(&mut model, get, "count", int(), AccessorRole::Getter);
        let second = registry.get_or_create(&mut model, set, "count", int(), AccessorRole::Setter);
        
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        let property = &registry.properties()[0];
        assert_eq!(property.getter, Some(get));
        assert_eq!(property.setter, Some(set));
        assert_eq!(model.method(get).generation_kind, GenerationKind::Internal);
        assert_eq!(model.method(set).generation_kind, GenerationKind::Internal);
    }
    
    #[test]
    fn is_getter_pairs_with_plain_setter() {
        let mut model = ApiModel::new("unit");
        let class = model.add_class("Task");
        let bool_ty = QualifiedType::builtin(PrimitiveType::Bool);
        let get = model.add_method(class, Method::new("isReady", bool_ty.clone()));
        let set = model.add_method(class, setter("setReady", bool_ty.clone()));
        
        let mut registry = PropertyRegistry::new(class);
        registry.get_or_create(&mut model, get, "isReady", bool_ty.clone(), AccessorRole::Getter);
        registry.get_or_create(&mut model, set, "ready", bool_ty, AccessorRole::Setter);
        
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.properties()[0].name, "ready");
    }
    
    #[test]
    fn is_getter_after_setter_gets_its_own_property() {
        let mut model = ApiModel::new("unit");
        let class = model.add_class("Task");
        let bool_ty = QualifiedType::builtin(PrimitiveType::Bool);
        let set = model.add_method(class, setter("setReady", bool_ty.clone()));
        let get = model.add_method(class, Method::new("isReady", bool_ty.clone()));
        
        let mut registry = PropertyRegistry::new(class);
        registry.get_or_create(&mut model, set, "ready", bool_ty.clone(), AccessorRole::Setter);
        let slot = registry.get_or_create(&mut model, get, "isReady", bool_ty, AccessorRole::Getter);
        
        assert_eq!(slot, PropertySlot::Pending(1));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.properties()[0].name, "ready");
        assert_eq!(registry.properties()[0].getter, None);
        assert_eq!(registry.properties()[1].name, "isReady");
        assert_eq!(registry.properties()[1].setter, None);
    }
    
    #[test]
    fn committed_property_receives_missing_setter() {
        let mut model = ApiModel::new("unit");
        let class = model.add_class("Counter");
        let get = model.add_method(class, Method::new("getCount", int()));
        model.method_mut(get).generation_kind = GenerationKind::Internal;
        let mut committed = Property::new("count", int(), class, AccessSpecifier::Public);
        committed.getter = Some(get);
        model.class_mut(class).properties.push(committed);
        let set = model.add_method(class, setter("setCount", int()));
        
        let mut registry = PropertyRegistry::new(class);
        let slot = registry.get_or_create(&mut model, set, "count", int(), AccessorRole::Setter);
        
        assert_eq!(slot, PropertySlot::Existing(0));
        assert!(registry.is_empty());
        assert_eq!(registry.completed(), &[0]);
        assert_eq!(model.class(class).properties[0].setter, Some(set));
        assert_eq!(model.method(set).generation_kind, GenerationKind::Internal);
    }
    
    #[test]
    fn field_backed_property_is_never_merged_into() {
        let mut model = ApiModel::new("unit");
        let class = model.add_class("Counter");
        let get = model.add_method(class, Method::new("getCount", int()));
        let mut committed = Property::new("count", int(), class, AccessSpecifier::Public);
        committed.getter = Some(get);
        committed.field = Some("count_".to_string());
        model.class_mut(class).properties.push(committed);
        let set = model.add_method(class, setter("setCount", int()));
        
        let mut registry = PropertyRegistry::new(class);
        let slot = registry.get_or_create(&mut model, set, "count", int(), AccessorRole::Setter);
        
        assert_eq!(slot, PropertySlot::Pending(0));
        assert_eq!(model.class(class).properties[0].setter, None);
    }
    
    #[test]
    fn reference_setter_matches_value_getter() {
        let mut model = ApiModel::new("unit");
        let class = model.add_class("Label");
        let string = QualifiedType::named("std::string");
        let by_ref = QualifiedType::pointer_to(string.clone().into_const(), PointerKind::LValueReference);
        let get = model.add_method(class, Method::new("getText", string.clone()));
        let set = model.add_method(class, setter("setText", by_ref.clone()));
        
        let mut registry = PropertyRegistry::new(class);
        registry.get_or_create(&mut model, get, "text", string.clone(), AccessorRole::Getter);
        registry.get_or_create(&mut model, set, "text", by_ref, AccessorRole::Setter);
        
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.properties()[0].qualified_type, string);
    }
    
    #[test]
    fn mismatched_type_or_staticness_creates_separate_properties() {
        let mut model = ApiModel::new("unit");
        let class = model.add_class("Mixed");
        let get = model.add_method(class, Method::new("getValue", int()));
        let set_double = model.add_method(class, setter("setValue", QualifiedType::builtin(PrimitiveType::Double)));
        let set_static = model.add_method(class, setter("setValue", int()).static_method());
        
        let mut registry = PropertyRegistry::new(class);
        registry.get_or_create(&mut model, get, "value", int(), AccessorRole::Getter);
        registry.get_or_create(&mut model, set_double, "value", QualifiedType::builtin(PrimitiveType::Double), AccessorRole::Setter);
        registry.get_or_create(&mut model, set_static, "value", int(), AccessorRole::Setter);
        
        assert_eq!(registry.len(), 3);
    }
    
    #[test]
    fn access_widens_to_most_visible_accessor() {
        let mut model = ApiModel::new("unit");
        let class = model.add_class("Guarded");
        let get = model.add_method(class, Method::new("getLevel", int()).with_access(AccessSpecifier::Protected));
        let set = model.add_method(class, setter("setLevel", int()).with_access(AccessSpecifier::Public));
        
        let mut registry = PropertyRegistry::new(class);
        registry.get_or_create(&mut model, get, "level", int(), AccessorRole::Getter);
        assert_eq!(registry.properties()[0].access, AccessSpecifier::Protected);
        
        registry.get_or_create(&mut model, set, "level", int(), AccessorRole::Setter);
        assert_eq!(registry.properties()[0].access, AccessSpecifier::Public);
    }
    
    #[test]
    fn interface_link_moves_to_property() {
        let mut model = ApiModel::new("unit");
        let interface = model.add_class("IShape");
        let area = model.add_method(interface, Method::new("getArea", int()));
        let class = model.add_class("Square");
        let get = model.add_method(class, Method::new("getArea", int()).implementing(area));
        
        let mut registry = PropertyRegistry::new(class);
        registry.get_or_create(&mut model, get, "area", int(), AccessorRole::Getter);
        
        assert_eq!(registry.properties()[0].explicit_interface_impl, Some(area));
    }
    
    #[test]
    fn demote_leaves_foreign_methods_alone() {
        let mut model = ApiModel::new("unit");
        let base = model.add_class("Base");
        let derived = model.add_class("Derived");
        let inherited = model.add_method(base, Method::new("getSize", int()));
        model.method_mut(inherited).generation_kind = GenerationKind::Internal;
        
        assert!(!demote(&mut model, derived, inherited));
        assert_eq!(model.method(inherited).generation_kind, GenerationKind::Internal);
        assert!(demote(&mut model, base, inherited));
        assert_eq!(model.method(inherited).generation_kind, GenerationKind::Generate);
    }
}
