use crate::model::{ApiModel, FullComment, Property, RawComment};

/// Documentation for `property`, built from its accessors.
///
/// The getter's comment is the base. Its structured form, if any, is extended
/// with the setter's brief, text and blocks when a distinct setter is
/// documented too.
pub fn merge_accessor_comments(model: &ApiModel, property: &Property) -> Option<RawComment> {
    let getter = property.getter?;
    let getter_comment = model.method(getter).comment.as_ref()?;
    
    let mut merged = RawComment {
        kind: getter_comment.kind,
        brief: getter_comment.brief.clone(),
        text: getter_comment.text.clone(),
        full: None,
    };
    
    if let Some(getter_full) = &getter_comment.full {
        let mut full = FullComment {
            blocks: getter_full.blocks.clone(),
        };
        
        let setter_comment = property
            .setter
            .filter(|setter| *setter != getter)
            .and_then(|setter| model.method(setter).comment.as_ref());
        if let Some(setter_comment) = setter_comment {
            merged.brief.push('\n');
            merged.brief.push_str(&setter_comment.brief);
            merged.text.push('\n');
            merged.text.push_str(&setter_comment.text);
            if let Some(setter_full) = &setter_comment.full {
                full.blocks.extend(setter_full.blocks.iter().cloned());
            }
        }
        
        merged.full = Some(full);
    }
    
    Some(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommentBlock, Method, Parameter, PrimitiveType, QualifiedType};
    use pretty_assertions::assert_eq;
    
    fn paragraph(text: &str) -> CommentBlock {
        CommentBlock::Paragraph { text: text.to_string() }
    }
    
    fn property_with(getter_comment: Option<RawComment>, setter_comment: Option<RawComment>) -> (ApiModel, Property) {
        let mut model = ApiModel::new("unit");
        let class = model.add_class("Window");
        let int = QualifiedType::builtin(PrimitiveType::Int);
        
        let mut getter = Method::new("getWidth", int.clone());
        getter.comment = getter_comment;
        let mut setter = Method::new("setWidth", QualifiedType::void()).with_param(Parameter::regular("w", int.clone()));
        setter.comment = setter_comment;
        
        let mut property = Property::new("width", int, class, Default::default());
        property.getter = Some(model.add_method(class, getter));
        property.setter = Some(model.add_method(class, setter));
        (model, property)
    }
    
    #[test]
    fn undocumented_getter_gives_no_comment() {
        let (model, property) = property_with(None, Some(RawComment::new("Sets the width.", "Sets the width.")));
        assert_eq!(merge_accessor_comments(&model, &property), None);
    }
    
    #[test]
    fn structured_comments_are_concatenated() {
        let getter = RawComment::new("Gets the width.", "Gets the width in pixels.")
            .with_blocks(vec![paragraph("Gets the width in pixels.")]);
        let setter = RawComment::new("Sets the width.", "Sets the width in pixels.")
            .with_blocks(vec![paragraph("Sets the width in pixels.")]);
        let (model, property) = property_with(Some(getter), Some(setter));
        
        let merged = merge_accessor_comments(&model, &property).unwrap();
        
        assert_eq!(merged.brief, "Gets the width.\nSets the width.");
        assert_eq!(merged.text, "Gets the width in pixels.\nSets the width in pixels.");
        assert_eq!(
            merged.full.unwrap().blocks,
            vec![paragraph("Gets the width in pixels."), paragraph("Sets the width in pixels.")]
        );
    }
    
    #[test]
    fn raw_only_getter_comment_is_copied_as_is() {
        let getter = RawComment::new("Gets the width.", "Gets the width.");
        let setter = RawComment::new("Sets the width.", "Sets the width.");
        let (model, property) = property_with(Some(getter.clone()), Some(setter));
        
        assert_eq!(merge_accessor_comments(&model, &property), Some(getter));
    }
}
