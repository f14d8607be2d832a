// Sat Oct 17 2026 - Alex

use crate::node::{Alignment, NodeError};

/// A member of a node: a pointer, an integer, the value, or a nested base struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub size: usize,
    pub alignment: Alignment,
}

impl FieldSpec {
    pub fn new(name: &'static str, size: usize, alignment: Alignment) -> Self {
        Self {
            name,
            size,
            alignment,
        }
    }

    pub fn renamed(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedField {
    pub spec: FieldSpec,
    pub offset: usize,
}

impl PlacedField {
    pub fn end_offset(&self) -> usize {
        self.offset + self.spec.size
    }
}

/// C layout of a node struct: fields in declaration order, each at the next
/// offset satisfying its alignment, total size rounded to the largest alignment.
#[derive(Debug, Clone)]
pub struct NodeLayout {
    name: String,
    fields: Vec<PlacedField>,
    size: usize,
    alignment: Alignment,
}

impl NodeLayout {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
            size: 0,
            alignment: Alignment::default(),
        }
    }

    pub fn add_field(&mut self, spec: FieldSpec) -> Result<&PlacedField, NodeError> {
        let unpadded_end = self.fields.last().map_or(0, PlacedField::end_offset);
        let offset = spec.alignment.align(unpadded_end).ok_or_else(|| self.overflow(spec.name))?;
        offset.checked_add(spec.size).ok_or_else(|| self.overflow(spec.name))?;

        self.fields.push(PlacedField { spec, offset });
        if let Err(err) = self.recalculate_size() {
            self.fields.pop();
            self.recalculate_size()?;
            return Err(err);
        }

        let index = self.fields.len() - 1;
        Ok(&self.fields[index])
    }

    /// Embeds `base` as a single member, the way a derived node holds its base.
    pub fn add_base(&mut self, base: &NodeLayout, name: &'static str) -> Result<&PlacedField, NodeError> {
        self.add_field(base.as_field(name))
    }

    pub fn as_field(&self, name: &'static str) -> FieldSpec {
        FieldSpec::new(name, self.size, self.alignment)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[PlacedField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&PlacedField> {
        self.fields.iter().find(|f| f.spec.name == name)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Bytes not covered by any field, tail padding included.
    pub fn padding(&self) -> usize {
        self.size - self.fields.iter().map(|f| f.spec.size).sum::<usize>()
    }

    fn recalculate_size(&mut self) -> Result<(), NodeError> {
        self.alignment = self
            .fields
            .iter()
            .map(|f| f.spec.alignment)
            .max()
            .unwrap_or_default();

        let end = self.fields.last().map_or(0, PlacedField::end_offset);
        self.size = self.alignment.align(end).ok_or_else(|| {
            let field = self.fields.last().map_or("", |f| f.spec.name);
            self.overflow(field)
        })?;
        Ok(())
    }

    fn overflow(&self, field: &'static str) -> NodeError {
        NodeError::LayoutOverflow {
            node: self.name.clone(),
            field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &'static str, size: usize, align: usize) -> FieldSpec {
        FieldSpec::new(name, size, Alignment::new(align).unwrap())
    }

    #[test]
    fn test_empty_layout() {
        let layout = NodeLayout::new("empty");
        assert_eq!(layout.size(), 0);
        assert_eq!(layout.alignment().as_usize(), 1);
    }

    #[test]
    fn test_fields_are_padded() {
        let mut layout = NodeLayout::new("node");
        layout.add_field(spec("color", 4, 4)).unwrap();
        let parent = *layout.add_field(spec("parent", 8, 8)).unwrap();
        layout.add_field(spec("value", 1, 1)).unwrap();

        assert_eq!(parent.offset, 8);
        assert_eq!(layout.field("value").map(|f| f.offset), Some(16));
        assert_eq!(layout.size(), 24);
        assert_eq!(layout.alignment().as_usize(), 8);
        assert_eq!(layout.padding(), 11);
    }

    #[test]
    fn test_base_struct_keeps_tail_padding() {
        let mut base = NodeLayout::new("base");
        base.add_field(spec("next", 8, 8)).unwrap();
        base.add_field(spec("flag", 1, 1)).unwrap();
        assert_eq!(base.size(), 16);

        let mut node = NodeLayout::new("node");
        node.add_base(&base, "base").unwrap();
        let value = *node.add_field(spec("value", 1, 1)).unwrap();
        assert_eq!(value.offset, 16);
        assert_eq!(node.size(), 24);
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut layout = NodeLayout::new("huge");
        layout.add_field(spec("a", usize::MAX - 2, 1)).unwrap();
        let err = layout.add_field(spec("b", 8, 8)).unwrap_err();
        assert_eq!(
            err,
            NodeError::LayoutOverflow {
                node: "huge".to_string(),
                field: "b"
            }
        );
    }
}
