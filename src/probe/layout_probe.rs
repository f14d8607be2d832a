// Sat Oct 17 2026 - Alex

use crate::node::{Alignment, ContainerKind, DebugResult, FieldSpec, NodeError, NodeFamily, NodeLayout, NodeSizeEntry};
use crate::probe::{NodeSizeProbe, PlatformModel, ProbeError};

/// Computes base node sizes from the C layout of the GNU C++ standard library
/// node types on a given platform model.
///
/// Every node is a header struct (the links shared by all nodes of a family)
/// followed by the value, and for hash nodes optionally the cached hash code.
/// The value is modelled as an object whose size equals its alignment, which
/// is the smallest object a value type of that alignment can be.
#[derive(Debug, Clone, Default)]
pub struct LayoutProbe {
    platform: PlatformModel,
}

impl LayoutProbe {
    pub fn new(platform: PlatformModel) -> Self {
        Self { platform }
    }

    pub fn host() -> Self {
        Self::new(PlatformModel::host())
    }

    /// Links every node of `family` starts with.
    pub fn header_layout(&self, family: NodeFamily) -> Result<NodeLayout, NodeError> {
        let p = &self.platform;
        let (name, fields): (&str, Vec<FieldSpec>) = match family {
            NodeFamily::SinglyLinked => ("_Fwd_list_node_base", vec![p.pointer("next")]),
            NodeFamily::DoublyLinked => ("_List_node_base", vec![p.pointer("next"), p.pointer("prev")]),
            NodeFamily::RedBlackTree => (
                "_Rb_tree_node_base",
                vec![
                    p.int.renamed("color"),
                    p.pointer("parent"),
                    p.pointer("left"),
                    p.pointer("right"),
                ],
            ),
            NodeFamily::HashTable => ("_Hash_node_base", vec![p.pointer("next")]),
        };

        let mut header = NodeLayout::new(name);
        for field in fields {
            header.add_field(field)?;
        }
        Ok(header)
    }

    pub fn node_layout(&self, kind: ContainerKind, alignment: Alignment) -> Result<NodeLayout, NodeError> {
        let family = kind.family();
        let header = self.header_layout(family)?;

        let mut node = NodeLayout::new(&format!("{}_node<{}>", kind.name(), alignment));
        node.add_base(&header, "base")?;
        node.add_field(FieldSpec::new("value", alignment.as_usize(), alignment))?;
        if family == NodeFamily::HashTable && self.platform.cache_hash_code {
            node.add_field(self.platform.size_type.renamed("hash_code"))?;
        }

        Ok(node)
    }

    pub fn base_node_size(&self, kind: ContainerKind, alignment: Alignment) -> Result<usize, NodeError> {
        let node = self.node_layout(kind, alignment)?;
        Ok(node.size() - alignment.as_usize())
    }
}

impl NodeSizeProbe for LayoutProbe {
    fn alignments(&self) -> &[Alignment] {
        &self.platform.alignments
    }

    fn probe(&self, kind: ContainerKind) -> Result<DebugResult, ProbeError> {
        if self.platform.alignments.is_empty() {
            return Err(ProbeError::NoAlignments);
        }

        let entries = self
            .platform
            .alignments
            .iter()
            .map(|&alignment| {
                self.base_node_size(kind, alignment)
                    .map(|base_size| NodeSizeEntry::new(alignment, base_size))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DebugResult::new(kind, entries)?)
    }
}
