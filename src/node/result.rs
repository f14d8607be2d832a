// Sat Oct 17 2026 - Alex

use crate::node::{Alignment, ContainerKind, NodeError};

/// Base node size of a container for one alignment class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSizeEntry {
    pub alignment: Alignment,
    /// Bytes per node excluding the value itself.
    pub base_size: usize,
}

impl NodeSizeEntry {
    pub fn new(alignment: Alignment, base_size: usize) -> Self {
        Self {
            alignment,
            base_size,
        }
    }

    /// Full node size for a value type of `value_size` bytes.
    pub fn node_size(&self, value_size: usize) -> usize {
        self.base_size + value_size
    }
}

/// Alignment to base node size table of one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugResult {
    kind: ContainerKind,
    node_sizes: Vec<NodeSizeEntry>,
}

impl DebugResult {
    /// Alignments must be strictly ascending and at least one entry present.
    pub fn new(kind: ContainerKind, node_sizes: Vec<NodeSizeEntry>) -> Result<Self, NodeError> {
        if node_sizes.is_empty() {
            return Err(NodeError::EmptyResult(kind.name()));
        }

        for pair in node_sizes.windows(2) {
            if pair[0].alignment >= pair[1].alignment {
                return Err(NodeError::UnorderedAlignments {
                    container: kind.name(),
                    previous: pair[0].alignment.as_usize(),
                    next: pair[1].alignment.as_usize(),
                });
            }
        }

        Ok(Self { kind, node_sizes })
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn container_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn node_sizes(&self) -> &[NodeSizeEntry] {
        &self.node_sizes
    }

    pub fn alignments(&self) -> impl Iterator<Item = Alignment> + '_ {
        self.node_sizes.iter().map(|entry| entry.alignment)
    }

    pub fn base_size_for(&self, alignment: Alignment) -> Option<usize> {
        self.node_sizes
            .iter()
            .find(|entry| entry.alignment == alignment)
            .map(|entry| entry.base_size)
    }

    pub fn len(&self) -> usize {
        self.node_sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_sizes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(alignment: usize, base_size: usize) -> NodeSizeEntry {
        NodeSizeEntry::new(Alignment::new(alignment).unwrap(), base_size)
    }

    #[test]
    fn test_accepts_ascending_entries() {
        let result = DebugResult::new(ContainerKind::List, vec![entry(1, 23), entry(8, 16)]).unwrap();
        assert_eq!(result.container_name(), "list");
        assert_eq!(result.len(), 2);
        assert_eq!(result.base_size_for(Alignment::new(8).unwrap()), Some(16));
        assert_eq!(result.base_size_for(Alignment::new(4).unwrap()), None);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            DebugResult::new(ContainerKind::Set, Vec::new()),
            Err(NodeError::EmptyResult("set"))
        );
    }

    #[test]
    fn test_rejects_duplicate_and_descending() {
        let duplicate = DebugResult::new(ContainerKind::Map, vec![entry(4, 8), entry(4, 8)]);
        assert!(matches!(duplicate, Err(NodeError::UnorderedAlignments { previous: 4, next: 4, .. })));

        let descending = DebugResult::new(ContainerKind::Map, vec![entry(8, 8), entry(2, 8)]);
        assert!(matches!(descending, Err(NodeError::UnorderedAlignments { previous: 8, next: 2, .. })));
    }

    #[test]
    fn test_node_size_adds_value() {
        assert_eq!(entry(8, 16).node_size(24), 40);
    }
}
