// Sat Oct 17 2026 - Alex

use std::fmt;

/// How a container links its nodes together. Containers of the same family
/// share a node layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeFamily {
    SinglyLinked,
    DoublyLinked,
    RedBlackTree,
    HashTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    ForwardList,
    List,
    Set,
    Multiset,
    UnorderedSet,
    UnorderedMultiset,
    Map,
    Multimap,
    UnorderedMap,
    UnorderedMultimap,
}

impl ContainerKind {
    /// Name of the container as it appears in every output format.
    pub fn name(&self) -> &'static str {
        match self {
            ContainerKind::ForwardList => "forward_list",
            ContainerKind::List => "list",
            ContainerKind::Set => "set",
            ContainerKind::Multiset => "multiset",
            ContainerKind::UnorderedSet => "unordered_set",
            ContainerKind::UnorderedMultiset => "unordered_multiset",
            ContainerKind::Map => "map",
            ContainerKind::Multimap => "multimap",
            ContainerKind::UnorderedMap => "unordered_map",
            ContainerKind::UnorderedMultimap => "unordered_multimap",
        }
    }

    pub fn family(&self) -> NodeFamily {
        match self {
            ContainerKind::ForwardList => NodeFamily::SinglyLinked,
            ContainerKind::List => NodeFamily::DoublyLinked,
            ContainerKind::Set
            | ContainerKind::Multiset
            | ContainerKind::Map
            | ContainerKind::Multimap => NodeFamily::RedBlackTree,
            ContainerKind::UnorderedSet
            | ContainerKind::UnorderedMultiset
            | ContainerKind::UnorderedMap
            | ContainerKind::UnorderedMultimap => NodeFamily::HashTable,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
