// Sat Oct 17 2026 - Alex

use crate::node::ContainerKind;

/// Every container the tool reports on, in output order.
pub const REGISTRY: [ContainerKind; 10] = [
    ContainerKind::ForwardList,
    ContainerKind::List,
    ContainerKind::Set,
    ContainerKind::Multiset,
    ContainerKind::UnorderedSet,
    ContainerKind::UnorderedMultiset,
    ContainerKind::Map,
    ContainerKind::Multimap,
    ContainerKind::UnorderedMap,
    ContainerKind::UnorderedMultimap,
];

pub fn registry() -> &'static [ContainerKind] {
    &REGISTRY
}
