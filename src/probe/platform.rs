// Sat Oct 17 2026 - Alex

use crate::node::{Alignment, FieldSpec, NodeError};
use std::collections::BTreeSet;
use std::mem::size_of;

/// Distinct alignments of the host's built-in scalar types, ascending.
pub fn platform_alignments() -> Vec<Alignment> {
    let set: BTreeSet<Alignment> = [
        Alignment::of::<u8>(),
        Alignment::of::<u16>(),
        Alignment::of::<u32>(),
        Alignment::of::<u64>(),
        Alignment::of::<u128>(),
        Alignment::of::<f32>(),
        Alignment::of::<f64>(),
        Alignment::of::<usize>(),
        Alignment::of::<*const u8>(),
    ]
    .into_iter()
    .collect();

    set.into_iter().collect()
}

/// Sizes and alignments of the primitive members a node header is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformModel {
    pub pointer: FieldSpec,
    pub size_type: FieldSpec,
    pub int: FieldSpec,
    pub alignments: Vec<Alignment>,
    /// Hash nodes store the computed hash code after the value.
    pub cache_hash_code: bool,
}

impl PlatformModel {
    pub fn host() -> Self {
        Self {
            pointer: FieldSpec::new("pointer", size_of::<*const u8>(), Alignment::of::<*const u8>()),
            size_type: FieldSpec::new("size_t", size_of::<usize>(), Alignment::of::<usize>()),
            int: FieldSpec::new("int", size_of::<i32>(), Alignment::of::<i32>()),
            alignments: platform_alignments(),
            cache_hash_code: true,
        }
    }

    /// 32-bit int, long and pointer data model.
    pub fn ilp32() -> Result<Self, NodeError> {
        let four = Alignment::new(4)?;
        let alignments = [1, 2, 4, 8]
            .into_iter()
            .map(Alignment::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            pointer: FieldSpec::new("pointer", 4, four),
            size_type: FieldSpec::new("size_t", 4, four),
            int: FieldSpec::new("int", 4, four),
            alignments,
            cache_hash_code: true,
        })
    }

    pub fn with_alignments(mut self, mut alignments: Vec<Alignment>) -> Self {
        alignments.sort();
        alignments.dedup();
        self.alignments = alignments;
        self
    }

    pub fn with_cached_hash_code(mut self, cache: bool) -> Self {
        self.cache_hash_code = cache;
        self
    }

    pub fn pointer(&self, name: &'static str) -> FieldSpec {
        self.pointer.renamed(name)
    }
}

impl Default for PlatformModel {
    fn default() -> Self {
        Self::host()
    }
}
