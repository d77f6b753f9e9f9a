//! Open-addressing contraction hash table data.
//!
//! Generated by `gen_tables.py`; see DESIGN.md for provenance and scope.

pub(crate) const CONTRACTIONS_ROOT_SIZE: u32 = 13;

pub(crate) static CONTRACTIONS: &[crate::contraction::RawBucket] = &[
    crate::contraction::RawBucket { key: 0xffffffff, next_offset: 0, cont_count: 0, cont_idx: 0, value: 0x0 },
    crate::contraction::RawBucket { key: 0xffffffff, next_offset: 0, cont_count: 0, cont_idx: 0, value: 0x0 },
    crate::contraction::RawBucket { key: 0xffffffff, next_offset: 0, cont_count: 0, cont_idx: 0, value: 0x0 },
    crate::contraction::RawBucket { key: 0xffffffff, next_offset: 0, cont_count: 0, cont_idx: 0, value: 0x0 },
    crate::contraction::RawBucket { key: 0xffffffff, next_offset: 0, cont_count: 0, cont_idx: 0, value: 0x0 },
    crate::contraction::RawBucket { key: 0xffffffff, next_offset: 0, cont_count: 0, cont_idx: 0, value: 0x0 },
    crate::contraction::RawBucket { key: 0x6e, next_offset: 0, cont_count: 1, cont_idx: 16, value: 0x0 },
    crate::contraction::RawBucket { key: 0xffffffff, next_offset: 0, cont_count: 0, cont_idx: 0, value: 0x0 },
    crate::contraction::RawBucket { key: 0xffffffff, next_offset: 0, cont_count: 0, cont_idx: 0, value: 0x0 },
    crate::contraction::RawBucket { key: 0xffffffff, next_offset: 0, cont_count: 0, cont_idx: 0, value: 0x0 },
    crate::contraction::RawBucket { key: 0x65, next_offset: 0, cont_count: 2, cont_idx: 14, value: 0x0 },
    crate::contraction::RawBucket { key: 0xffffffff, next_offset: 0, cont_count: 0, cont_idx: 0, value: 0x0 },
    crate::contraction::RawBucket { key: 0xffffffff, next_offset: 0, cont_count: 0, cont_idx: 0, value: 0x0 },
    crate::contraction::RawBucket { key: 0x301, next_offset: 0, cont_count: 0, cont_idx: 0, value: 0x10002b8 },
    crate::contraction::RawBucket { key: 0x323, next_offset: 0, cont_count: 1, cont_idx: 13, value: 0x0 },
    crate::contraction::RawBucket { key: 0x301, next_offset: -1, cont_count: 0, cont_idx: 0, value: 0x10002b5 },
    crate::contraction::RawBucket { key: 0x67, next_offset: 0, cont_count: 0, cont_idx: 0, value: 0x10002bb },
];
