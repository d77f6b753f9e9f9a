//! Open-addressing hash table over contraction sequences.
//!
//! The root table and every continuation sub-table share this same bucket
//! layout and lookup function; a match's `cont_idx`/`cont_count` simply
//! point at another slice of the same backing array.

use crate::tables::contractions::{CONTRACTIONS, CONTRACTIONS_ROOT_SIZE};

pub(crate) const EMPTY_KEY: u32 = 0xFFFF_FFFF;

/// On-disk/compiled-in bucket layout; see `spec.md` §3 "Contraction trie
/// bucket".
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawBucket {
    pub key: u32,
    pub next_offset: i16,
    pub cont_count: u16,
    pub cont_idx: u32,
    pub value: u32,
}

pub(crate) struct Bucket {
    pub cont_count: u16,
    pub cont_idx: u32,
    pub value: u32,
}

/// Looks up `cp` in the `count`-bucket open-addressing table starting at
/// `buckets[base..]`, following collision chains via `next_offset`.
///
/// The chain-advance step is `index = (int32_t)index + next_offset`, raw
/// `int32`/`uint32` wraparound, matching `hash_table.h`'s `hash_find`
/// exactly rather than taking it modulo `count` — the table builder only
/// ever emits offsets that keep `index` within `0..count`, so the two only
/// coincide by construction, not by definition.
fn hash_find(cp: u32, base: u32, count: u16) -> Option<Bucket> {
    if count == 0 {
        return None;
    }
    let mut index = cp % u32::from(count);
    loop {
        let bucket = &CONTRACTIONS[(base + index) as usize];
        if bucket.key == cp {
            return Some(Bucket {
                cont_count: bucket.cont_count,
                cont_idx: bucket.cont_idx,
                value: bucket.value,
            });
        }
        if bucket.next_offset == 0 {
            return None;
        }
        index = (index as i32).wrapping_add(i32::from(bucket.next_offset)) as u32;
    }
}

pub(crate) fn hash_find_root(cp: u32) -> Option<Bucket> {
    hash_find(cp, 0, CONTRACTIONS_ROOT_SIZE as u16)
}

pub(crate) fn hash_find_continuation(cp: u32, cont_idx: u32, cont_count: u16) -> Option<Bucket> {
    hash_find(cp, cont_idx, cont_count)
}
