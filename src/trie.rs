//! Multi-stage compressed trie lookups over the bundled composition and CEA
//! tables. Both tables are generated offline; the only thing done here at
//! runtime is walking the shift/mask chain they were built with.

use crate::tables::{cea, comp};

/// A code point's canonical decomposition data, or the all-zero default for
/// code points past `LAST_ASSIGNED` (the default happens to also describe
/// "starter, no decomposition", which is correct for anything the tables
/// don't cover).
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CompData {
    pub ccc: u8,
    pub decomp_len: u8,
    pub decomp_idx: u16,
}

pub(crate) fn lookup_comp_data(cp: u32) -> CompData {
    if cp > comp::LAST_ASSIGNED {
        return CompData::default();
    }

    let index3 = cp >> comp::STAGE3_SHIFT;
    let index2 = comp::STAGE3[index3 as usize] | ((cp >> comp::STAGE2_SHIFT) as u16 & comp::STAGE2_MASK as u16);
    let index1 = comp::STAGE2[index2 as usize] | ((cp >> comp::STAGE1_SHIFT) as u16 & comp::STAGE1_MASK as u16);
    let index0 = comp::STAGE1[index1 as usize] | (cp & comp::COMP_MASK) as u16;
    let raw = comp::COMP_DATA[index0 as usize];

    CompData {
        ccc: (raw >> 24) as u8,
        decomp_len: (raw >> 16) as u8,
        decomp_idx: raw as u16,
    }
}

pub(crate) fn decomposition(data: CompData) -> &'static [u32] {
    let start = data.decomp_idx as usize;
    &comp::DECOMP_DATA[start..start + data.decomp_len as usize]
}

pub(crate) fn get_ccc(cp: u32) -> u8 {
    lookup_comp_data(cp).ccc
}

pub(crate) fn lookup_simple_mapping(cp: u32) -> u32 {
    if cp > cea::LAST_ASSIGNED {
        return 0;
    }

    let index2 = cp >> cea::STAGE2_SHIFT;
    let index1 = cea::STAGE2[index2 as usize] | ((cp >> cea::STAGE1_SHIFT) as u16 & cea::STAGE1_MASK as u16);
    let index0 = cea::STAGE1[index1 as usize] | (cp & cea::CEA_MASK) as u16;
    cea::CEA_INDICES[index0 as usize]
}
