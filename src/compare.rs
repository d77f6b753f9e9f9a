//! The level-wise weight comparator and the NFD code-point tie-breaker.

use crate::cea::{Element, ElementIter};
use crate::normalize::NfdIter;
use crate::ring::RingBuf;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default)]
struct WeightPair {
    left: u16,
    right: u16,
}

/// Accumulates one level's weights from both sides of a comparison and
/// decides the order as soon as a pair disagrees, without needing to see
/// the rest of either stream. `result` is a three-valued sticky latch: once
/// non-zero, further pushes are no-ops.
struct WeightBuf {
    buf: RingBuf<WeightPair, 8>,
    left_len: usize,
    right_len: usize,
    result: i8,
}

impl WeightBuf {
    fn new() -> Self {
        Self { buf: RingBuf::new(), left_len: 0, right_len: 0, result: 0 }
    }

    fn push(&mut self, left: u16, right: u16) -> i8 {
        if self.result == 0 {
            if left != 0 {
                self.push_left(left);
            }
            if right != 0 {
                self.push_right(right);
            }

            if self.left_len > 0 && self.right_len > 0 {
                let next = self.buf.get(0);
                if next.left < next.right {
                    self.result = -1;
                } else if next.left > next.right {
                    self.result = 1;
                } else {
                    self.buf.pop_start();
                    self.left_len -= 1;
                    self.right_len -= 1;
                }
            }
        }
        self.result
    }

    fn push_left(&mut self, value: u16) {
        self.ensure_len(self.left_len + 1);
        let mut pair = self.buf.get(self.left_len);
        pair.left = value;
        self.buf.set(self.left_len, pair);
        self.left_len += 1;
    }

    fn push_right(&mut self, value: u16) {
        self.ensure_len(self.right_len + 1);
        let mut pair = self.buf.get(self.right_len);
        pair.right = value;
        self.buf.set(self.right_len, pair);
        self.right_len += 1;
    }

    fn ensure_len(&mut self, len: usize) {
        while self.buf.len() < len {
            self.buf.push_end(WeightPair::default());
        }
    }

    fn final_result(&mut self) -> i8 {
        if self.result == 0 {
            let next = self.buf.get(0);
            if next.left < next.right {
                self.result = -1;
            } else if next.left > next.right {
                self.result = 1;
            }
        }
        self.result
    }
}

/// UCA-only comparison across all four levels. Returns 0 if the two strings
/// are canonically equivalent or collate equal at every level.
pub fn compare(a: &[u8], b: &[u8]) -> i32 {
    let mut level_1 = WeightBuf::new();
    let mut level_2 = WeightBuf::new();
    let mut level_3 = WeightBuf::new();
    let mut level_4 = WeightBuf::new();

    let mut left = ElementIter::from_bytes(a);
    let mut right = ElementIter::from_bytes(b);

    loop {
        let e_left = left.next();
        let e_right = right.next();
        if e_left.is_none() && e_right.is_none() {
            break;
        }
        let e_left = e_left.unwrap_or_default();
        let e_right = e_right.unwrap_or_default();

        let r = level_1.push(e_left.l1, e_right.l1);
        if r != 0 {
            return i32::from(r);
        }
        level_2.push(e_left.l2, e_right.l2);
        level_3.push(e_left.l3, e_right.l3);
        level_4.push(e_left.l4, e_right.l4);
    }

    let r = level_1.final_result();
    if r != 0 {
        return i32::from(r);
    }
    let r = level_2.final_result();
    if r != 0 {
        return i32::from(r);
    }
    let r = level_3.final_result();
    if r != 0 {
        return i32::from(r);
    }
    i32::from(level_4.final_result())
}

/// `compare`, with a tie broken by an isolated lexicographic comparison of
/// the NFD code point sequences (shorter string first). The tie-breaker
/// re-normalizes both inputs from scratch rather than reusing any buffers
/// from the `compare` pass.
pub fn compare_tiebreak(a: &[u8], b: &[u8]) -> i32 {
    let r = compare(a, b);
    if r != 0 {
        return r;
    }

    let mut left = NfdIter::from_bytes(a);
    let mut right = NfdIter::from_bytes(b);

    loop {
        let cp_left = left.next();
        let cp_right = right.next();
        match (cp_left, cp_right) {
            (None, None) => return 0,
            (Some(_), None) => return 1,
            (None, Some(_)) => return -1,
            (Some(l), Some(rr)) => match l.cmp(&rr) {
                Ordering::Less => return -1,
                Ordering::Greater => return 1,
                Ordering::Equal => continue,
            },
        }
    }
}
