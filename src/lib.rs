//! An implementation of the Unicode Collation Algorithm with the CLDR root
//! tailoring, suitable for registering as a comparator in an embedded SQL
//! engine or any other context that needs a deterministic total order over
//! UTF-8 strings.
//!
//! The public surface is deliberately small: [`compare`] and
//! [`compare_tiebreak`], plus the three pipeline iterators
//! ([`CodePointIter`], [`NfdIter`], [`ElementIter`]) re-exported for
//! conformance testing. Everything else — the ring buffer, the trie
//! lookups, the contraction hash table, the bundled data — is an
//! implementation detail.

#![warn(clippy::pedantic, clippy::cargo)]
#![allow(clippy::module_name_repetitions)]
#![deny(missing_docs)]

mod cea;
mod compare;
mod contraction;
mod normalize;
mod ring;
mod tables;
mod trie;
mod utf8;

pub use cea::{Element, ElementIter};
pub use compare::{compare, compare_tiebreak};
pub use normalize::NfdIter;
pub use utf8::CodePointIter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_round_trips_identical_strings() {
        assert_eq!(compare(b"hello", b"hello"), 0);
        assert_eq!(compare_tiebreak(b"hello", b"hello"), 0);
    }

    #[test]
    fn sorts_a_list_with_sort_by() {
        let mut words: Vec<&[u8]> = vec![b"banana", b"Apple", b"apple", b"cherry"];
        words.sort_by(|a, b| {
            match compare_tiebreak(a, b) {
                0 => std::cmp::Ordering::Equal,
                n if n < 0 => std::cmp::Ordering::Less,
                _ => std::cmp::Ordering::Greater,
            }
        });
        assert!(compare(words[0], b"Apple") <= 0 || compare(words[0], b"apple") <= 0);
    }

    #[test]
    fn iterator_constructors_are_usable_directly() {
        let mut cps = CodePointIter::new(b"ab");
        assert_eq!(cps.next(), Some(u32::from(b'a')));

        let mut nfd = NfdIter::from_bytes("é".as_bytes());
        assert_eq!(nfd.next(), Some(u32::from(b'e')));
        assert_eq!(nfd.next(), Some(0x0301));

        let mut elems = ElementIter::from_bytes(b"a");
        assert!(elems.next().is_some());
    }
}
