//! `VertexSet` — a bit-indexed membership set of vertex IDs.
//!
//! Bits are stored in `u64` words and grow on demand, so sets built over
//! different universes can still be compared and merged.

use serde::{Serialize, Serializer};
use std::fmt;

const WORD_BITS: usize = 64;

/// A set of vertex IDs backed by a bit vector.
#[derive(Clone, Default)]
pub struct VertexSet {
    words: Vec<u64>,
    /// Number of set bits.
    len: usize,
}

impl VertexSet {
    /// Creates a new empty set.
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty set able to hold vertices `0..vertices` without growing.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            words: vec![0; (vertices + WORD_BITS - 1) / WORD_BITS],
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a vertex. Returns `true` if it was not already present.
    pub fn insert(&mut self, vertex: usize) -> bool {
        let word = vertex / WORD_BITS;
        let mask = 1u64 << (vertex % WORD_BITS);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        if self.words[word] & mask != 0 {
            return false;
        }
        self.words[word] |= mask;
        self.len += 1;
        true
    }

    #[inline]
    pub fn contains(&self, vertex: usize) -> bool {
        self.words
            .get(vertex / WORD_BITS)
            .map_or(false, |w| w & (1u64 << (vertex % WORD_BITS)) != 0)
    }

    /// Adds every vertex of `other` to `self`.
    pub fn union_with(&mut self, other: &VertexSet) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (mine, theirs) in self.words.iter_mut().zip(&other.words) {
            *mine |= theirs;
        }
        self.len = self.words.iter().map(|w| w.count_ones() as usize).sum();
    }

    /// Iterates over members in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.words,
            word_index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Members in ascending order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

/// Ascending iterator over a [`VertexSet`].
pub struct Iter<'a> {
    words: &'a [u64],
    word_index: usize,
    current: u64,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }
        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.word_index * WORD_BITS + bit)
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<usize> for VertexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = VertexSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<usize> for VertexSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

// Trailing zero words do not affect membership.
impl PartialEq for VertexSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for VertexSet {}

impl fmt::Debug for VertexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for VertexSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
