use crate::graph::{ConnectionTable, Graph, MutableGraph};
use rand::prelude::*;

/// Maximum number of bonds a generated atom takes part in
const MAX_VALENCE: usize = 4;

/// Generates a single ring of `n` atoms: 0-1, 1-2, ..., (n-1)-0
pub fn ring(n: usize) -> ConnectionTable {
    assert!(n >= 3, "a ring needs at least three atoms");

    let mut table = chain(n);
    table.add_edge(n - 1, 0);
    table
}

/// Generates an unbranched chain of `n` atoms
pub fn chain(n: usize) -> ConnectionTable {
    let mut table = ConnectionTable::with_capacity(n);
    for i in 1..n {
        table.add_edge(i - 1, i);
    }
    table
}

/// Biphenyl, two six-membered rings joined by a bond between atoms 5 and 6
///
/// ```text
///          3 -- 4          7 -- 8
///        /        \      /        \
///       2          5 -- 6          9
///        \        /      \        /
///          1 -- 0         11 -- 10
/// ```
pub fn biphenyl() -> ConnectionTable {
    let mut table = ConnectionTable::with_capacity(12);
    for &(a, b) in &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (5, 6)] {
        table.add_edge(a, b);
    }
    for &(a, b) in &[(6, 7), (7, 8), (8, 9), (9, 10), (10, 11), (11, 6)] {
        table.add_edge(a, b);
    }
    table
}

/// Naphthalene skeleton, two six-membered rings sharing the 4-9 bond
pub fn naphthalene() -> ConnectionTable {
    let mut table = ring(10);
    table.add_edge(4, 9);
    table
}

/// Fumaric acid heavy atoms: C0=C1, C1-C2(=O3)O4, C0-C5(=O6)O7
pub fn fumaric_acid() -> ConnectionTable {
    let mut table = ConnectionTable::with_capacity(8);
    for &(a, b) in &[(0, 1), (1, 2), (2, 3), (2, 4), (0, 5), (5, 6), (5, 7)] {
        table.add_edge(a, b);
    }
    table
}

/// Generates a connected molecule-like graph
///
/// A random spanning tree is grown atom by atom (each new atom bonds to an
/// earlier atom with free valence), then up to `ring_closures` extra bonds
/// close rings between atoms that are not yet bonded.
pub fn random_molecule<R: Rng + ?Sized>(
    atoms: usize,
    ring_closures: usize,
    rng: &mut R,
) -> ConnectionTable {
    let mut table = ConnectionTable::with_capacity(atoms);

    for i in 1..atoms {
        let open: Vec<usize> = (0..i)
            .filter(|&a| table.neighbors(a).len() < MAX_VALENCE)
            .collect();
        let parent = open.choose(rng).copied().unwrap_or(i - 1);
        table.add_edge(parent, i);
    }

    if atoms < 3 {
        return table;
    }

    let mut closed = 0;
    let mut attempts = 0;
    while closed < ring_closures && attempts < ring_closures * 20 {
        attempts += 1;
        let a = rng.gen_range(0..atoms);
        let b = rng.gen_range(0..atoms);
        if a == b
            || table.has_edge(a, b)
            || table.neighbors(a).len() >= MAX_VALENCE
            || table.neighbors(b).len() >= MAX_VALENCE
        {
            continue;
        }
        table.add_edge(a, b);
        closed += 1;
    }

    table
}

/// Generates a disconnected structure made of several random molecules
///
/// Fragments occupy consecutive index ranges in the order of `fragment_sizes`.
pub fn random_multifragment<R: Rng + ?Sized>(
    fragment_sizes: &[usize],
    ring_closures: usize,
    rng: &mut R,
) -> ConnectionTable {
    let mut table = ConnectionTable::new();

    for &size in fragment_sizes {
        let fragment = random_molecule(size, ring_closures, rng);
        let offset = table.vertex_count();
        for _ in 0..size {
            table.add_vertex();
        }
        for a in 0..size {
            for &b in fragment.neighbors(a) {
                if a < b {
                    table.add_edge(offset + a, offset + b);
                }
            }
        }
    }

    table
}
