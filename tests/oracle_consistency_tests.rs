mod common;

use std::collections::HashSet;

use common::{count_shortest_paths, ensure_consistent_path, Oracle};
use mol_paths::graph::generators;
use mol_paths::{ConnectionTable, Graph, LayeredBfs, ShortestPathIndex, VertexSet};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

// Checks every (source, target) pair against the oracle, including self and swapped pairs
fn ensure_consistency_with_oracle(table: &ConnectionTable) {
    let oracle = Oracle::new(table);
    let atom_count = table.vertex_count();

    for a1 in 0..atom_count {
        let index = ShortestPathIndex::new(table, a1).unwrap();
        let oracle_lengths = oracle.lengths_from(a1);
        let counts = count_shortest_paths(&index);

        for a2 in 0..atom_count {
            if !index.path_exists(a2) {
                assert_eq!(oracle_lengths[a2], None, "Oracle found disconnected fragment");
                assert!(index.distance_to(a2).is_err());
                continue;
            }

            let length = index.distance_to(a2).unwrap();
            assert_eq!(Some(length), oracle_lengths[a2], "Same path length should be found");

            let single = index.shortest_path_to(a2).unwrap();
            assert_eq!(single.len(), length + 1);
            ensure_consistent_path(table, a1, a2, &single);

            let all: Vec<Vec<usize>> = index.shortest_paths_to(a2).unwrap().collect();
            assert!(!all.is_empty());
            assert_eq!(all[0], single, "First enumerated path is the single path");
            assert_eq!(all.len(), counts[a2], "Every shortest path is enumerated");

            let mut seen = HashSet::new();
            for path in &all {
                ensure_consistent_path(table, a1, a2, path);
                assert_eq!(path.len(), length + 1);
                assert!(seen.insert(path.clone()), "Enumerated paths are unique");
            }

            let on_paths: VertexSet = all.iter().flatten().copied().collect();
            assert_eq!(index.path_union_from(a2).unwrap(), on_paths);
        }
    }
}

#[test]
fn test_random_molecules_against_oracle() {
    let mut rng = StdRng::seed_from_u64(42);
    for &(atoms, rings) in &[(12, 2), (30, 4), (60, 8)] {
        let table = generators::random_molecule(atoms, rings, &mut rng);
        ensure_consistency_with_oracle(&table);
    }
}

#[test]
fn test_large_polycyclic_molecule_against_oracle() {
    let mut rng = StdRng::seed_from_u64(1_963);
    let table = generators::random_molecule(101, 12, &mut rng);
    ensure_consistency_with_oracle(&table);
}

#[test]
fn test_multifragment_against_oracle() {
    let mut rng = StdRng::seed_from_u64(2020);
    let table = generators::random_multifragment(&[40, 1, 25, 9], 5, &mut rng);
    ensure_consistency_with_oracle(&table);
}

#[test]
fn test_fixed_molecules_against_oracle() {
    ensure_consistency_with_oracle(&generators::ring(6));
    ensure_consistency_with_oracle(&generators::biphenyl());
    ensure_consistency_with_oracle(&generators::naphthalene());
    ensure_consistency_with_oracle(&generators::fumaric_acid());
    ensure_consistency_with_oracle(&generators::chain(7));
}

#[test]
fn test_path_union_is_additive() {
    let mut rng = StdRng::seed_from_u64(7);
    let table = generators::random_molecule(45, 6, &mut rng);
    let index = ShortestPathIndex::new(&table, 0).unwrap();

    for a in 0..table.vertex_count() {
        for b in (a..table.vertex_count()).step_by(3) {
            let mut expected = index.path_union_from(a).unwrap();
            expected.union_with(&index.path_union_from(b).unwrap());
            assert_eq!(index.path_union([a, b]).unwrap(), expected);
        }
    }
}

#[test]
fn test_strategies_agree_on_random_molecules() {
    let mut rng = StdRng::seed_from_u64(99);
    let table = generators::random_multifragment(&[30, 30], 6, &mut rng);

    for source in 0..table.vertex_count() {
        let relaxed = ShortestPathIndex::new(&table, source).unwrap();
        let layered = ShortestPathIndex::with_algorithm(&table, source, &LayeredBfs).unwrap();
        assert_eq!(relaxed.distances(), layered.distances());
    }
}

#[test]
fn test_concurrent_queries_share_one_index() {
    let mut rng = StdRng::seed_from_u64(5);
    let table = generators::random_molecule(80, 10, &mut rng);
    let index = ShortestPathIndex::new(&table, 0).unwrap();

    let parallel: Vec<(usize, Vec<usize>, usize)> = (0..table.vertex_count())
        .into_par_iter()
        .map(|t| {
            (
                index.distance_to(t).unwrap(),
                index.shortest_path_to(t).unwrap(),
                index.shortest_paths_to(t).unwrap().count(),
            )
        })
        .collect();

    for (t, (distance, path, count)) in parallel.into_iter().enumerate() {
        assert_eq!(distance, index.distance_to(t).unwrap());
        assert_eq!(path, index.shortest_path_to(t).unwrap());
        assert_eq!(count, index.shortest_paths_to(t).unwrap().count());
    }
}
