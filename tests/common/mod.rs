#![allow(dead_code)]

use mol_paths::{Graph, ShortestPathIndex};
use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};

/// Asserts `path` is a shortest path candidate from `from` to `to`:
/// correct ends, adjacent steps, no repetition and no chords.
pub fn ensure_consistent_path<G: Graph + ?Sized>(graph: &G, from: usize, to: usize, path: &[usize]) {
    assert!(!path.is_empty());
    assert_eq!(path[0], from);
    assert_eq!(path[path.len() - 1], to);

    for i in 1..path.len() {
        assert!(graph.has_vertex(path[i]), "Valid atom index in path");
        assert!(
            graph.has_edge(path[i - 1], path[i]),
            "Successive atoms in path are connected"
        );

        for j in 0..i {
            assert_ne!(path[i], path[j], "No repetition in path");
            if j + 1 < i {
                assert!(!graph.has_edge(path[j], path[i]), "No bond to previous atoms");
            }
        }
    }
}

/// Independent topology oracle: unit-weight Dijkstra over a petgraph copy
pub struct Oracle {
    graph: UnGraph<(), ()>,
}

impl Oracle {
    pub fn new<G: Graph + ?Sized>(graph: &G) -> Self {
        let mut pg = UnGraph::<(), ()>::default();
        for _ in 0..graph.vertex_count() {
            pg.add_node(());
        }
        for a in 0..graph.vertex_count() {
            for &b in graph.neighbors(a) {
                if a < b {
                    pg.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
                }
            }
        }
        Oracle { graph: pg }
    }

    /// Shortest path length from `from` to every vertex, `None` when disconnected
    pub fn lengths_from(&self, from: usize) -> Vec<Option<usize>> {
        let costs = dijkstra(&self.graph, NodeIndex::new(from), None, |_| 1usize);
        (0..self.graph.node_count())
            .map(|v| costs.get(&NodeIndex::new(v)).copied())
            .collect()
    }
}

/// Number of distinct shortest vertex paths to every vertex, by dynamic
/// programming over the distance layers
pub fn count_shortest_paths<G: Graph + ?Sized>(index: &ShortestPathIndex<'_, G>) -> Vec<usize> {
    let graph = index.graph();
    let distances = index.distances();
    let mut order: Vec<usize> = (0..graph.vertex_count())
        .filter(|&v| distances.get(v).is_some())
        .collect();
    order.sort_by_key(|&v| distances.get(v));

    let mut counts = vec![0usize; graph.vertex_count()];
    counts[index.source()] = 1;
    for &v in &order {
        let Some(d) = distances.get(v) else { continue };
        if d == 0 {
            continue;
        }
        let mut preds: Vec<usize> = graph
            .neighbors(v)
            .iter()
            .copied()
            .filter(|&n| distances.get(n) == Some(d - 1))
            .collect();
        preds.sort_unstable();
        preds.dedup();
        counts[v] = preds.iter().map(|&p| counts[p]).sum();
    }
    counts
}
