use crate::UnGraph;
use hashbrown::HashSet;
use petgraph::visit::NodeIndexable;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Random undirected connected simple graph: a random spanning tree plus
/// random extra edges. `m` must fit in a simple graph on `n` vertices.
pub(crate) fn random_connected_graph(n: usize, m: usize, seed: u64) -> UnGraph {
    assert!(m >= n.saturating_sub(1) && m <= n * (n - 1) / 2);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = UnGraph::new_undirected();
    let mut present = HashSet::new();

    for i in 0..n {
        graph.add_node(i as u32);
        if i > 0 {
            let j = rng.random_range(0..i);
            present.insert((j, i));
            graph.add_edge(graph.from_index(i), graph.from_index(j), ());
        }
    }

    let mut num_edges = n.saturating_sub(1);
    while num_edges < m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        if s == t || !present.insert((s.min(t), s.max(t))) {
            continue;
        }
        graph.add_edge(graph.from_index(s), graph.from_index(t), ());
        num_edges += 1;
    }

    graph
}

/// Generates a random tree.
pub(crate) fn random_tree(n: usize, seed: u64) -> UnGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = UnGraph::new_undirected();

    for i in 0..n {
        graph.add_node(i as u32);
        if i > 0 {
            let j = rng.random_range(0..i);
            graph.add_edge(graph.from_index(i), graph.from_index(j), ());
        }
    }

    graph
}
