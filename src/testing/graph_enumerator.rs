use petgraph::visit::NodeIndexable;

use crate::UnGraph;

/// Iterates every labeled graph on `n` vertices, one bitmask of the
/// possible edges at a time.
pub(crate) struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    pub(crate) fn all_graphs(n: usize) -> Self {
        GraphEnumeratorState {
            n,
            mask: 0,
            last_mask: 1 << (n * (n - 1) / 2),
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = UnGraph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = UnGraph::new_undirected();
        for i in 0..self.n {
            graph.add_node(i as u32);
        }

        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.add_edge(graph.from_index(i), graph.from_index(j), ());
                }
                check += 1;
            }
        }

        self.mask = self.mask.wrapping_add(1);
        Some(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_every_triangle_subgraph() {
        let graphs: Vec<UnGraph> = GraphEnumeratorState::all_graphs(3).collect();
        assert_eq!(graphs.len(), 8);
        assert_eq!(graphs.iter().filter(|g| g.edge_count() == 3).count(), 1);
    }
}
