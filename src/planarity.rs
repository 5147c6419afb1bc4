use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use log::debug;
use petgraph::graph::{Graph, IndexType};
use petgraph::visit::EdgeRef;
use petgraph::EdgeType;

use crate::planarity_blocks::lr;
use crate::planarity_blocks::orient::{orient_forest, sort_by_nesting};
use crate::planarity_blocks::structures::Palm;

/// Tests whether a finite simple undirected graph is planar, using the
/// left-right planarity criterion.
///
/// Node and edge weights are ignored. Directed graphs are outside the
/// domain and answer `false`. Inputs are assumed simple: multi-edges and
/// self-loops are not supported.
///
/// Runs in linear time. Both traversals are recursive, so the call depth
/// is bounded by the largest component's vertex count; feed adversarially
/// deep graphs to a thread with an enlarged stack.
///
/// ```
/// use lr_planarity::{is_planar, UnGraph};
///
/// let mut g = UnGraph::new_undirected();
/// let a = g.add_node(0);
/// let b = g.add_node(1);
/// let c = g.add_node(2);
/// g.add_edge(a, b, ());
/// g.add_edge(b, c, ());
/// g.add_edge(c, a, ());
/// assert!(is_planar(&g));
/// ```
pub fn is_planar<N, E, Ty, Ix>(graph: &Graph<N, E, Ty, Ix>) -> bool
where
    Ty: EdgeType,
    Ix: IndexType,
{
    let n = graph.node_count();
    let m = graph.edge_count();

    if n == 0 {
        return true;
    }
    if graph.is_directed() {
        debug!("directed input, rejecting");
        return false;
    }
    if n <= 4 {
        return true;
    }
    if m > 3 * n - 6 {
        debug!("edge bound exceeded (n={}, m={}), rejecting without traversal", n, m);
        return false;
    }

    // split into connected components, re-indexed densely from 0
    let mut comp_of = vec![usize::MAX; n];
    let mut local_of = vec![0usize; n];
    let mut comp_sizes: Vec<usize> = Vec::new();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut queue = VecDeque::new();

    for start in graph.node_indices() {
        if visited.contains(start.index()) {
            continue;
        }
        let comp = comp_sizes.len();
        let mut size = 0;
        visited.insert(start.index());
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            comp_of[v.index()] = comp;
            local_of[v.index()] = size;
            size += 1;
            for w in graph.neighbors(v) {
                if !visited.contains(w.index()) {
                    visited.insert(w.index());
                    queue.push_back(w);
                }
            }
        }
        comp_sizes.push(size);
    }

    // components of fewer than 3 vertices cannot host a crossing
    let mut palms: Vec<Option<Palm>> = comp_sizes
        .iter()
        .map(|&size| (size >= 3).then(|| Palm::new(size)))
        .collect();

    for edge in graph.edge_references() {
        let s = edge.source().index();
        let t = edge.target().index();
        if let Some(palm) = palms[comp_of[s]].as_mut() {
            palm.add_edge(local_of[s], local_of[t]);
        }
    }

    debug!("{} vertices, {} edges, {} components", n, m, comp_sizes.len());

    for palm in palms.iter_mut().flatten() {
        orient_forest(palm);
        sort_by_nesting(palm);
        if !lr::check(palm) {
            debug!("component of {} vertices failed the left-right check", palm.n);
            return false;
        }
    }
    true
}
