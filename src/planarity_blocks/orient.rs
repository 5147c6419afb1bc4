use radsort::sort_by_key;

use crate::planarity_blocks::structures::{EdgeKind, Palm};

/// First traversal: runs the orientation DFS from every yet-unvisited
/// vertex, turning the undirected incidence lists into a palm forest with
/// finalized lowpoints and nesting depths.
pub(crate) fn orient_forest(palm: &mut Palm) {
    for v in 0..palm.n {
        if palm.height[v] == usize::MAX {
            palm.height[v] = 0;
            orient(palm, v);
        }
    }
}

fn orient(palm: &mut Palm, v: usize) {
    let incident = palm.inc[v].clone(); // borrow checker workaround

    for e in incident {
        if palm.kind[e] != EdgeKind::Unvisited {
            // already oriented from the other endpoint, or the parent edge
            continue;
        }

        // point the edge away from v
        if palm.ends[e].0 != v {
            let (s, t) = palm.ends[e];
            palm.ends[e] = (t, s);
        }
        let w = palm.ends[e].1;

        palm.lowpt[e] = palm.height[v];
        palm.lowpt2[e] = palm.height[v];
        palm.out[v].push(e);

        if palm.height[w] == usize::MAX {
            palm.kind[e] = EdgeKind::Tree;
            palm.parent_edge[w] = Some(e);
            palm.height[w] = palm.height[v] + 1;
            orient(palm, w);
        } else {
            palm.kind[e] = EdgeKind::Back;
            palm.lowpt[e] = palm.height[w];
        }

        // fold this edge's return heights into the edge that entered v
        if let Some(pe) = palm.parent_edge[v] {
            let (lo, lo2) = (palm.lowpt[e], palm.lowpt2[e]);
            if lo < palm.lowpt[pe] {
                palm.lowpt2[pe] = palm.lowpt[pe].min(lo2);
                palm.lowpt[pe] = lo;
            } else if lo > palm.lowpt[pe] {
                palm.lowpt2[pe] = palm.lowpt2[pe].min(lo);
            } else {
                palm.lowpt2[pe] = palm.lowpt2[pe].min(lo2);
            }
        }
    }

    // lowpoints of everything out of v are final here
    for i in 0..palm.out[v].len() {
        let e = palm.out[v][i];
        let mut depth = 2 * palm.lowpt[e];
        if palm.kind[e] == EdgeKind::Tree && palm.lowpt2[e] < palm.height[v] {
            // chordal: a second independent return above v
            depth += 1;
        }
        palm.nesting_depth[e] = depth;
    }
}

/// Orders every oriented adjacency list by ascending nesting depth, the
/// order the left-right check walks outgoing edges in.
pub(crate) fn sort_by_nesting(palm: &mut Palm) {
    let Palm {
        out, nesting_depth, ..
    } = palm;
    for list in out.iter_mut() {
        sort_by_key(list, |&e| nesting_depth[e]);
    }
}
