use crate::planarity_blocks::structures::{ConflictPair, EdgeKind, LrState, Palm};

/// Second traversal: walks the sorted palm forest and merges side
/// constraints on the conflict-pair stack. Returns `false` iff some merge
/// is infeasible, i.e. the component is non-planar.
///
/// Requires `orient_forest` and `sort_by_nesting` to have run on `palm`.
pub(crate) fn check(palm: &Palm) -> bool {
    let mut st = LrState::new(palm.edge_count());
    for v in 0..palm.n {
        if palm.parent_edge[v].is_none() && !check_vertex(palm, &mut st, v) {
            return false;
        }
    }
    true
}

fn check_vertex(palm: &Palm, st: &mut LrState, v: usize) -> bool {
    let parent = palm.parent_edge[v];
    let first = palm.out[v].first().copied();

    for &e in &palm.out[v] {
        st.stack_bottom[e] = st.stack.len();

        if palm.kind[e] == EdgeKind::Tree {
            if !check_vertex(palm, st, palm.target(e)) {
                return false;
            }
        } else {
            st.lowpt_edge[e] = Some(e);
            st.stack.push(ConflictPair::single(e));
        }

        if palm.lowpt[e] < palm.height[v] {
            // e or its subtree returns above v
            if let Some(pe) = parent {
                if first == Some(e) {
                    st.lowpt_edge[pe] = st.lowpt_edge[e];
                } else if !st.add_constraints(palm, e, pe) {
                    return false;
                }
            }
        }
    }

    if let Some(pe) = parent {
        let u = palm.source(pe);
        st.trim_back_edges(palm, u);

        if palm.lowpt[pe] < palm.height[u] {
            // pe returns above its own source: remember which of the two
            // topmost chains it nests inside. The stack can be empty here
            // when every constraint already resolved; the reference edge
            // then stays unset, which the yes/no decision never observes.
            if let Some(top) = st.stack.last() {
                let hl = top.left.high;
                let hr = top.right.high;
                st.ref_edge[pe] = match (hl, hr) {
                    (Some(l), Some(r)) if palm.lowpt[l] > palm.lowpt[r] => Some(l),
                    (Some(l), None) => Some(l),
                    (_, r) => r,
                };
            }
        }
    }

    true
}
