use dot::{Edges, GraphWalk, Labeller, Nodes};
use petgraph::visit::EdgeRef;

use crate::planarity_blocks::orient::{orient_forest, sort_by_nesting};
use crate::planarity_blocks::structures::{EdgeKind, Palm};
use crate::UnGraph;

type Node = usize;

#[derive(Debug, Clone)]
struct PalmEdge {
    source: Node,
    target: Node,
    kind: EdgeKind,
    lowpt: usize,
    lowpt2: usize,
    nesting_depth: usize,
}

struct PalmView<'a> {
    nodes: Vec<Node>,
    edges: Vec<PalmEdge>,
    height: &'a [usize],
    parent_edge: &'a [Option<usize>],
}

impl<'a> Labeller<'a, Node, PalmEdge> for PalmView<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("palm").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        dot::LabelText::label(format!(
            "{}\nh:{}{}",
            n,
            self.height[*n],
            if self.parent_edge[*n].is_none() {
                " root"
            } else {
                ""
            }
        ))
    }

    fn edge_label(&self, e: &PalmEdge) -> dot::LabelText<'a> {
        match e.kind {
            EdgeKind::Tree => dot::LabelText::label(format!(
                "tree low:{}|{} nd:{}",
                e.lowpt, e.lowpt2, e.nesting_depth
            )),
            _ => dot::LabelText::label(format!("back low:{} nd:{}", e.lowpt, e.nesting_depth)),
        }
    }
}

impl<'a> GraphWalk<'a, Node, PalmEdge> for PalmView<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, PalmEdge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &PalmEdge) -> Node {
        e.source
    }

    fn target(&self, e: &PalmEdge) -> Node {
        e.target
    }
}

/// Renders the palm forest of a graph in DOT format: DFS heights on the
/// vertices, lowpoints and nesting depths on the oriented edges, outgoing
/// edges in nesting order.
///
/// This is the first phase of the planarity test made visible; it is a
/// diagnostic aid and plays no part in the decision.
pub fn palm_to_dot(graph: &UnGraph) -> String {
    let n = graph.node_count();
    let mut palm = Palm::new(n);
    for e in graph.edge_references() {
        palm.add_edge(e.source().index(), e.target().index());
    }
    orient_forest(&mut palm);
    sort_by_nesting(&mut palm);

    let mut view = PalmView {
        nodes: (0..n).collect(),
        edges: Vec::new(),
        height: &palm.height,
        parent_edge: &palm.parent_edge,
    };
    for v in 0..n {
        for &e in &palm.out[v] {
            view.edges.push(PalmEdge {
                source: v,
                target: palm.target(e),
                kind: palm.kind[e],
                lowpt: palm.lowpt[e],
                lowpt2: palm.lowpt2[e],
                nesting_depth: palm.nesting_depth[e],
            });
        }
    }

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&view, &mut buffer).unwrap();
    String::from_utf8(buffer.into_inner()).unwrap()
}
