use crate::UnGraph;
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};

/// This is equivalent to [`from_str`], but takes a file path as the input.
pub fn from_file(path: &str) -> UnGraph {
    let file = File::open(path).expect("File should exist and be readable");
    let reader = BufReader::new(file);
    parse_edge_list(reader)
}

/// Reads a graph from a string.
///
/// Undirected graph input:
/// - one line, one edge in format "u,v",
/// - you can number vertices with arbitrary non-negative integers,
/// numbers are kept as node weights; petgraph's `NodeIndex` follows
/// first appearance order.
///
/// <div class="warning">
///
/// > Isolated vertices cannot be expressed in this format.
/// > Multi-edges and self-loops are not supported.
///
/// </div>
///
/// Example input:
/// ```text
/// 1,2
/// 2,3
/// 3,4
/// 4,1
/// 1,3
/// ```
pub fn from_str(input: &str) -> UnGraph {
    let cursor = Cursor::new(input);
    let reader = BufReader::new(cursor);
    parse_edge_list(reader)
}

fn parse_edge_list<R: BufRead>(reader: R) -> UnGraph {
    let mut graph = UnGraph::new_undirected();
    let mut interned = HashMap::<u32, NodeIndex>::new();

    for line in reader.lines() {
        let line = line.expect("Line should be readable");
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parts: Vec<_> = line.split(',').collect();
        if parts.len() != 2 {
            panic!("Wrong format, expected 'u,v' for an edge");
        }
        let u: u32 = parts[0]
            .trim()
            .parse()
            .expect("Vertex id should be a non-negative number");
        let v: u32 = parts[1]
            .trim()
            .parse()
            .expect("Vertex id should be a non-negative number");

        let a = *interned.entry(u).or_insert_with(|| graph.add_node(u));
        let b = *interned.entry(v).or_insert_with(|| graph.add_node(v));
        graph.add_edge(a, b, ());
    }

    graph
}
