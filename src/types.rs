/// Wrapper for petgraph's undirected graph type.
///
/// Node weights hold the caller's vertex labels; edges carry no payload.
pub type UnGraph = petgraph::graph::UnGraph<u32, ()>;
