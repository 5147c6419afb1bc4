// #![warn(missing_docs)]

//! # lr_planarity
//!
//! Planarity testing for undirected graphs: does a finite simple graph
//! admit a drawing in the plane without edge crossings?
//!
//! [`is_planar`] implements the left-right planarity criterion, a
//! linear-time reformulation of the Hopcroft-Tarjan test. It is a pure
//! predicate; no embedding is produced.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! Reference:
//! [The Left-Right Planarity Test](https://acm.math.spbu.ru/~sk1/download/papers/planar//brandes2010-planarity.pdf)

pub mod debugging;
pub mod input;
pub mod planarity;
pub mod types;

mod planarity_blocks;

#[cfg(test)]
mod testing;

pub use planarity::is_planar;
pub use types::UnGraph;
