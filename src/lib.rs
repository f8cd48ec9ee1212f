//! Minimum spanning forests over edge-weighted undirected graphs.
//!
//! - [`dset`]: union-find with weighted union, and a quick-find variant
//! - [`graph`]: weighted edges and the adjacency-list graph
//! - [`heap`]: binary min-heap with a pluggable order
//! - [`mst`]: lazy Prim, Borůvka and Kruskal, plus a certificate check

pub mod dset;
pub mod error;
pub mod graph;
pub mod heap;
pub mod mst;

pub use dset::{DisjointSet, QuickFind, UnionFind};
pub use error::{Error, Result};
pub use graph::{Edge, WeightedGraph};
pub use heap::MinPq;
pub use mst::{boruvka_mst, boruvka_mst_with, kruskal_mst, lazy_prim_mst, SpanningForest};
