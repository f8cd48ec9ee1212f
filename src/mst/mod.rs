//! Minimum spanning forests of edge-weighted undirected graphs.
//!
//! Every algorithm here returns one tree per connected component, so a
//! disconnected input is not an error. All of them agree on the total weight;
//! the edge sets may differ when weights tie.

use std::fmt;

use crate::error::Result;
use crate::graph::{Edge, WeightedGraph};

mod boruvka;
pub mod check;
mod kruskal;
mod lazy_prim;

pub use boruvka::{boruvka_mst, boruvka_mst_with};
pub use kruskal::kruskal_mst;
pub use lazy_prim::lazy_prim_mst;

/// Edges of a minimum spanning forest in discovery order, with their total weight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    weight: f64,
}

impl SpanningForest {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            weight: 0.0,
        }
    }

    pub(crate) fn push(&mut self, e: Edge) {
        self.weight += e.weight();
        self.edges.push(e);
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Edge>, f64) {
        (self.edges, self.weight)
    }

    /// Certifies this forest against `graph`. See [`check::verify`].
    pub fn check(&self, graph: &WeightedGraph) -> Result<()> {
        check::verify(graph, self)
    }
}

impl FromIterator<Edge> for SpanningForest {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut forest = Self::default();
        for e in iter {
            forest.push(e);
        }
        forest
    }
}

impl fmt::Display for SpanningForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.edges {
            writeln!(f, "{}", e)?;
        }
        writeln!(f, "{:.5}", self.weight)
    }
}
