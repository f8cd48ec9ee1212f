//! Certificate check for minimum spanning forests.
//!
//! `O(E V)` union-find work; meant for tests and the `--check` flag of the
//! binary, never for the hot path.

use tracing::debug;

use super::SpanningForest;
use crate::dset::{DisjointSet, UnionFind};
use crate::error::{Error, Result};
use crate::graph::WeightedGraph;

const FLOATING_POINT_EPSILON: f64 = 1e-12;

/// Verifies that `forest`
/// - reports the sum of its own edge weights,
/// - is acyclic,
/// - connects every pair of vertices joined by an edge of `graph`,
/// - is cut-optimal: removing any forest edge `e` leaves no graph edge across
///   the resulting cut that is strictly lighter than `e`.
pub fn verify(graph: &WeightedGraph, forest: &SpanningForest) -> Result<()> {
    let total: f64 = forest.edges().iter().map(|e| e.weight()).sum();
    if !total.is_finite() {
        return Err(Error::InvariantViolation(format!(
            "weight of edges {} is not finite",
            total
        )));
    }
    let tolerance = FLOATING_POINT_EPSILON * total.abs().max(1.0);
    // NaN compares false, so a NaN reported weight fails here
    if !((total - forest.weight()).abs() <= tolerance) {
        return Err(Error::InvariantViolation(format!(
            "weight of edges {} does not equal reported weight {}",
            total,
            forest.weight()
        )));
    }

    let n = graph.vertex_count();
    let mut dset = DisjointSet::new(n);
    for e in forest.edges() {
        let (v, w) = e.endpoints();
        if !dset.union(v, w)? {
            return Err(Error::InvariantViolation(format!("not a forest: {} closes a cycle", e)));
        }
    }

    for e in graph.edges() {
        let (v, w) = e.endpoints();
        if !dset.connected(v, w)? {
            return Err(Error::InvariantViolation(format!("not a spanning forest: {} is not covered", e)));
        }
    }

    for (i, e) in forest.edges().iter().enumerate() {
        let mut cut = DisjointSet::new(n);
        for (j, f) in forest.edges().iter().enumerate() {
            if i != j {
                let (x, y) = f.endpoints();
                cut.union(x, y)?;
            }
        }

        for f in graph.edges() {
            let (x, y) = f.endpoints();
            if !cut.connected(x, y)? && f.weight() < e.weight() {
                return Err(Error::InvariantViolation(format!(
                    "edge {} violates cut optimality conditions of {}",
                    f, e
                )));
            }
        }
    }

    debug!(edges = forest.len(), weight = forest.weight(), "spanning forest verified");
    Ok(())
}
