use tracing::debug;

use super::SpanningForest;
use crate::dset::{DisjointSet, UnionFind};
use crate::error::Result;
use crate::graph::{Edge, WeightedGraph};

/// # Kruskal
///
/// Time complexity: `O(E log E)`
///
/// Merges components along edges in ascending weight order, stopping as soon
/// as `V - 1` edges are taken.
pub fn kruskal_mst(graph: &WeightedGraph) -> Result<SpanningForest> {
    let n = graph.vertex_count();
    let mut remained_edges = n.saturating_sub(1);
    let mut forest = SpanningForest::with_capacity(remained_edges);
    if remained_edges == 0 {
        return Ok(forest);
    }

    let mut edges: Vec<Edge> = graph.edges().copied().collect();
    edges.sort_by(Edge::cmp_weight);

    let mut dset = DisjointSet::new(n);
    for e in edges {
        let (u, v) = e.endpoints();
        if dset.union(u, v)? {
            forest.push(e);
            remained_edges -= 1;
            if remained_edges == 0 {
                break;
            }
        }
    }
    debug!(components = dset.count(), edges = forest.len(), "kruskal done");
    Ok(forest)
}
