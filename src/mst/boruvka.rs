use std::cmp::Ordering;

use tracing::debug;

use super::SpanningForest;
use crate::dset::{DisjointSet, UnionFind};
use crate::error::Result;
use crate::graph::{Edge, WeightedGraph};

/// # Borůvka
///
/// Time complexity: `O(E log V)`
///
/// Each round, every component picks its lightest outgoing edge and all picks
/// are contracted at once, so the number of components at least halves.
/// Ties go to the edge added to the graph first; any consistent total order
/// keeps the picks of one round acyclic.
pub fn boruvka_mst(graph: &WeightedGraph) -> Result<SpanningForest> {
    boruvka_mst_with::<DisjointSet>(graph)
}

/// [`boruvka_mst`] over a caller-chosen union-find representation.
pub fn boruvka_mst_with<U: UnionFind>(graph: &WeightedGraph) -> Result<SpanningForest> {
    Ok(boruvka_counting_rounds::<U>(graph)?.0)
}

// Also returns the number of rounds run
pub(super) fn boruvka_counting_rounds<U: UnionFind>(
    graph: &WeightedGraph,
) -> Result<(SpanningForest, usize)> {
    let n = graph.vertex_count();
    let mut forest = SpanningForest::with_capacity(n.saturating_sub(1));
    let mut uf = U::with_len(n);
    let mut closest: Vec<Option<Edge>> = vec![None; n];

    // At most ceil(log2 V) rounds
    let mut t = 1;
    let mut round = 0;
    while t < n && forest.len() < n - 1 {
        closest.fill(None);
        for e in graph.edges() {
            let (v, w) = e.endpoints();
            let i = uf.find(v)?;
            let j = uf.find(w)?;
            if i == j {
                continue;
            }
            for k in [i, j] {
                let lighter = match &closest[k] {
                    Some(c) => e.cmp_weight(c) == Ordering::Less,
                    None => true,
                };
                if lighter {
                    closest[k] = Some(*e);
                }
            }
        }

        let mut picked = 0;
        for e in closest.iter().flatten() {
            let (v, w) = e.endpoints();
            // Both sides may have picked the same edge
            if uf.union(v, w)? {
                forest.push(*e);
                picked += 1;
            }
        }

        round += 1;
        debug!(round, picked, components = uf.count(), "finished boruvka round");
        if picked == 0 {
            break;
        }
        t *= 2;
    }
    Ok((forest, round))
}
