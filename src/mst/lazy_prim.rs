use tracing::{debug, trace};

use super::SpanningForest;
use crate::error::Result;
use crate::graph::{Edge, WeightedGraph};
use crate::heap::{Compare, MinPq};

/// # Lazy Prim
///
/// Time complexity: `O(E log E)`, space `O(E)`
///
/// Grows one tree from every vertex not yet reached, keeping all edges leaving
/// the tree in a min-heap. Edges that became internal to the tree stay in the
/// heap until popped, then get discarded.
pub fn lazy_prim_mst(graph: &WeightedGraph) -> Result<SpanningForest> {
    let (forest, stale) = lazy_prim_counting_stale(graph)?;
    debug!(stale, "lazy prim done");
    Ok(forest)
}

// Also returns how many stale frontier edges were popped and discarded
pub(super) fn lazy_prim_counting_stale(graph: &WeightedGraph) -> Result<(SpanningForest, usize)> {
    let n = graph.vertex_count();
    let mut forest = SpanningForest::with_capacity(n.saturating_sub(1));
    let mut marked = vec![false; n];
    let mut frontier = MinPq::by(Edge::cmp_weight);
    let mut stale = 0;

    for s in 0..n {
        if marked[s] {
            continue;
        }
        let before = forest.len();
        stale += grow(graph, s, &mut marked, &mut frontier, &mut forest)?;
        debug!(root = s, edges = forest.len() - before, "grew spanning tree");
    }
    Ok((forest, stale))
}

fn grow<C: Compare<Edge>>(
    graph: &WeightedGraph,
    s: usize,
    marked: &mut [bool],
    frontier: &mut MinPq<Edge, C>,
    forest: &mut SpanningForest,
) -> Result<usize> {
    let mut stale = 0;
    scan(graph, s, marked, frontier)?;
    while let Ok(e) = frontier.del_min() {
        let (v, w) = e.endpoints();
        if marked[v] && marked[w] {
            trace!(edge = %e, "skipped stale edge");
            stale += 1;
            continue;
        }
        forest.push(e);
        if !marked[v] {
            scan(graph, v, marked, frontier)?;
        }
        if !marked[w] {
            scan(graph, w, marked, frontier)?;
        }
    }
    Ok(stale)
}

// Adds v to the tree and queues every edge to a vertex still outside it
fn scan<C: Compare<Edge>>(
    graph: &WeightedGraph,
    v: usize,
    marked: &mut [bool],
    frontier: &mut MinPq<Edge, C>,
) -> Result<()> {
    marked[v] = true;
    for e in graph.adjacent(v)? {
        if !marked[e.other(v as u32)? as usize] {
            frontier.insert(*e);
        }
    }
    Ok(())
}
