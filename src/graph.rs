use std::cmp::Ordering;
use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};

/// An undirected weighted edge. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    v: u32,
    w: u32,
    weight: f64,
}

impl Edge {
    pub fn new(v: u32, w: u32, weight: f64) -> Self {
        Self { v, w, weight }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn either(&self) -> u32 {
        self.v
    }

    pub fn other(&self, vertex: u32) -> Result<u32> {
        if vertex == self.v {
            Ok(self.w)
        } else if vertex == self.w {
            Ok(self.v)
        } else {
            Err(Error::NotAnEndpoint { vertex })
        }
    }

    pub fn endpoints(&self) -> (usize, usize) {
        (self.v as usize, self.w as usize)
    }

    // Total order by weight only; endpoints never break ties
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, self.weight)
    }
}

/// The 8-vertex, 16-edge reference graph. Its minimum spanning tree weighs 1.81.
pub const TINY_EDGES: [(u32, u32, f64); 16] = [
    (4, 5, 0.35),
    (4, 7, 0.37),
    (5, 7, 0.28),
    (0, 7, 0.16),
    (1, 5, 0.32),
    (0, 4, 0.38),
    (2, 3, 0.17),
    (1, 7, 0.19),
    (0, 2, 0.26),
    (1, 2, 0.36),
    (1, 3, 0.29),
    (2, 7, 0.34),
    (6, 2, 0.40),
    (3, 6, 0.52),
    (6, 0, 0.58),
    (6, 4, 0.93),
];

// Vertex ids and edge ids are stored as u32
const MAX_VERTICES: usize = u32::MAX as usize + 1;
const MAX_EDGES: usize = u32::MAX as usize + 1;

/// # Edge-weighted undirected graph
///
/// Edges live in a single arena; each adjacency list holds arena indices, so
/// every edge is referenced from both endpoints but stored once.
/// Parallel edges and self-loops are kept as given.
///
/// Holds at most `2^32` vertices and `2^32` edges.
#[derive(Clone, Debug, Default)]
pub struct WeightedGraph {
    edges: Vec<Edge>,
    adj: Vec<Vec<u32>>,
}

impl WeightedGraph {
    pub fn new(n_verts: usize) -> Self {
        Self {
            edges: vec![],
            adj: vec![vec![]; n_verts],
        }
    }

    pub fn from_edges<I>(n_verts: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new(n_verts);
        for e in edges {
            graph.add_edge(e)?;
        }
        Ok(graph)
    }

    pub fn tiny() -> Self {
        let mut graph = Self::new(8);
        for (v, w, weight) in TINY_EDGES {
            graph.edges.push(Edge::new(v, w, weight));
            let id = graph.edges.len() as u32 - 1;
            graph.adj[v as usize].push(id);
            graph.adj[w as usize].push(id);
        }
        graph
    }

    /// `n_edges` edges with uniform random endpoints and weights rounded to
    /// hundredths in `[0, 1)`.
    pub fn random(n_verts: usize, n_edges: usize, rng: &mut impl Rng) -> Result<Self> {
        if n_verts == 0 && n_edges > 0 {
            return Err(Error::IndexOutOfRange { index: 0, len: 0 });
        }
        if n_verts > MAX_VERTICES {
            return Err(Error::CapacityExceeded {
                len: n_verts,
                max: MAX_VERTICES,
            });
        }
        let mut graph = Self::new(n_verts);
        for _ in 0..n_edges {
            let v = rng.gen_range(0..n_verts) as u32;
            let w = rng.gen_range(0..n_verts) as u32;
            let weight = (100.0 * rng.gen::<f64>()).round() / 100.0;
            graph.add_edge(Edge::new(v, w, weight))?;
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.adj.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: v,
                len: self.adj.len(),
            })
        }
    }

    pub fn add_edge(&mut self, e: Edge) -> Result<()> {
        let (v, w) = e.endpoints();
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        if !e.weight.is_finite() {
            return Err(Error::InvalidWeight { weight: e.weight });
        }

        let id = u32::try_from(self.edges.len()).map_err(|_| Error::CapacityExceeded {
            len: self.edges.len() + 1,
            max: MAX_EDGES,
        })?;
        self.edges.push(e);
        self.adj[v].push(id);
        self.adj[w].push(id);
        Ok(())
    }

    /// Edges incident to `v`. A self-loop shows up twice.
    pub fn adjacent(&self, v: usize) -> Result<impl Iterator<Item = &Edge> + '_> {
        self.check_vertex(v)?;
        Ok(self.adj[v].iter().map(|&id| &self.edges[id as usize]))
    }

    pub fn degree(&self, v: usize) -> Result<usize> {
        self.check_vertex(v)?;
        Ok(self.adj[v].len())
    }

    /// Every edge exactly once, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter()
    }
}

impl fmt::Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.vertex_count(), self.edge_count())?;
        for (v, ids) in self.adj.iter().enumerate() {
            write!(f, "{}:", v)?;
            for &id in ids {
                write!(f, "  {}", self.edges[id as usize])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub(crate) fn graph_of(n_verts: usize, edges: &[(u32, u32, f64)]) -> WeightedGraph {
        let edges = edges.iter().map(|&(v, w, weight)| Edge::new(v, w, weight));
        WeightedGraph::from_edges(n_verts, edges).unwrap()
    }

    #[test]
    fn test_edge() {
        let e = Edge::new(3, 6, 0.52);
        assert_eq!(e.either(), 3);
        assert_eq!(e.other(3), Ok(6));
        assert_eq!(e.other(6), Ok(3));
        assert_eq!(e.other(4), Err(Error::NotAnEndpoint { vertex: 4 }));
        assert_eq!(e.to_string(), "3-6 0.52000");
        assert_eq!(Edge::new(0, 1, 0.1).cmp_weight(&e), Ordering::Less);
        assert_eq!(Edge::new(0, 1, 0.52).cmp_weight(&e), Ordering::Equal);
    }

    #[test]
    fn test_adjacency() {
        let g = WeightedGraph::tiny();
        assert_eq!(g.vertex_count(), 8);
        assert_eq!(g.edge_count(), 16);
        assert_eq!(g.edges().count(), 16);

        let total_degree: usize = (0..8).map(|v| g.degree(v).unwrap()).sum();
        assert_eq!(total_degree, 2 * 16);
        for v in 0..8 {
            for e in g.adjacent(v).unwrap() {
                let w = e.other(v as u32).unwrap() as usize;
                assert!(g.adjacent(w).unwrap().any(|f| std::ptr::eq(e, f)));
            }
        }
        assert_eq!(g.degree(6).unwrap(), 4);
    }

    #[test]
    fn test_self_loops_and_parallel_edges() {
        let g = graph_of(2, &[(0, 0, 1.0), (0, 1, 2.0), (1, 0, 2.0)]);
        assert_eq!(g.degree(0).unwrap(), 4);
        assert_eq!(g.degree(1).unwrap(), 2);
        assert_eq!(g.edges().count(), 3);
    }

    #[test]
    fn test_rejects_bad_edges() {
        let mut g = WeightedGraph::new(3);
        assert_eq!(
            g.add_edge(Edge::new(0, 3, 1.0)),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        for weight in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                g.add_edge(Edge::new(0, 1, weight)),
                Err(Error::InvalidWeight { .. })
            ));
        }
        assert!(WeightedGraph::from_edges(3, [Edge::new(0, 1, f64::INFINITY)]).is_err());
        assert_eq!(g.edge_count(), 0);
        assert!(g.adjacent(5).is_err());
    }

    #[test]
    fn test_random() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = WeightedGraph::random(10, 25, &mut rng).unwrap();
        assert_eq!(g.vertex_count(), 10);
        assert_eq!(g.edge_count(), 25);
        for e in g.edges() {
            let (v, w) = e.endpoints();
            assert!(v < 10 && w < 10);
            assert!((0.0..=1.0).contains(&e.weight()));
            assert!(((e.weight() * 100.0).round() - e.weight() * 100.0).abs() < 1e-9);
        }

        assert!(WeightedGraph::random(0, 0, &mut rng).is_ok());
        assert!(WeightedGraph::random(0, 1, &mut rng).is_err());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_random_vertex_limit() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            WeightedGraph::random(usize::MAX, 1, &mut rng).err(),
            Some(Error::CapacityExceeded {
                len: usize::MAX,
                max: u32::MAX as usize + 1,
            })
        );
    }

    #[test]
    fn test_tiny() {
        let g = WeightedGraph::tiny();
        assert_eq!(g.vertex_count(), 8);
        assert_eq!(g.edge_count(), TINY_EDGES.len());
        let rebuilt = graph_of(8, &TINY_EDGES);
        assert!(g.edges().eq(rebuilt.edges()));
    }

    #[test]
    fn test_display() {
        let g = graph_of(2, &[(0, 1, 0.5)]);
        assert_eq!(g.to_string(), "2 1\n0:  0-1 0.50000\n1:  0-1 0.50000\n");
    }
}
