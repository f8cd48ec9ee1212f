use std::mem;

use crate::error::{Error, Result};

// Trait for painless switch between different partition representations
pub trait UnionFind {
    /// `n` singleton components.
    fn with_len(n: usize) -> Self
    where
        Self: Sized;

    fn len(&self) -> usize;

    /// Number of disjoint components.
    fn count(&self) -> usize;

    /// Representative of the component containing `p`.
    fn find(&self, p: usize) -> Result<usize>;

    // Returns true iff two sets were previously disjoint
    fn union(&mut self, p: usize, q: usize) -> Result<bool>;

    fn connected(&self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[inline]
fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange { index, len })
    }
}

/// # Weighted disjoint set forest
///
/// Union by size without path compression, so `find` is a read-only walk.
/// Both `find` and `union` run in `O(log n)`, since a tree of height `h`
/// holds at least `2^h` elements.
///
/// Links are stored as `i32`, so a set holds at most `i32::MAX` elements.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    // Represents parent if >= 0, size if < 0
    link: Vec<i32>,
    count: usize,
}

impl DisjointSet {
    pub const MAX_LEN: usize = i32::MAX as usize;

    /// # Panics
    ///
    /// If `n` exceeds [`Self::MAX_LEN`].
    pub fn new(n: usize) -> Self {
        assert!(n <= Self::MAX_LEN, "{} elements exceed the limit of {}", n, Self::MAX_LEN);
        Self {
            link: vec![-1; n],
            count: n,
        }
    }

    fn root_with_size(&self, mut u: usize) -> (usize, u32) {
        loop {
            let p = self.link[u];
            if p < 0 {
                return (u, (-p) as u32);
            }
            u = p as usize;
        }
    }

    /// Number of elements in the component containing `u`.
    pub fn size(&self, u: usize) -> Result<u32> {
        check_index(u, self.link.len())?;
        Ok(self.root_with_size(u).1)
    }
}

impl UnionFind for DisjointSet {
    fn with_len(n: usize) -> Self {
        Self::new(n)
    }

    fn len(&self) -> usize {
        self.link.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&self, p: usize) -> Result<usize> {
        check_index(p, self.link.len())?;
        Ok(self.root_with_size(p).0)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        check_index(p, self.link.len())?;
        check_index(q, self.link.len())?;
        let (mut u, size_u) = self.root_with_size(p);
        let (mut v, size_v) = self.root_with_size(q);
        if u == v {
            return Ok(false);
        }

        if size_u < size_v {
            mem::swap(&mut u, &mut v);
        }
        // Both fit: indices and sizes are bounded by MAX_LEN
        self.link[v] = u as i32;
        self.link[u] = -((size_u + size_v) as i32);
        self.count -= 1;
        Ok(true)
    }
}

/// # Quick-find partition
///
/// `id[p]` is always the component id itself: `O(1)` find, `O(n)` union.
/// Ids are `u32`, so at most `u32::MAX` elements.
#[derive(Clone, Debug)]
pub struct QuickFind {
    id: Vec<u32>,
    count: usize,
}

impl QuickFind {
    pub const MAX_LEN: usize = u32::MAX as usize;

    /// # Panics
    ///
    /// If `n` exceeds [`Self::MAX_LEN`].
    pub fn new(n: usize) -> Self {
        assert!(n <= Self::MAX_LEN, "{} elements exceed the limit of {}", n, Self::MAX_LEN);
        Self {
            id: (0..n as u32).collect(),
            count: n,
        }
    }
}

impl UnionFind for QuickFind {
    fn with_len(n: usize) -> Self {
        Self::new(n)
    }

    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&self, p: usize) -> Result<usize> {
        check_index(p, self.id.len())?;
        Ok(self.id[p] as usize)
    }

    fn union(&mut self, p: usize, q: usize) -> Result<bool> {
        let p_id = self.find(p)? as u32;
        let q_id = self.find(q)? as u32;
        if p_id == q_id {
            return Ok(false);
        }
        for id in self.id.iter_mut().filter(|id| **id == p_id) {
            *id = q_id;
        }
        self.count -= 1;
        Ok(true)
    }
}
