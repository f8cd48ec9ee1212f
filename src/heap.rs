use std::cmp::Ordering;

use crate::error::{Error, Result};

pub trait Compare<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// `Ord` order of the keys themselves.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Order given by a closure.
#[derive(Clone, Copy, Debug)]
pub struct ByFn<F>(pub F);

impl<T, F> Compare<T> for ByFn<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

/// # Binary min-heap
///
/// Positions are 1-indexed: the children of `i` are `2i` and `2i + 1`, and
/// `heap[i] <= heap[2i], heap[2i + 1]` whenever they exist.
/// Slot `i` is stored at `keys[i - 1]`. Ties come out in no particular order.
#[derive(Clone, Debug)]
pub struct MinPq<T, C = Natural> {
    keys: Vec<T>,
    cmp: C,
}

impl<T: Ord> MinPq<T> {
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T: Ord> Default for MinPq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> MinPq<T, ByFn<F>>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn by(f: F) -> Self {
        Self::with_comparator(ByFn(f))
    }
}

impl<T, C: Compare<T>> MinPq<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self { keys: vec![], cmp }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn insert(&mut self, key: T) {
        self.keys.push(key);
        self.swim(self.keys.len());
    }

    pub fn min(&self) -> Result<&T> {
        self.keys.first().ok_or(Error::Underflow)
    }

    pub fn del_min(&mut self) -> Result<T> {
        if self.keys.is_empty() {
            return Err(Error::Underflow);
        }
        let last = self.keys.len() - 1;
        self.keys.swap(0, last);
        let min = self.keys.pop().ok_or(Error::Underflow)?;
        self.sink(1);
        Ok(min)
    }

    /// Drains the queue in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(key) = self.del_min() {
            sorted.push(key);
        }
        sorted
    }

    #[inline]
    fn greater(&self, i: usize, j: usize) -> bool {
        self.cmp.compare(&self.keys[i - 1], &self.keys[j - 1]) == Ordering::Greater
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.greater(k / 2, k) {
            self.keys.swap(k / 2 - 1, k - 1);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.keys.len();
        while 2 * k <= n {
            let mut j = 2 * k;
            if j < n && self.greater(j, j + 1) {
                j += 1;
            }
            if !self.greater(k, j) {
                break;
            }
            self.keys.swap(k - 1, j - 1);
            k = j;
        }
    }

    // Is the subtree rooted at k a min-heap?
    fn is_min_heap(&self, k: usize) -> bool {
        let n = self.keys.len();
        if k > n {
            return true;
        }
        let (left, right) = (2 * k, 2 * k + 1);
        if left <= n && self.greater(k, left) {
            return false;
        }
        if right <= n && self.greater(k, right) {
            return false;
        }
        self.is_min_heap(left) && self.is_min_heap(right)
    }
}

impl<T, C: Compare<T>> Extend<T> for MinPq<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinPq<T> {
    // Bottom-up heapify in O(n)
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut pq = Self {
            keys: iter.into_iter().collect(),
            cmp: Natural,
        };
        for k in (1..=pq.keys.len() / 2).rev() {
            pq.sink(k);
        }
        debug_assert!(pq.is_min_heap(1));
        pq
    }
}
