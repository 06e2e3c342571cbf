//! # Sequence helpers
//!
//! Emptiness checks that take a single `next()` step, so they work on
//! single-pass sources without counting them, and [`Chunks`], a lazy
//! splitter into fixed-size groups.
//!
//! ```rust
//! use extkit::ext::iter::{IterExt, OptionIterExt};
//!
//! assert!(Vec::<i32>::new().is_empty_seq());
//! assert!(None::<Vec<i32>>.is_none_or_empty());
//!
//! let chunks: Vec<Vec<i32>> = (1..=5).chunked(2).unwrap().collect();
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use crate::utils::validation::ensure_positive;
use std::iter::{Fuse, FusedIterator};

pub trait IterExt: IntoIterator + Sized {
    fn is_empty_seq(self) -> bool {
        self.into_iter().next().is_none()
    }

    fn has_items(self) -> bool {
        !self.is_empty_seq()
    }

    /// Split into consecutive groups of `size` items; the last group may be shorter
    ///
    /// # Errors
    /// Returns [`ArgumentError::NotPositive`](crate::error::ArgumentError::NotPositive)
    /// when `size` is zero.
    fn chunked(self, size: usize) -> crate::Result<Chunks<Self::IntoIter>> {
        let size = ensure_positive("size", size)?;
        Ok(Chunks {
            inner: self.into_iter().fuse(),
            size,
        })
    }
}

impl<I: IntoIterator> IterExt for I {}

pub trait OptionIterExt {
    /// True for `None` or for a sequence with no items
    fn is_none_or_empty(self) -> bool;
}

impl<I: IntoIterator> OptionIterExt for Option<I> {
    fn is_none_or_empty(self) -> bool {
        self.is_none_or(|seq| seq.is_empty_seq())
    }
}

/// Lazy iterator over fixed-size groups of an underlying iterator.
///
/// Created by [`IterExt::chunked`]. Nothing is pulled from the source until
/// the next chunk is requested.
#[derive(Debug, Clone)]
pub struct Chunks<I: Iterator> {
    inner: Fuse<I>,
    size: usize,
}

impl<I: Iterator> Chunks<I> {
    pub fn chunk_size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.inner.next()?;
        let capacity = self.size.min(self.inner.size_hint().0.saturating_add(1));
        let mut chunk = Vec::with_capacity(capacity);
        chunk.push(first);
        chunk.extend(self.inner.by_ref().take(self.size - 1));
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

impl<I: Iterator> FusedIterator for Chunks<I> {}
