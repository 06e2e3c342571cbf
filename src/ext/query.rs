//! One-based paging and conditional filtering

use crate::error::ArgumentError;
use crate::storage::config::Settings;
use crate::utils::validation::ensure_positive;
use std::iter::{FusedIterator, Skip, Take};

/// Iterator returned by [`QueryExt::page`]
pub type Page<I> = Take<Skip<I>>;

/// Number of items to skip to reach `page_number` (one-based)
fn page_offset(page_number: usize, page_size: usize) -> crate::Result<usize> {
    ensure_positive("page_number", page_number)?;
    ensure_positive("page_size", page_size)?;
    (page_number - 1).checked_mul(page_size).ok_or_else(|| {
        ArgumentError::OutOfRange {
            parameter: "page_number",
            value: page_number.to_string(),
        }
        .into()
    })
}

/// Total number of pages needed for `total` items; an empty source still has one page
///
/// # Examples
/// ```
/// use extkit::ext::query::page_count;
/// assert_eq!(page_count(25, 10).unwrap(), 3);
/// assert_eq!(page_count(0, 10).unwrap(), 1);
/// ```
pub fn page_count(total: usize, page_size: usize) -> crate::Result<usize> {
    let page_size = ensure_positive("page_size", page_size)?;
    Ok(total.div_ceil(page_size).max(1))
}

pub trait QueryExt: Iterator + Sized {
    /// Items of page `page_number` (starting at 1) with `page_size` items per page
    ///
    /// # Examples
    /// ```
    /// use extkit::ext::query::QueryExt;
    /// let second: Vec<u32> = (1..=25).page(2, 10).unwrap().collect();
    /// assert_eq!(second, (11..=20).collect::<Vec<_>>());
    /// ```
    fn page(self, page_number: usize, page_size: usize) -> crate::Result<Page<Self>> {
        let offset = page_offset(page_number, page_size)?;
        Ok(self.skip(offset).take(page_size))
    }

    /// Page using the configured default page size
    fn page_with_settings(
        self,
        page_number: usize,
        settings: &Settings,
    ) -> crate::Result<Page<Self>> {
        self.page(page_number, settings.page_size)
    }

    /// Filter by `predicate` only when `condition` holds
    fn where_if<P>(self, condition: bool, predicate: P) -> WhereIf<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        WhereIf {
            inner: self,
            predicate: condition.then_some(predicate),
        }
    }
}

impl<I: Iterator> QueryExt for I {}

pub trait SlicePageExt<T> {
    /// Borrow page `page_number` (starting at 1); pages past the end are empty
    fn page(&self, page_number: usize, page_size: usize) -> crate::Result<&[T]>;
}

impl<T> SlicePageExt<T> for [T] {
    fn page(&self, page_number: usize, page_size: usize) -> crate::Result<&[T]> {
        let start = page_offset(page_number, page_size)?.min(self.len());
        let end = start.saturating_add(page_size).min(self.len());
        Ok(&self[start..end])
    }
}

/// Iterator returned by [`QueryExt::where_if`]
#[derive(Debug, Clone)]
pub struct WhereIf<I, P> {
    inner: I,
    predicate: Option<P>,
}

impl<I, P> Iterator for WhereIf<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.predicate.as_mut() {
            Some(predicate) => self.inner.find(|item| predicate(item)),
            None => self.inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        match self.predicate {
            Some(_) => (0, upper),
            None => (lower, upper),
        }
    }
}

impl<I, P> FusedIterator for WhereIf<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}
