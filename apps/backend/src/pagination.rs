//! Page arithmetic for list endpoints.
//!
//! `paginate` is pure: it never touches storage. Callers count the
//! collection, compute the window here, then fetch `offset`/`limit`.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("page must be at least 1")]
    InvalidPageNumber,
    #[error("page size must be at least 1")]
    InvalidPageSize,
}

/// Metadata returned alongside every page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_results: u64,
}

/// Slice bounds for one page plus its metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
    pub meta: PageMeta,
}

impl PageWindow {
    /// Number of items the window will hold given the total it was computed from.
    pub fn expected_len(&self) -> u64 {
        self.meta
            .total_results
            .saturating_sub(self.offset)
            .min(self.limit)
    }

    /// `(offset, limit)` to hand to storage, or `None` when the page is empty.
    ///
    /// Both values stay within the counted total, so they always fit the
    /// signed integers SQL drivers bind.
    pub fn fetch_bounds(&self) -> Option<(u64, u64)> {
        match self.expected_len() {
            0 => None,
            len => Some((self.offset, len)),
        }
    }
}

/// Validate caller page parameters. Run this before counting anything.
pub fn check_request(page: u64, size: u64) -> Result<(), PageError> {
    if page == 0 {
        return Err(PageError::InvalidPageNumber);
    }
    if size == 0 {
        return Err(PageError::InvalidPageSize);
    }
    Ok(())
}

/// Compute the window for a 1-based `page` of `size` items over `total` items.
///
/// Pages past the end are legal and produce an empty window.
pub fn paginate(total: u64, page: u64, size: u64) -> Result<PageWindow, PageError> {
    check_request(page, size)?;

    Ok(PageWindow {
        offset: (page - 1).saturating_mul(size),
        limit: size,
        meta: PageMeta {
            current_page: page,
            total_pages: total.div_ceil(size),
            total_results: total,
        },
    })
}

/// A page of results as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub current_result: u64,
    #[serde(flatten)]
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, meta: PageMeta) -> Self {
        Self {
            current_result: data.len() as u64,
            data,
            meta,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            current_result: self.current_result,
            meta: self.meta,
        }
    }
}
