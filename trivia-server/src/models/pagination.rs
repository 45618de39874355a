//! Page slicing for question listings

use serde::Deserialize;

/// Fixed number of records per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Requested page (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
}

impl Pagination {
    pub fn new(page: i64) -> Self {
        Self { page }
    }

    /// Build from a raw `page` query value.
    ///
    /// Missing or non-numeric values fall back to page 1. Numeric values
    /// are kept as-is, so page 0 and negative pages stay out of range.
    pub fn from_param(raw: Option<&str>) -> Self {
        let page = raw.and_then(|s| s.trim().parse().ok()).unwrap_or(1);
        Self { page }
    }

    /// Index of the first record on this page, or None when the page
    /// cannot hold any records.
    pub fn offset(&self) -> Option<usize> {
        if self.page < 1 {
            return None;
        }
        usize::try_from(self.page - 1)
            .ok()?
            .checked_mul(QUESTIONS_PER_PAGE)
    }

    pub fn limit(&self) -> usize {
        QUESTIONS_PER_PAGE
    }

    /// Borrow the `[(page-1)*10, page*10)` window of `items`.
    ///
    /// Out-of-range pages yield an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.offset() {
            Some(start) if start < items.len() => {
                let end = start.saturating_add(self.limit()).min(items.len());
                &items[start..end]
            }
            _ => &[],
        }
    }

    /// Owned variant of [`Pagination::slice`].
    pub fn paginate<T>(&self, items: Vec<T>) -> Vec<T> {
        match self.offset() {
            Some(start) if start < items.len() => {
                items.into_iter().skip(start).take(self.limit()).collect()
            }
            _ => Vec::new(),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Query parameters for pagination
///
/// `page` stays a string so a junk value coerces to the default instead of
/// failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::from_param(params.page.as_deref())
    }
}
