//! Page slicing.

use crate::error::{PipelineError, Result};
use serde::Serialize;

/// One page of a (filtered, sorted) listing plus aggregate counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page number this page was requested as
    pub page: usize,
    pub page_size: usize,
    /// `ceil(total_items / page_size)`, zero for an empty listing
    pub total_pages: usize,
    /// Number of items across all pages
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice `items` into the requested page.
///
/// `page` is 1-indexed. Asking for a page past the end yields an empty page
/// rather than an error, and the page number is not clamped; resetting to a
/// valid page is up to the caller.
///
/// # Errors
/// * [`PipelineError::InvalidPageSize`] if `page_size` is zero
/// * [`PipelineError::InvalidPage`] if `page` is zero
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Result<Page<T>> {
    if page_size == 0 {
        return Err(PipelineError::InvalidPageSize(page_size));
    }
    if page == 0 {
        return Err(PipelineError::InvalidPage(page));
    }

    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let page_items: Vec<T> = match (page - 1).checked_mul(page_size) {
        Some(start) if start < total_items => {
            items.into_iter().skip(start).take(page_size).collect()
        }
        _ => Vec::new(),
    };

    Ok(Page {
        items: page_items,
        page,
        page_size,
        total_pages,
        total_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(items, 3, 12).unwrap();

        assert_eq!(page.items, vec![25]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 25);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_first_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(items, 1, 12).unwrap();

        assert_eq!(page.items, (1..=12).collect::<Vec<_>>());
        assert!(!page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(items, 7, 12).unwrap();

        assert!(page.is_empty());
        assert_eq!(page.page, 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 25);
    }

    #[test]
    fn test_empty_listing_has_zero_pages() {
        let page = paginate(Vec::<u32>::new(), 1, 12).unwrap();
        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_exact_multiple() {
        let page = paginate((0..24).collect::<Vec<u32>>(), 2, 12).unwrap();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 12);
    }

    #[test]
    fn test_rejects_degenerate_input() {
        assert_eq!(
            paginate(vec![1, 2, 3], 1, 0),
            Err(PipelineError::InvalidPageSize(0))
        );
        assert_eq!(paginate(vec![1, 2, 3], 0, 10), Err(PipelineError::InvalidPage(0)));
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let page = paginate(vec![1, 2, 3], usize::MAX, 2).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_pages_cover_every_item_once() {
        for len in 0..40usize {
            for size in 1..15usize {
                let items: Vec<usize> = (0..len).collect();
                let total_pages = paginate(items.clone(), 1, size).unwrap().total_pages;
                assert_eq!(total_pages, len.div_ceil(size));

                let mut seen = Vec::new();
                for p in 1..=total_pages {
                    seen.extend(paginate(items.clone(), p, size).unwrap().items);
                }
                assert_eq!(seen, items);
            }
        }
    }
}
