//! Page slicing.
//!
//! Pages are 1-based. The slicer neither fails nor clamps: a page past the
//! end is simply empty. Moving back into range is the caller's call, see
//! [`clamp_page`].

use tracing::trace;

/// One page cut from an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Length of the whole ordered sequence.
    pub total_matched: usize,
    /// `ceil(total_matched / page_size)`, 0 when nothing matched.
    pub total_pages: usize,
}

/// Number of pages needed for `total` items, 0 when there are none.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if total == 0 {
        0
    } else {
        total.div_ceil(page_size.max(1))
    }
}

/// Moves `page` into `[1, total_pages]`; 1 when there are no pages.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Cuts `ordered[(page-1)*page_size .. page*page_size]`.
///
/// A page index of 0 is read as page 1 and a page size of 0 as 1.
pub fn paginate<T>(ordered: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_matched = ordered.len();
    let start = (page - 1).saturating_mul(page_size);

    let items: Vec<T> = if start >= total_matched {
        Vec::new()
    } else {
        ordered.into_iter().skip(start).take(page_size).collect()
    };

    trace!(page, page_size, start, shown = items.len(), total_matched, "paginated");
    Page {
        items,
        total_matched,
        total_pages: total_pages(total_matched, page_size),
    }
}
