use crate::error::AppError;
use serde::Serialize;

/// Page size of the plan table.
pub const PLAN_PAGE_SIZE: usize = 5;
/// Page size of every other list.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Cuts page `page` (1-based; 0 is read as 1) out of `items`.
///
/// A page past the end comes back empty with the real totals.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Result<Page<T>, AppError> {
    if page_size == 0 {
        return Err(AppError::invalid_input("page size must be at least 1"));
    }

    let page = page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    Ok(Page {
        items: items[start..end].to_vec(),
        page,
        page_size,
        total,
        total_pages,
    })
}
