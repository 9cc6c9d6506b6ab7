use sea_orm::ItemsAndPagesNumber;

use crate::model::page::PaginationDto;

/// Metadata for one slice of a paginated query result.
///
/// Pages are 1-based; a page past the end of the result set is valid and
/// corresponds to an empty slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl Pagination {
    pub fn new(page: u64, per_page: u64, totals: ItemsAndPagesNumber) -> Self {
        Self {
            page,
            per_page,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn to_dto(self) -> PaginationDto {
        PaginationDto {
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_prev: self.has_prev(),
            has_next: self.has_next(),
        }
    }
}

/// Lenient page-number parsing for query strings.
///
/// Absent, non-numeric, or zero values all fall back to page 1 rather than
/// failing the request.
pub fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.parse::<u64>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}
