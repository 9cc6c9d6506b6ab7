use serde::{Deserialize, Serialize};

/// Navigation metadata for a paginated view
#[derive(Clone, Copy, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaginationDto {
    /// 1-based page number of the returned slice
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
}
