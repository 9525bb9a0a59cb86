pub mod comments;
pub mod tasks;
pub mod users;

/// One page of rows plus the totals needed to describe the whole listing.
#[derive(Debug, Clone)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub total_pages: u64,
}
