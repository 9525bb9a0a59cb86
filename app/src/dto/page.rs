use serde::{Deserialize, Serialize};

use crate::repos::PageSlice;

#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    pub page: u64,
    pub size: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn from_slice<M>(slice: PageSlice<M>, number: u64, size: u64, convert: impl FnMut(M) -> T) -> Self {
        Self {
            content: slice.items.into_iter().map(convert).collect(),
            number,
            size,
            total_elements: slice.total_items,
            total_pages: slice.total_pages,
        }
    }
}
