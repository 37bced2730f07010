use crate::ListCache;

/// Page coordinates of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn first(limit: u32) -> Self {
        Self { page: 1, limit }
    }
}

pub fn next_page(current: PageRequest) -> PageRequest {
    PageRequest {
        page: current.page.saturating_add(1),
        limit: current.limit,
    }
}

/// Whether the UI should expose a "load more" affordance.
///
/// `last_limit` is the limit used by the request that produced the latest page.
pub fn should_offer_load_more<T>(cache: &ListCache<T>, last_limit: u32) -> bool {
    !cache.exhausted() && cache.items().len() >= last_limit as usize
}
