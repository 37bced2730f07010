use crate::filter::build_query;
use crate::pagination::should_offer_load_more;
use crate::status::resolve_status;
use crate::view_model::{BoardView, BountyRow};
use crate::{ApplyMode, BountyRecord, Effect, FilterCriteria, ListCache, PageRequest, Scope};

/// Store state for one mounted board view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardState {
    cache: ListCache<BountyRecord>,
    criteria: FilterCriteria,
    last_request: Option<PageRequest>,
    applied_criteria: Option<FilterCriteria>,
    dirty: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    pub fn cache(&self) -> &ListCache<BountyRecord> {
        &self.cache
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Page coordinates of the request that produced the latest applied page.
    pub fn last_request(&self) -> Option<PageRequest> {
        self.last_request
    }

    /// Filters the cached items were fetched under.
    pub fn applied_criteria(&self) -> Option<&FilterCriteria> {
        self.applied_criteria.as_ref()
    }

    /// Whether the cached items match the current filters.
    pub fn shows_current_filters(&self) -> bool {
        self.applied_criteria
            .as_ref()
            .is_some_and(|applied| applied.same_filters(&self.criteria))
    }

    /// Load more is only offered on top of items fetched with the current filters.
    pub fn can_load_more(&self) -> bool {
        self.shows_current_filters()
            && self
                .last_request
                .is_some_and(|request| should_offer_load_more(&self.cache, request.limit))
    }

    pub fn view(&self) -> BoardView {
        let rows = self
            .cache
            .items()
            .iter()
            .map(|record| BountyRow {
                key: record.key(),
                title: record.body.title.clone(),
                price: record.body.price,
                status: resolve_status(record),
                languages: record.body.coding_languages.clone(),
                owner: record
                    .person
                    .as_ref()
                    .map(|person| person.owner_alias.clone())
                    .filter(|alias| !alias.is_empty()),
            })
            .collect();
        BoardView {
            scope: self.cache.scope().cloned(),
            rows,
            total: self.cache.total(),
            page: self.cache.page(),
            exhausted: self.cache.exhausted(),
            loading: self.cache.loading(),
            error: self.cache.error().map(ToOwned::to_owned),
            can_load_more: self.can_load_more(),
            status_counts: self.cache.status_counts(),
        }
    }

    /// Returns whether anything observable changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn cache_mut(&mut self) -> &mut ListCache<BountyRecord> {
        &mut self.cache
    }

    pub(crate) fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// Records that a page fetched under the current criteria was applied.
    pub(crate) fn record_applied(&mut self, request: PageRequest) {
        self.last_request = Some(request);
        self.applied_criteria = Some(self.criteria.clone());
    }

    pub(crate) fn clear_applied(&mut self) {
        self.last_request = None;
        self.applied_criteria = None;
    }

    /// Issues a new request generation and describes the fetch for it.
    pub(crate) fn start_fetch(
        &mut self,
        scope: Scope,
        mode: ApplyMode,
        request: PageRequest,
    ) -> Effect {
        let generation = self.cache.begin_request();
        let mut criteria = self.criteria.at_page(request);
        criteria.reset_page = mode == ApplyMode::Reset;
        let query = build_query(&criteria);
        self.mark_dirty();
        Effect::FetchPage {
            generation,
            scope,
            criteria,
            query,
            mode,
            request,
        }
    }
}
