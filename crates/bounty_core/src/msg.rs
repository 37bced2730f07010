use crate::{ApplyMode, BountyRecord, FilterCriteria, Generation, LoadError, PageRequest, Scope};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// A view mounted (or switched) onto a scope.
    ScopeSelected(Scope),
    /// User edited search, sort, status or language filters.
    FiltersChanged(FilterCriteria),
    /// User asked for the next page.
    LoadMoreRequested,
    /// Reload page 1 of the current scope.
    Refresh,
    /// A fetch issued by an `Effect::FetchPage` settled.
    PageLoaded {
        generation: Generation,
        mode: ApplyMode,
        request: PageRequest,
        result: Result<Vec<BountyRecord>, LoadError>,
    },
    /// The owning view unmounted.
    Disposed,
}
