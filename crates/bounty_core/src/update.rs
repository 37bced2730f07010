use crate::pagination::next_page;
use crate::{ApplyMode, BoardState, Effect, FilterCriteria, Msg, PageRequest};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: BoardState, msg: Msg) -> (BoardState, Vec<Effect>) {
    let effects = match msg {
        Msg::ScopeSelected(scope) => {
            // Re-selecting the current scope must not refetch.
            if !state.cache_mut().reset_scope(scope.clone()) {
                return (state, Vec::new());
            }
            state.clear_applied();
            let request = PageRequest::first(state.criteria().effective_limit());
            vec![state.start_fetch(scope, ApplyMode::Reset, request)]
        }
        Msg::FiltersChanged(criteria) => {
            let criteria = FilterCriteria {
                page: 1,
                reset_page: true,
                ..criteria
            };
            // Unchanged filters still refetch when the cached items came from other
            // criteria and nothing is in flight, e.g. after the previous reset failed.
            let covered = state.cache().scope().is_none()
                || state.cache().loading()
                || state.shows_current_filters();
            if state.criteria().same_filters(&criteria) && covered {
                return (state, Vec::new());
            }
            let request = criteria.page_request();
            state.set_criteria(criteria);
            state.mark_dirty();
            match state.cache().scope().cloned() {
                Some(scope) => vec![state.start_fetch(scope, ApplyMode::Reset, request)],
                None => Vec::new(),
            }
        }
        Msg::LoadMoreRequested => {
            let Some(scope) = state.cache().scope().cloned() else {
                return (state, Vec::new());
            };
            let Some(last) = state.last_request() else {
                return (state, Vec::new());
            };
            if state.cache().loading() || !state.can_load_more() {
                return (state, Vec::new());
            }
            let request = next_page(PageRequest {
                page: state.cache().page(),
                limit: last.limit,
            });
            vec![state.start_fetch(scope, ApplyMode::Append, request)]
        }
        Msg::Refresh => {
            let Some(scope) = state.cache().scope().cloned() else {
                return (state, Vec::new());
            };
            let request = PageRequest::first(state.criteria().effective_limit());
            vec![state.start_fetch(scope, ApplyMode::Reset, request)]
        }
        Msg::PageLoaded {
            generation,
            mode,
            request,
            result,
        } => {
            // Responses to superseded requests are dropped without touching state.
            if !state.cache().is_current(generation) {
                return (state, Vec::new());
            }
            match result {
                Ok(items) => {
                    state.cache_mut().apply(items, mode, request);
                    state.record_applied(request);
                }
                Err(error) => state.cache_mut().fail(&error),
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::Disposed => {
            let limit = state.criteria().limit;
            state.cache_mut().dispose();
            state.set_criteria(FilterCriteria::default().with_limit(limit));
            state.clear_applied();
            state.mark_dirty();
            Vec::new()
        }
    };

    (state, effects)
}
