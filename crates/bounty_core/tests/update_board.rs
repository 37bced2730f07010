use std::sync::Once;

use bounty_core::{
    update, ApplyMode, BoardState, BountyBody, BountyRecord, Effect, FilterCriteria, LoadError,
    Msg, PageRequest, Scope, StatusName,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(store_logging::initialize_for_tests);
}

fn records(ids: impl IntoIterator<Item = u64>) -> Vec<BountyRecord> {
    ids.into_iter()
        .map(|id| BountyRecord {
            body: BountyBody {
                id,
                ..BountyBody::default()
            },
            ..BountyRecord::default()
        })
        .collect()
}

fn single_fetch(effects: &[Effect]) -> (u64, ApplyMode, PageRequest) {
    assert_eq!(effects.len(), 1, "expected exactly one fetch: {effects:?}");
    match &effects[0] {
        Effect::FetchPage {
            generation,
            mode,
            request,
            ..
        } => (*generation, *mode, *request),
    }
}

fn respond(state: BoardState, effects: &[Effect], ids: Vec<BountyRecord>) -> BoardState {
    let (generation, mode, request) = single_fetch(effects);
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            generation,
            mode,
            request,
            result: Ok(ids),
        },
    );
    assert!(effects.is_empty());
    state
}

fn board_with_limit(limit: u32) -> BoardState {
    BoardState::with_criteria(FilterCriteria::default().with_limit(limit))
}

#[test]
fn selecting_scope_fetches_first_page() {
    init_logging();
    let (mut state, effects) = update(board_with_limit(10), Msg::ScopeSelected(Scope::Board));

    let (_, mode, request) = single_fetch(&effects);
    assert_eq!(mode, ApplyMode::Reset);
    assert_eq!(request, PageRequest { page: 1, limit: 10 });
    assert!(state.view().loading);
    assert!(state.consume_dirty());
}

#[test]
fn reselecting_same_scope_does_not_fetch() {
    init_logging();
    let (state, effects) = update(
        board_with_limit(10),
        Msg::ScopeSelected(Scope::Workspace("ws".into())),
    );
    let mut state = respond(state, &effects, records(1..=3));
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut next, effects) = update(state, Msg::ScopeSelected(Scope::Workspace("ws".into())));
    assert!(effects.is_empty());
    assert_eq!(next, before);
    assert!(!next.consume_dirty());
}

#[test]
fn switching_scope_resets_and_refetches() {
    init_logging();
    let (state, effects) = update(
        board_with_limit(3),
        Msg::ScopeSelected(Scope::Workspace("a".into())),
    );
    let state = respond(state, &effects, records([1]));
    assert!(state.view().exhausted);

    let (state, effects) = update(state, Msg::ScopeSelected(Scope::Workspace("b".into())));
    let view = state.view();
    assert!(view.rows.is_empty());
    assert!(!view.exhausted);
    assert_eq!(view.scope, Some(Scope::Workspace("b".into())));
    assert_eq!(single_fetch(&effects).2, PageRequest { page: 1, limit: 3 });
}

#[test]
fn load_more_end_to_end() {
    init_logging();
    let (state, effects) = update(board_with_limit(10), Msg::ScopeSelected(Scope::Board));
    let state = respond(state, &effects, records(1..=10));
    let view = state.view();
    assert!(!view.exhausted);
    assert!(view.can_load_more);

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let (_, mode, request) = single_fetch(&effects);
    assert_eq!(mode, ApplyMode::Append);
    assert_eq!(request, PageRequest { page: 2, limit: 10 });

    let state = respond(state, &effects, records(11..=14));
    let view = state.view();
    assert_eq!(view.rows.len(), 14);
    assert_eq!(view.page, 2);
    assert!(view.exhausted);
    assert!(!view.can_load_more);

    let (_, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());
}

#[test]
fn load_more_is_ignored_while_loading() {
    init_logging();
    let (state, effects) = update(board_with_limit(2), Msg::ScopeSelected(Scope::Board));
    let state = respond(state, &effects, records([1, 2]));
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    assert_eq!(effects.len(), 1);

    let (_, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());
}

#[test]
fn stale_response_is_discarded() {
    init_logging();
    let (state, first) = update(board_with_limit(10), Msg::ScopeSelected(Scope::Board));
    let (state, second) = update(
        state,
        Msg::FiltersChanged(
            FilterCriteria::default()
                .with_limit(10)
                .with_status(StatusName::Open, true),
        ),
    );
    let (stale_generation, _, stale_request) = single_fetch(&first);

    let (state, _) = update(
        state,
        Msg::PageLoaded {
            generation: stale_generation,
            mode: ApplyMode::Reset,
            request: stale_request,
            result: Ok(records(1..=10)),
        },
    );
    assert!(state.view().rows.is_empty());
    assert!(state.view().loading);

    let state = respond(state, &second, records([42]));
    let keys: Vec<_> = state.view().rows.iter().map(|row| row.key.id).collect();
    assert_eq!(keys, vec![42]);
    assert!(!state.view().loading);
}

#[test]
fn filter_change_requests_first_page_with_reset_flag() {
    init_logging();
    let (state, effects) = update(board_with_limit(5), Msg::ScopeSelected(Scope::Board));
    let state = respond(state, &effects, records(1..=5));
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    let state = respond(state, &effects, records(6..=10));

    let criteria = FilterCriteria {
        page: 3,
        ..FilterCriteria::default().with_limit(5).with_search("api")
    };
    let (state, effects) = update(state, Msg::FiltersChanged(criteria.clone()));
    match &effects[..] {
        [Effect::FetchPage {
            query,
            mode,
            request,
            ..
        }] => {
            assert_eq!(*mode, ApplyMode::Reset);
            assert_eq!(*request, PageRequest { page: 1, limit: 5 });
            assert!(query.contains("page=1&"));
            assert!(query.contains("resetPage=true"));
            assert!(query.contains("search=api"));
        }
        other => panic!("unexpected effects {other:?}"),
    }
    assert!(state.criteria().reset_page);

    let (_, effects) = update(state, Msg::FiltersChanged(criteria));
    assert!(effects.is_empty());
}

#[test]
fn filters_before_scope_are_stored_without_fetching() {
    init_logging();
    let criteria = FilterCriteria::default().with_language("Rust");
    let (state, effects) = update(BoardState::new(), Msg::FiltersChanged(criteria));
    assert!(effects.is_empty());

    let (_, effects) = update(state, Msg::ScopeSelected(Scope::Board));
    match &effects[..] {
        [Effect::FetchPage { query, .. }] => assert!(query.ends_with("languages=Rust")),
        other => panic!("unexpected effects {other:?}"),
    }
}

#[test]
fn failure_keeps_items_and_surfaces_error() {
    init_logging();
    let (state, effects) = update(board_with_limit(2), Msg::ScopeSelected(Scope::Board));
    let state = respond(state, &effects, records([1, 2]));

    let (state, effects) = update(state, Msg::Refresh);
    let (generation, mode, request) = single_fetch(&effects);
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            generation,
            mode,
            request,
            result: Err(LoadError::Network("connection refused".into())),
        },
    );
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.rows.len(), 2);
    assert!(!view.loading);
    assert_eq!(
        view.error.as_deref(),
        Some("network error: connection refused")
    );
}

#[test]
fn dispose_drops_state_and_late_responses() {
    init_logging();
    let (state, effects) = update(board_with_limit(2), Msg::ScopeSelected(Scope::Board));
    let (state, _) = update(state, Msg::Disposed);
    let view = state.view();
    assert!(view.scope.is_none());
    assert!(!view.loading);

    let state = {
        let (generation, mode, request) = single_fetch(&effects);
        update(
            state,
            Msg::PageLoaded {
                generation,
                mode,
                request,
                result: Ok(records([1, 2])),
            },
        )
        .0
    };
    assert!(state.view().rows.is_empty());

    let (_, effects) = update(state, Msg::Refresh);
    assert!(effects.is_empty());
}

#[test]
fn failed_filter_change_blocks_load_more_until_refetched() {
    init_logging();
    let (state, effects) = update(board_with_limit(2), Msg::ScopeSelected(Scope::Board));
    let state = respond(state, &effects, records([1, 2]));
    assert!(state.view().can_load_more);

    let filtered = FilterCriteria::default().with_limit(2).with_search("api");
    let (state, effects) = update(state, Msg::FiltersChanged(filtered.clone()));
    let (generation, mode, request) = single_fetch(&effects);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            generation,
            mode,
            request,
            result: Err(LoadError::Network("connection reset".into())),
        },
    );
    let keys: Vec<_> = state.view().rows.iter().map(|row| row.key.id).collect();
    assert_eq!(keys, vec![1, 2]);
    assert!(!state.view().can_load_more);

    let (state, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());
    assert!(!state.view().loading);

    let (state, effects) = update(state, Msg::FiltersChanged(filtered));
    match &effects[..] {
        [Effect::FetchPage {
            query,
            mode,
            request,
            ..
        }] => {
            assert_eq!(*mode, ApplyMode::Reset);
            assert_eq!(*request, PageRequest { page: 1, limit: 2 });
            assert!(query.contains("search=api"));
        }
        other => panic!("unexpected effects {other:?}"),
    }

    let state = respond(state, &effects, records([90, 91]));
    assert!(state.view().can_load_more);
    let (_, effects) = update(state, Msg::LoadMoreRequested);
    match &effects[..] {
        [Effect::FetchPage {
            query,
            mode,
            request,
            ..
        }] => {
            assert_eq!(*mode, ApplyMode::Append);
            assert_eq!(*request, PageRequest { page: 2, limit: 2 });
            assert!(query.contains("search=api"));
        }
        other => panic!("unexpected effects {other:?}"),
    }
}
