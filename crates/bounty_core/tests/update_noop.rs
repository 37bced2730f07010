use bounty_core::{update, BoardState, Msg};

#[test]
fn refresh_without_scope_is_noop() {
    let state = BoardState::new();
    let (next, effects) = update(state.clone(), Msg::Refresh);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn load_more_without_scope_is_noop() {
    let state = BoardState::new();
    let (next, effects) = update(state.clone(), Msg::LoadMoreRequested);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
