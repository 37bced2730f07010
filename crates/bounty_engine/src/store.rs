use std::collections::VecDeque;
use std::sync::Arc;

use bounty_core::{update, BoardState, BoardView, Effect, FilterCriteria, LoadError, Msg};
use store_logging::{store_debug, store_info, store_warn};
use tokio::sync::watch;

use crate::proofs::annotate_proof_counts;
use crate::BountyApi;

/// Owns one board's state, executes its effects and publishes views.
///
/// Create one per mounted view and call [`BoardStore::dispose`] when it goes away.
pub struct BoardStore<A: BountyApi + ?Sized> {
    api: Arc<A>,
    state: BoardState,
    annotate_proofs: bool,
    view_tx: watch::Sender<BoardView>,
}

impl<A: BountyApi + ?Sized> BoardStore<A> {
    pub fn new(api: Arc<A>, criteria: FilterCriteria) -> Self {
        let state = BoardState::with_criteria(criteria);
        let (view_tx, _) = watch::channel(state.view());
        Self {
            api,
            state,
            annotate_proofs: true,
            view_tx,
        }
    }

    /// Whether fetched pages get their proof counts from the proofs endpoint.
    pub fn with_proof_counts(mut self, enabled: bool) -> Self {
        self.annotate_proofs = enabled;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<BoardView> {
        self.view_tx.subscribe()
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn view(&self) -> BoardView {
        self.state.view()
    }

    /// Applies `msg` and returns the effects the caller must run with [`BoardStore::execute`].
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        if let Msg::PageLoaded { generation, .. } = &msg {
            if !self.state.cache().is_current(*generation) {
                store_debug!(
                    "Dropping stale page generation={} current={}",
                    generation,
                    self.state.cache().generation()
                );
            }
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view_tx.send_replace(state.view());
        }
        self.state = state;
        effects
    }

    /// Runs one effect against the API. Failures come back as a settled message, never an error.
    pub async fn execute(&self, effect: Effect) -> Msg {
        match effect {
            Effect::FetchPage {
                generation,
                scope,
                query,
                mode,
                request,
                ..
            } => {
                store_info!(
                    "FetchPage scope={} generation={} mode={:?} query={}",
                    scope,
                    generation,
                    mode,
                    query
                );
                let result = match self.api.fetch_page(&scope, &query, request).await {
                    Ok(mut records) => {
                        if self.annotate_proofs {
                            annotate_proof_counts(self.api.as_ref(), &mut records).await;
                        }
                        Ok(records)
                    }
                    Err(err) => {
                        store_warn!("Page load for {} failed: {}", scope, err);
                        Err(LoadError::from(err))
                    }
                };
                Msg::PageLoaded {
                    generation,
                    mode,
                    request,
                    result,
                }
            }
        }
    }

    /// Dispatches `msg` and runs every resulting effect until the store is idle.
    pub async fn dispatch_and_settle(&mut self, msg: Msg) {
        let mut pending: VecDeque<Effect> = self.dispatch(msg).into();
        while let Some(effect) = pending.pop_front() {
            let msg = self.execute(effect).await;
            pending.extend(self.dispatch(msg));
        }
    }

    pub fn dispose(&mut self) {
        self.dispatch(Msg::Disposed);
    }
}
