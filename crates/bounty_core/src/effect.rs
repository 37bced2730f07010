use crate::{ApplyMode, FilterCriteria, Generation, PageRequest, Scope};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page of `scope`. `query` is the serialized `criteria`.
    FetchPage {
        generation: Generation,
        scope: Scope,
        criteria: FilterCriteria,
        query: String,
        mode: ApplyMode,
        request: PageRequest,
    },
}
