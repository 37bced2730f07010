//! Bounty core: pure list-cache state machine, query building and status derivation.
mod cache;
mod effect;
mod error;
mod filter;
mod msg;
mod pagination;
mod record;
mod scope;
mod state;
mod status;
mod update;
mod view_model;

pub use cache::{ApplyMode, Generation, ListCache};
pub use effect::Effect;
pub use error::LoadError;
pub use filter::{
    build_query, FilterCriteria, LanguageSet, SortBy, SortDirection, StatusName,
    DEFAULT_PAGE_LIMIT,
};
pub use msg::Msg;
pub use pagination::{next_page, should_offer_load_more, PageRequest};
pub use record::{BountyBody, BountyCard, BountyId, BountyRecord, Organization, Person, RecordKey};
pub use scope::Scope;
pub use state::BoardState;
pub use status::{resolve_status, DerivedStatus, StatusSource};
pub use update::update;
pub use view_model::{BoardView, BountyRow};
