//! Bounty engine: remote API access and effect execution for the board store.
mod fetch;
mod proofs;
mod store;
mod types;

pub use fetch::{page_url, BountyApi, FetchSettings, ReqwestApi};
pub use proofs::annotate_proof_counts;
pub use store::BoardStore;
pub use types::{FailureKind, FetchError};
