use std::collections::BTreeMap;

use crate::{DerivedStatus, RecordKey, Scope};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardView {
    pub scope: Option<Scope>,
    pub rows: Vec<BountyRow>,
    pub total: usize,
    pub page: u32,
    pub exhausted: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub can_load_more: bool,
    pub status_counts: BTreeMap<DerivedStatus, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BountyRow {
    pub key: RecordKey,
    pub title: String,
    pub price: u64,
    pub status: DerivedStatus,
    pub languages: Vec<String>,
    pub owner: Option<String>,
}
