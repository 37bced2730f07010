use std::collections::BTreeMap;

use crate::status::{resolve_status, DerivedStatus, StatusSource};
use crate::{LoadError, PageRequest, Scope};

/// Token identifying one outgoing request. Only the latest one may write to the cache.
pub type Generation = u64;

/// How a fetched page is written into the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Replace everything cached.
    Reset,
    /// Concatenate after what is cached.
    Append,
}

/// Ordered, paginated cache of one scope's records.
///
/// Appended pages are not deduplicated by record key: if the server returns
/// overlapping pages, the overlap shows up twice in `items`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListCache<T> {
    scope: Option<Scope>,
    items: Vec<T>,
    total: usize,
    page: u32,
    exhausted: bool,
    loading: bool,
    error: Option<String>,
    generation: Generation,
}

impl<T> Default for ListCache<T> {
    fn default() -> Self {
        Self {
            scope: None,
            items: Vec::new(),
            total: 0,
            page: 1,
            exhausted: false,
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> ListCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self) -> Option<&Scope> {
        self.scope.as_ref()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Writes a fetched page. `request` is the page/limit the page was fetched with.
    pub fn apply(&mut self, page: Vec<T>, mode: ApplyMode, request: PageRequest) {
        self.exhausted = page.len() < request.limit as usize;
        match mode {
            ApplyMode::Reset => {
                self.items = page;
                self.page = 1;
            }
            ApplyMode::Append => {
                self.items.extend(page);
                self.page = request.page;
            }
        }
        self.total = self.items.len();
        self.loading = false;
        self.error = None;
    }

    /// Records a failed load. Cached items stay as they were.
    pub fn fail(&mut self, error: &LoadError) {
        self.loading = false;
        self.error = Some(error.to_string());
    }

    /// Switches to `scope`, dropping everything cached.
    ///
    /// Returns `false` without touching any state when `scope` is already current;
    /// `true` means the caller must fetch page 1 of the new scope.
    pub fn reset_scope(&mut self, scope: Scope) -> bool {
        if self.scope.as_ref() == Some(&scope) {
            return false;
        }
        self.scope = Some(scope);
        self.clear();
        true
    }

    /// Marks a new request in flight and returns its generation.
    pub fn begin_request(&mut self) -> Generation {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation == self.generation
    }

    /// Tears the cache down. The generation keeps counting so late responses are dropped.
    pub fn dispose(&mut self) {
        self.scope = None;
        self.clear();
        self.generation += 1;
    }

    fn clear(&mut self) {
        self.items.clear();
        self.total = 0;
        self.page = 1;
        self.exhausted = false;
        self.loading = false;
        self.error = None;
    }
}

impl<T: StatusSource> ListCache<T> {
    pub fn items_with_status(&self, status: DerivedStatus) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| resolve_status(*item) == status)
            .collect()
    }

    pub fn todo_items(&self) -> Vec<&T> {
        self.items_with_status(DerivedStatus::Todo)
    }

    pub fn assigned_items(&self) -> Vec<&T> {
        self.items_with_status(DerivedStatus::Assigned)
    }

    pub fn review_items(&self) -> Vec<&T> {
        self.items_with_status(DerivedStatus::Review)
    }

    pub fn complete_items(&self) -> Vec<&T> {
        self.items_with_status(DerivedStatus::Complete)
    }

    pub fn paid_items(&self) -> Vec<&T> {
        self.items_with_status(DerivedStatus::Paid)
    }

    pub fn status_counts(&self) -> BTreeMap<DerivedStatus, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(resolve_status(item)).or_insert(0) += 1;
        }
        counts
    }
}
