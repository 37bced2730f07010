use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::PageRequest;

pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Status filters understood by the listing endpoints.
///
/// Declaration order is the order the flags are serialized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusName {
    Open,
    Assigned,
    Completed,
    Paid,
    Pending,
    Failed,
}

impl StatusName {
    pub const ALL: [StatusName; 6] = [
        StatusName::Open,
        StatusName::Assigned,
        StatusName::Completed,
        StatusName::Paid,
        StatusName::Pending,
        StatusName::Failed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusName::Open => "Open",
            StatusName::Assigned => "Assigned",
            StatusName::Completed => "Completed",
            StatusName::Paid => "Paid",
            StatusName::Pending => "Pending",
            StatusName::Failed => "Failed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Created,
    UpdatedAt,
    Price,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Created => "created",
            SortBy::UpdatedAt => "updated_at",
            SortBy::Price => "price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Insertion-ordered set of language names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageSet {
    items: Vec<String>,
}

impl LanguageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a language; returns false if it was already present or blank.
    pub fn insert(&mut self, language: impl Into<String>) -> bool {
        let language = language.into().trim().to_string();
        if language.is_empty() || self.items.contains(&language) {
            return false;
        }
        self.items.push(language);
        true
    }

    pub fn remove(&mut self, language: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item != language);
        self.items.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn joined(&self) -> String {
        self.items.join(",")
    }
}

impl<S: Into<String>> FromIterator<S> for LanguageSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = LanguageSet::new();
        for language in iter {
            set.insert(language);
        }
        set
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub sort_by: SortBy,
    pub direction: SortDirection,
    pub reset_page: bool,
    pub status_flags: BTreeMap<StatusName, bool>,
    pub languages: LanguageSet,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            search: String::new(),
            sort_by: SortBy::default(),
            direction: SortDirection::default(),
            reset_page: false,
            status_flags: BTreeMap::new(),
            languages: LanguageSet::new(),
        }
    }
}

impl FilterCriteria {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy, direction: SortDirection) -> Self {
        self.sort_by = sort_by;
        self.direction = direction;
        self
    }

    pub fn with_status(mut self, status: StatusName, enabled: bool) -> Self {
        self.status_flags.insert(status, enabled);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.languages.insert(language);
        self
    }

    /// Page the request should target; `reset_page` always means page 1.
    pub fn effective_page(&self) -> u32 {
        if self.reset_page {
            1
        } else {
            self.page.max(1)
        }
    }

    pub fn effective_limit(&self) -> u32 {
        self.limit.max(1)
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.effective_page(),
            limit: self.effective_limit(),
        }
    }

    /// Same filters, pointed at `request`.
    pub fn at_page(&self, request: PageRequest) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            reset_page: false,
            ..self.clone()
        }
    }

    pub fn enabled_statuses(&self) -> impl Iterator<Item = StatusName> + '_ {
        self.status_flags
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| *name)
    }

    /// Compares criteria while ignoring page position.
    pub fn same_filters(&self, other: &FilterCriteria) -> bool {
        self.limit == other.limit
            && self.search == other.search
            && self.sort_by == other.sort_by
            && self.direction == other.direction
            && self.languages == other.languages
            && self.enabled_statuses().eq(other.enabled_statuses())
    }
}

/// Serializes filter state into the query string shared by the listing endpoints.
///
/// Output has no leading `?` and a fixed parameter order, so identical
/// criteria always produce identical strings.
pub fn build_query(criteria: &FilterCriteria) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("page", &criteria.effective_page().to_string())
        .append_pair("limit", &criteria.effective_limit().to_string())
        .append_pair("sortBy", criteria.sort_by.as_str())
        .append_pair("direction", criteria.direction.as_str())
        .append_pair("search", &criteria.search);
    if criteria.reset_page {
        query.append_pair("resetPage", "true");
    }
    for status in criteria.enabled_statuses() {
        query.append_pair(status.as_str(), "true");
    }
    if !criteria.languages.is_empty() {
        query.append_pair("languages", &criteria.languages.joined());
    }
    query.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_name_parse_ignores_case() {
        assert_eq!(StatusName::parse("open"), Some(StatusName::Open));
        assert_eq!(StatusName::parse(" PAID "), Some(StatusName::Paid));
        assert_eq!(StatusName::parse("unknown"), None);
    }

    #[test]
    fn language_set_keeps_first_position() {
        let set: LanguageSet = ["Rust", "Go", "Rust", " ", "Python"].into_iter().collect();
        assert_eq!(set.joined(), "Rust,Go,Python");
    }

    #[test]
    fn zero_limit_degrades_to_one() {
        let criteria = FilterCriteria::default().with_limit(0);
        assert_eq!(criteria.effective_limit(), 1);
    }
}
