use std::path::PathBuf;

use anyhow::{bail, Result};
use bounty_core::{FilterCriteria, Scope, SortBy, SortDirection, StatusName};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "bounty-board")]
#[command(about = "Browse bounty listings through the paginated board cache", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Overrides `base_url` from the config file.
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long, value_enum, default_value = "board")]
    pub scope: ScopeKind,

    /// Workspace uuid (workspace, planner) or owner pubkey (person).
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long, default_value = "")]
    pub search: String,

    #[arg(long = "language")]
    pub languages: Vec<String>,

    #[arg(long = "status", value_parser = parse_status)]
    pub statuses: Vec<StatusName>,

    #[arg(long, value_enum, default_value = "created")]
    pub sort: SortArg,

    #[arg(long)]
    pub asc: bool,

    /// Page size; defaults to `page_limit` from the config file.
    #[arg(long)]
    pub limit: Option<u32>,

    /// Number of pages to load before printing.
    #[arg(long, default_value_t = 1)]
    pub pages: u32,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeKind {
    Board,
    Workspace,
    Planner,
    Person,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Created,
    Updated,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    pub fn scope(&self) -> Result<Scope> {
        let id = self.id.clone().filter(|id| !id.trim().is_empty());
        let scope = match (self.scope, id) {
            (ScopeKind::Board, _) => Scope::Board,
            (ScopeKind::Workspace, Some(id)) => Scope::Workspace(id),
            (ScopeKind::Planner, Some(id)) => Scope::Planner(id),
            (ScopeKind::Person, Some(id)) => Scope::Person(id),
            (kind, None) => bail!("--id is required for scope {kind:?}"),
        };
        Ok(scope)
    }

    pub fn criteria(&self, default_limit: u32) -> FilterCriteria {
        let sort_by = match self.sort {
            SortArg::Created => SortBy::Created,
            SortArg::Updated => SortBy::UpdatedAt,
            SortArg::Price => SortBy::Price,
        };
        let direction = if self.asc {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        let mut criteria = FilterCriteria::default()
            .with_limit(self.limit.unwrap_or(default_limit))
            .with_search(self.search.clone())
            .with_sort(sort_by, direction);
        for status in &self.statuses {
            criteria = criteria.with_status(*status, true);
        }
        for language in &self.languages {
            criteria = criteria.with_language(language.clone());
        }
        criteria
    }
}

fn parse_status(raw: &str) -> Result<StatusName, String> {
    StatusName::parse(raw).ok_or_else(|| {
        let known: Vec<_> = StatusName::ALL.iter().map(|s| s.as_str()).collect();
        format!("unknown status '{raw}', expected one of {}", known.join(", "))
    })
}
