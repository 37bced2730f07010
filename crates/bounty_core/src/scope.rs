use std::fmt;

/// Logical partition of the cache. Switching scope invalidates everything cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The unscoped public board.
    Board,
    /// Bounties owned by one workspace.
    Workspace(String),
    /// Planner cards of one workspace.
    Planner(String),
    /// Bounties created by one person (profile page).
    Person(String),
}

impl Scope {
    /// Planner lists key records by workspace and id.
    pub fn uses_composite_keys(&self) -> bool {
        matches!(self, Scope::Planner(_))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Board => write!(f, "board"),
            Scope::Workspace(id) => write!(f, "workspace:{id}"),
            Scope::Planner(id) => write!(f, "planner:{id}"),
            Scope::Person(pubkey) => write!(f, "person:{pubkey}"),
        }
    }
}
