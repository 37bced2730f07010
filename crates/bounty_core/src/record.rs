use serde::{Deserialize, Serialize};

use crate::status::StatusSource;

pub type BountyId = u64;

/// Identity of a record inside one cached list.
///
/// Global and workspace listings key on the bounty id alone; planner cards are
/// keyed by workspace as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub workspace: Option<String>,
    pub id: BountyId,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BountyBody {
    pub id: BountyId,
    pub title: String,
    pub price: u64,
    pub paid: bool,
    pub completed: bool,
    pub payment_pending: bool,
    pub assignee: Option<String>,
    pub assignee_img: Option<String>,
    #[serde(rename = "pow")]
    pub proof_count: Option<u32>,
    pub coding_languages: Vec<String>,
    pub created: Option<i64>,
    pub workspace_uuid: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub id: Option<u64>,
    pub owner_pubkey: String,
    pub owner_alias: String,
    pub img: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub uuid: String,
    pub name: String,
    pub img: Option<String>,
}

/// A bounty as returned by the listing endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BountyRecord {
    #[serde(alias = "bounty")]
    pub body: BountyBody,
    #[serde(default, alias = "owner")]
    pub person: Option<Person>,
    #[serde(default)]
    pub organization: Option<Organization>,
    /// Set for lists that key records by workspace as well as id.
    #[serde(skip)]
    pub key_workspace: Option<String>,
}

impl BountyRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            workspace: self.key_workspace.clone(),
            id: self.body.id,
        }
    }
}

impl StatusSource for BountyRecord {
    fn paid(&self) -> bool {
        self.body.paid
    }

    fn completed(&self) -> bool {
        self.body.completed
    }

    fn payment_pending(&self) -> bool {
        self.body.payment_pending
    }

    fn proof_count(&self) -> Option<u32> {
        self.body.proof_count
    }

    fn has_assignee(&self) -> bool {
        is_present(&self.body.assignee) || is_present(&self.body.assignee_img)
    }
}

/// Planner card: the reduced record served by the bounty-cards endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BountyCard {
    pub id: BountyId,
    pub title: String,
    pub workspace_uuid: String,
    pub assignee_img: Option<String>,
    pub paid: bool,
    pub completed: bool,
    pub payment_pending: bool,
    #[serde(rename = "pow")]
    pub proof_count: Option<u32>,
}

impl From<BountyCard> for BountyRecord {
    fn from(card: BountyCard) -> Self {
        let workspace = card.workspace_uuid;
        BountyRecord {
            body: BountyBody {
                id: card.id,
                title: card.title,
                paid: card.paid,
                completed: card.completed,
                payment_pending: card.payment_pending,
                assignee_img: card.assignee_img,
                proof_count: card.proof_count,
                workspace_uuid: Some(workspace.clone()),
                ..BountyBody::default()
            },
            person: None,
            organization: None,
            key_workspace: Some(workspace),
        }
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
