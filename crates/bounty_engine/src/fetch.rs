use std::time::Duration;

use bounty_core::{BountyCard, BountyId, BountyRecord, PageRequest, Scope};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5002".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Remote bounty API consumed by the store.
#[async_trait::async_trait]
pub trait BountyApi: Send + Sync {
    /// Fetches one page of `scope`. `query` is the serialized filter criteria.
    async fn fetch_page(
        &self,
        scope: &Scope,
        query: &str,
        request: PageRequest,
    ) -> Result<Vec<BountyRecord>, FetchError>;

    /// Number of proofs submitted for a bounty.
    async fn fetch_proof_count(&self, id: BountyId) -> Result<u32, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestApi {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { base_url, client })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.canonical_reason().unwrap_or("unknown status"),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl BountyApi for ReqwestApi {
    async fn fetch_page(
        &self,
        scope: &Scope,
        query: &str,
        request: PageRequest,
    ) -> Result<Vec<BountyRecord>, FetchError> {
        let url = page_url(&self.base_url, scope, query, request)?;
        if let Scope::Planner(_) = scope {
            let cards: Option<Vec<BountyCard>> = self.get_json(url).await?;
            return Ok(cards
                .unwrap_or_default()
                .into_iter()
                .map(BountyRecord::from)
                .collect());
        }
        // The API answers an empty listing with `null`.
        let records: Option<Vec<BountyRecord>> = self.get_json(url).await?;
        Ok(records.unwrap_or_default())
    }

    async fn fetch_proof_count(&self, id: BountyId) -> Result<u32, FetchError> {
        let id = id.to_string();
        let url = endpoint(&self.base_url, &["gobounties", id.as_str(), "proofs"])?;
        let proofs: Option<Vec<serde_json::Value>> = self.get_json(url).await?;
        Ok(proofs.map_or(0, |proofs| proofs.len() as u32))
    }
}

/// Builds the listing URL for `scope`.
pub fn page_url(
    base: &Url,
    scope: &Scope,
    query: &str,
    request: PageRequest,
) -> Result<Url, FetchError> {
    let mut url = match scope {
        Scope::Board => endpoint(base, &["gobounties", "all"])?,
        Scope::Workspace(id) => endpoint(base, &["workspaces", "bounties", id.as_str()])?,
        Scope::Person(pubkey) => endpoint(base, &["people", "wanteds", "created", pubkey.as_str()])?,
        Scope::Planner(workspace) => {
            let mut url = endpoint(base, &["gobounties", "bounty-cards"])?;
            url.query_pairs_mut()
                .append_pair("workspace_uuid", workspace)
                .append_pair("page", &request.page.to_string())
                .append_pair("limit", &request.limit.to_string());
            return Ok(url);
        }
    };
    url.set_query((!query.is_empty()).then_some(query));
    Ok(url)
}

fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::new(FailureKind::InvalidUrl, "base url cannot be a base"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
