use std::sync::Arc;

use anyhow::{anyhow, Result};
use bounty_core::Msg;
use bounty_engine::{BoardStore, ReqwestApi};
use store_logging::store_info;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::render::render;

pub async fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(&cli.config)?;
    store_logging::initialize(
        config.log_destination,
        cli.log_level.into(),
        config.log_file.as_deref(),
    );
    store_info!("Loaded config from {:?}", cli.config);

    let scope = cli.scope()?;
    let criteria = cli.criteria(config.page_limit);
    let api = ReqwestApi::new(config.fetch_settings(cli.base_url.clone()))?;
    let mut store =
        BoardStore::new(Arc::new(api), criteria).with_proof_counts(config.annotate_proofs);

    store_info!("Loading {} ({} page(s))", scope, cli.pages.max(1));
    store.dispatch_and_settle(Msg::ScopeSelected(scope)).await;
    for _ in 1..cli.pages {
        if !store.view().can_load_more {
            break;
        }
        store.dispatch_and_settle(Msg::LoadMoreRequested).await;
    }

    let view = store.view();
    print!("{}", render(&view));
    store.dispose();

    match view.error {
        Some(error) => Err(anyhow!(error)),
        None => Ok(()),
    }
}
