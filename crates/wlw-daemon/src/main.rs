// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! wlw: the workspace lifecycle worker binary. Parses CLI flags (optionally
//! layered over a config file), wires the HTTP collaborators and the
//! placeholder storage/destroy/create/upgrade/backup/restore adapters, and
//! runs the control loop until SIGTERM/SIGINT.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod cli;
mod config;
mod shutdown;
mod stubs;
mod telemetry;

use std::sync::Arc;

use clap::Parser;
use tokio_util::sync::CancellationToken;

use wlw_engine::Runtime;
use wlw_wire::{FulltextClient, HttpAccountClient, TransactorClient};

use crate::cli::Cli;
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let console = cli.console;

    let config = Config::resolve(cli)?;
    telemetry::init(console);

    tracing::info!(
        region = %config.worker.region_or_default(),
        version = %config.worker.version,
        operation = %config.worker.operation,
        "wlw starting up"
    );

    let http = reqwest::Client::new();
    let account = Arc::new(HttpAccountClient::new(http.clone(), config.account_url.clone()));
    let transactor = Arc::new(TransactorClient::new(http.clone()));
    let fulltext = Arc::new(FulltextClient::new(http));

    let storage = Arc::new(stubs::storage_registry());
    let destroy = Arc::new(stubs::destroy_registry());
    let collaborators = Arc::new(stubs::UnimplementedCollaborators);

    let runtime = Runtime::new(
        config.worker,
        config.options,
        config.token,
        account,
        transactor,
        fulltext,
        storage,
        destroy,
        collaborators.clone(),
        collaborators.clone(),
        collaborators.clone(),
        collaborators,
    );

    let cancel = CancellationToken::new();
    shutdown::install(cancel.clone())?;

    runtime.run(cancel).await;

    tracing::info!("wlw stopped");
    Ok(())
}
