//! Demo host for the action registry: reads action messages from stdin and
//! dispatches them to a small card game.
mod cli;
mod game;
mod runner;
mod source;

use std::io::Write;

use actionstore_core::{ActionStoreBuilder, Dispatcher, RegistryConfig, load_config};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::game::{SharedTable, register_actions};
use crate::source::LineSource;

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RegistryConfig::default(),
    };

    // (A) 起動時に全 Action を登録し、期待するコードが揃っているか確認
    let table = SharedTable::default();
    let store = register_actions(ActionStoreBuilder::from_config(&config), &table)
        .context("failed to register game actions")?
        .build()?;
    let dispatcher = Dispatcher::from(store);

    let mut stdout = std::io::stdout();
    if cli.list {
        for code in dispatcher.store().codes() {
            writeln!(stdout, "{code}")?;
        }
        return Ok(());
    }

    // (B) 1 行 1 メッセージを順に処理（前のメッセージが終わってから次へ）
    let mut source = LineSource::new(BufReader::new(tokio::io::stdin()));
    let summary = runner::run(&mut source, &dispatcher, &mut stdout).await?;

    // (C) 結果の要約
    let table = table.lock()?;
    writeln!(
        stdout,
        "done: ok={} bad={} failed={} | {}",
        summary.succeeded,
        summary.bad_commands,
        summary.failed,
        table.summary()
    )?;
    Ok(())
}

/// Logs go to stderr; stdout carries one result line per message.
fn setup_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
