pub mod batch;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod pagination;
pub mod progress;
pub mod services;
pub mod store;
pub mod transforms;

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command, FieldArg, FilterArgs, PageArgs, StoreArgs};
use crate::config::settings::DatabaseSettings;
use crate::services::{SetupService, SweepOptions, SweepService};
use crate::transforms::{NormalizeWhitespace, TextReplace};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_setup(store: &StoreArgs, seed_file: Option<&Path>) -> Result<()> {
    let database = DatabaseSettings::resolve(store.database.as_deref());
    let service = SetupService::new(database);
    service.run(seed_file)
}

pub fn handle_count(store: &StoreArgs, filter: &FilterArgs) -> Result<()> {
    let service = SweepService::new(sweep_options(store, filter, None));
    let total = service.count()?;
    println!("{total}");
    Ok(())
}

pub fn handle_normalize(store: &StoreArgs, filter: &FilterArgs, page: &PageArgs) -> Result<()> {
    let mut transform = NormalizeWhitespace;
    run_sweep(store, filter, page, &mut transform)
}

#[allow(clippy::too_many_arguments)]
pub fn handle_replace(
    find: &str,
    replace: &str,
    field: FieldArg,
    regex: bool,
    store: &StoreArgs,
    filter: &FilterArgs,
    page: &PageArgs,
) -> Result<()> {
    let mut transform = if regex {
        TextReplace::pattern(find, replace, field.into())?
    } else {
        TextReplace::literal(find, replace, field.into())
    };
    run_sweep(store, filter, page, &mut transform)
}

fn run_sweep(
    store: &StoreArgs,
    filter: &FilterArgs,
    page: &PageArgs,
    transform: &mut dyn batch::Transform,
) -> Result<()> {
    let service = SweepService::new(sweep_options(store, filter, Some(page)));
    service.run(transform)?;
    Ok(())
}

fn sweep_options(
    store: &StoreArgs,
    filter: &FilterArgs,
    page: Option<&PageArgs>,
) -> SweepOptions {
    SweepOptions {
        database: DatabaseSettings::resolve(store.database.as_deref()),
        filter: filter.to_filter(),
        page: page.map(PageArgs::to_page_spec).unwrap_or_default(),
        max_records: page.and_then(|p| p.max_records),
        dry_run: page.is_some_and(|p| p.dry_run),
    }
}
