use anyhow::Result;
use log::{info, warn};

use crate::batch::{BatchDriver, RunSummary, Transform};
use crate::config::settings::DatabaseSettings;
use crate::database::{self, SqliteReclaimer, SqliteStore};
use crate::domain::RecordFilter;
use crate::pagination::PageSpec;
use crate::progress::format_duration;
use crate::store::RecordStore;

pub struct SweepOptions {
    pub database: DatabaseSettings,
    pub filter: RecordFilter,
    pub page: PageSpec,
    pub max_records: Option<usize>,
    pub dry_run: bool,
}

/// Wires config → pool → store → driver for one sweep over the database.
pub struct SweepService {
    options: SweepOptions,
}

impl SweepService {
    pub fn new(options: SweepOptions) -> Self {
        Self { options }
    }

    pub fn count(&self) -> Result<usize> {
        let mut store = self.open_store()?;
        Ok(store.count(&self.options.filter)?)
    }

    pub fn run(&self, transform: &mut dyn Transform) -> Result<RunSummary> {
        info!("=== Starting Content Sweep ===");
        info!("Target DB: {}", self.options.database.path);
        if self.options.dry_run {
            info!("Dry run: nothing will be written");
        }

        let mut store = self.open_store()?;
        let reclaimer = SqliteReclaimer::new(store.diagnostics());

        let mut driver = BatchDriver::new(
            self.options.filter.clone(),
            self.options.page.clone(),
        )?
        .with_reclaimer(Box::new(reclaimer))
        .with_dry_run(self.options.dry_run);

        if let Some(max) = self.options.max_records {
            driver = driver.with_max_records(max);
        }

        let summary = driver.run(&mut store, transform)?;
        self.report(&summary);
        Ok(summary)
    }

    fn open_store(&self) -> Result<SqliteStore> {
        let pool = database::create_pool(&self.options.database.path)?;
        let conn = database::get_connection(&pool)?;
        Ok(SqliteStore::new(conn))
    }

    fn report(&self, summary: &RunSummary) {
        info!(
            "  → Processed {} of {} matching records across {} pages",
            summary.processed, summary.total_matching, summary.pages
        );

        let suffix = if self.options.dry_run { " (dry run)" } else { "" };
        info!("  → {} records updated{}", summary.updated, suffix);

        if summary.cancelled {
            warn!("Run cancelled before completion");
        }

        info!("Total time: {}", format_duration(summary.elapsed));
        info!("=== Sweep Complete ===");
    }
}
