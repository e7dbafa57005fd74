use std::path::Path;

use anyhow::Result;
use log::info;

use crate::config::settings::DatabaseSettings;
use crate::database;

pub struct SetupService {
    database: DatabaseSettings,
}

impl SetupService {
    pub fn new(database: DatabaseSettings) -> Self {
        Self { database }
    }

    pub fn run(&self, seed_file: Option<&Path>) -> Result<()> {
        info!("=== Starting Database Setup ===");
        info!("Target DB: {}", self.database.path);

        let pool = database::create_pool(&self.database.path)?;
        let mut conn = database::get_connection(&pool)?;

        database::setup::reset_database(&mut conn)?;
        info!("  → Database schema reset");

        if let Some(path) = seed_file {
            let seeds = database::setup::load_seed_file(path)?;
            let inserted = database::setup::insert_seed_records(&mut conn, &seeds)?;
            info!("  → Imported {} seed records from {}", inserted, path.display());
        }

        info!("=== Setup Complete ===");
        Ok(())
    }
}
