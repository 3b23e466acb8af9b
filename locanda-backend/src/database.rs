use crate::error::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

pub async fn setup_database(database_url: &str) -> Result<DatabaseConnection> {
    tracing::info!("🔗 Connecting to database: {}", database_url);

    // Configure connection options
    let mut opt = ConnectOptions::new(database_url.to_string());
    opt.max_connections(20)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(true);

    // Connect to database. The `locations` schema is owned externally,
    // so no migrations run here.
    let db = Database::connect(opt).await?;

    Ok(db)
}

// Helper functions for location queries
pub mod location_ops {
    use super::*;
    use locanda_entity::{location, prelude::*};
    use sea_orm::EntityTrait;

    /// Fetch every row of the `locations` table, in the order the
    /// database returns them.
    pub async fn list_locations(db: &DatabaseConnection) -> Result<Vec<location::Model>> {
        let locations = Location::find().all(db).await?;

        Ok(locations)
    }
}
