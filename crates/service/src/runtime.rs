//! Store wiring at startup.
//!
//! Picks the greeting backend from `[database]` configuration and makes sure
//! the Postgres schema exists before the server takes traffic.

use std::sync::Arc;

use migration::MigratorTrait;
use models::db::{connect_with_config, test_connection, DatabaseConfig};
use tracing::info;

use crate::greeting::{
    memory::InMemoryGreetingRepository,
    repository::{GreetingRepository, SeaOrmGreetingRepository},
};

/// Build the greeting store described by `cfg`.
pub async fn build_repository(cfg: &configs::DatabaseConfig) -> anyhow::Result<Arc<dyn GreetingRepository>> {
    if cfg.is_in_memory() {
        info!(backend = "memory", "greeting store ready");
        return Ok(Arc::new(InMemoryGreetingRepository::new()));
    }
    let db = connect_with_config(&DatabaseConfig::from(cfg)).await?;
    test_connection(&db).await?;
    migration::Migrator::up(&db, None).await?;
    info!(backend = "postgres", "greeting store ready");
    Ok(Arc::new(SeaOrmGreetingRepository::new(db)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_url_builds_memory_store() -> Result<(), anyhow::Error> {
        let cfg = configs::DatabaseConfig { url: configs::MEMORY_URL.into(), ..Default::default() };
        let repo = build_repository(&cfg).await?;
        let saved = repo.save("Hello World").await?;
        assert_eq!(saved.id, 1);
        Ok(())
    }
}
