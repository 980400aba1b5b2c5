use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::greeting::Greeting;

/// Durable storage of greetings. Ids are assigned by the store, never by callers.
#[async_trait]
pub trait GreetingRepository: Send + Sync {
    async fn save(&self, message: &str) -> Result<Greeting, ServiceError>;
    /// `Ok(None)` when no record has `id`; absence is not an error.
    async fn find_by_id(&self, id: i64) -> Result<Option<Greeting>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Greeting>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmGreetingRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmGreetingRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl GreetingRepository for SeaOrmGreetingRepository {
    async fn save(&self, message: &str) -> Result<Greeting, ServiceError> {
        Ok(models::greeting::create(&self.db, message).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Greeting>, ServiceError> {
        Ok(models::greeting::find(&self.db, id).await?)
    }

    async fn find_all(&self) -> Result<Vec<Greeting>, ServiceError> {
        Ok(models::greeting::list(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_repository_roundtrip() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = match get_db().await {
            Ok(db) => db,
            Err(e) => { eprintln!("skip: cannot connect to db: {}", e); return Ok(()); }
        };
        let repo = SeaOrmGreetingRepository::new(db);

        let saved = repo.save("Hello Sam").await?;
        assert_eq!(saved.message, "Hello Sam");

        let found = repo.find_by_id(saved.id).await?.unwrap();
        assert_eq!(found, saved);

        let all = repo.find_all().await?;
        assert!(all.iter().any(|g| g.id == saved.id && g.message == "Hello Sam"));

        assert!(repo.find_by_id(i64::MAX).await?.is_none());
        Ok(())
    }
}
