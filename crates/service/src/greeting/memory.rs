use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::greeting::{repository::GreetingRepository, Greeting};

#[derive(Default)]
struct Inner {
    rows: Vec<Greeting>,
    next_id: i64,
}

/// Process-local greeting store.
///
/// Ids start at 1 and grow monotonically; rows are kept in insertion order.
/// Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryGreetingRepository {
    inner: RwLock<Inner>,
}

impl InMemoryGreetingRepository {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl GreetingRepository for InMemoryGreetingRepository {
    async fn save(&self, message: &str) -> Result<Greeting, ServiceError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let greeting = Greeting { id: inner.next_id, message: message.to_string() };
        inner.rows.push(greeting.clone());
        Ok(greeting)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Greeting>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.iter().find(|g| g.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Greeting>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.clone())
    }
}
