use std::sync::Arc;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::greeting::{repository::GreetingRepository, Greeting};

const DEFAULT_GREETING: &str = "Hello World";

/// Treats a missing value and an empty string the same way.
fn present(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

/// Greeting rules plus delegation to the Store.
/// Errors from the Store are passed through untouched.
pub struct GreetingService {
    repo: Arc<dyn GreetingRepository>,
}

impl GreetingService {
    pub fn new(repo: Arc<dyn GreetingRepository>) -> Self { Self { repo } }

    pub fn default_greeting(&self) -> String {
        DEFAULT_GREETING.to_string()
    }

    /// Full name wins, then first name alone, then last name alone, then the default.
    pub fn format_greeting(&self, first_name: Option<&str>, last_name: Option<&str>) -> String {
        match (present(first_name), present(last_name)) {
            (Some(first), Some(last)) => format!("Hello {first} {last}"),
            (Some(first), None) => format!("Hello {first}"),
            (None, Some(last)) => format!("Hello {last}"),
            (None, None) => self.default_greeting(),
        }
    }

    /// "Hello {name}" for a non-empty name, the default greeting otherwise.
    pub fn compose_named(&self, name: Option<&str>) -> String {
        match present(name) {
            Some(name) => format!("Hello {name}"),
            None => self.default_greeting(),
        }
    }

    #[instrument(skip(self, name))]
    pub async fn create_and_store(&self, name: Option<&str>) -> Result<Greeting, ServiceError> {
        let message = self.compose_named(name);
        let saved = self.repo.save(&message).await?;
        info!(id = saved.id, "greeting saved");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn fetch_by_id(&self, id: i64) -> Result<Option<Greeting>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Greeting>, ServiceError> {
        self.repo.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeting::memory::InMemoryGreetingRepository;

    fn service() -> GreetingService {
        GreetingService::new(Arc::new(InMemoryGreetingRepository::new()))
    }

    #[test]
    fn default_greeting_is_hello_world() {
        assert_eq!(service().default_greeting(), "Hello World");
    }

    #[test]
    fn format_greeting_priority() {
        let s = service();
        assert_eq!(s.format_greeting(Some("Jane"), Some("Doe")), "Hello Jane Doe");
        assert_eq!(s.format_greeting(Some("Jane"), Some("")), "Hello Jane");
        assert_eq!(s.format_greeting(Some("Jane"), None), "Hello Jane");
        assert_eq!(s.format_greeting(Some(""), Some("Doe")), "Hello Doe");
        assert_eq!(s.format_greeting(None, Some("Doe")), "Hello Doe");
        assert_eq!(s.format_greeting(Some(""), Some("")), "Hello World");
        assert_eq!(s.format_greeting(None, None), "Hello World");
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert_eq!(service().format_greeting(Some(" "), None), "Hello  ");
    }

    #[test]
    fn compose_named_falls_back_to_world() {
        let s = service();
        assert_eq!(s.compose_named(Some("Sam")), "Hello Sam");
        assert_eq!(s.compose_named(Some("")), "Hello World");
        assert_eq!(s.compose_named(None), "Hello World");
    }

    #[tokio::test]
    async fn create_and_store_persists_message() -> Result<(), anyhow::Error> {
        let s = service();
        let sam = s.create_and_store(Some("Sam")).await?;
        assert_eq!(sam.message, "Hello Sam");
        let world = s.create_and_store(None).await?;
        assert_eq!(world.message, "Hello World");
        assert_ne!(sam.id, world.id);

        assert_eq!(s.fetch_by_id(sam.id).await?, Some(sam.clone()));
        assert_eq!(s.fetch_all().await?, vec![sam, world]);
        Ok(())
    }

    #[tokio::test]
    async fn fetch_by_id_unknown_is_none() -> Result<(), anyhow::Error> {
        assert!(service().fetch_by_id(42).await?.is_none());
        Ok(())
    }
}
