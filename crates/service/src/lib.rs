//! Service layer for greetings.
//! - `greeting::repository` is the Store seam; SeaORM and in-memory backends implement it.
//! - `greeting::service` holds the greeting rules and delegates persistence to the Store.
//! - `runtime` wires a Store from configuration at startup.

pub mod errors;
pub mod greeting;
pub mod runtime;
#[cfg(test)]
pub mod test_support;

pub use greeting::{
    memory::InMemoryGreetingRepository,
    repository::{GreetingRepository, SeaOrmGreetingRepository},
    service::GreetingService,
};
