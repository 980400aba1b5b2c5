pub mod memory;
pub mod repository;
pub mod service;

pub use models::greeting::Model as Greeting;
