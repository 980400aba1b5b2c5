pub mod errors;
pub mod db;
pub mod greeting;

#[cfg(test)]
mod tests;
