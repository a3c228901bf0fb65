pub mod schema;
pub mod snapshot;
pub mod store;
pub mod talent;

#[cfg(test)]
pub mod memory;
