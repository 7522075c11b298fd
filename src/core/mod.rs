pub mod registry;
pub mod summary;
