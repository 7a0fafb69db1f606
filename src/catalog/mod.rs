pub mod dsl;
pub mod model;
pub mod query;
pub mod store;
