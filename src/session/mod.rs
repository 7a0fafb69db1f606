pub mod bootstrap;
pub mod engine;
pub mod snapshot;
