pub mod config;
pub mod snapshot_store;

pub use config::{AppConfig, Config, RetrievalConfig};
pub use snapshot_store::{InMemorySnapshotStore, JsonSnapshotStore};
