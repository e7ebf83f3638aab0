mod in_memory;
mod json_file;

pub use in_memory::InMemorySnapshotStore;
pub use json_file::{JsonSnapshotStore, CONVERSATION_FILE, CORPUS_FILE};
