pub mod entities;
pub mod errors;
pub mod ports;
pub mod scoring;

pub use entities::*;
pub use errors::{DomainError, Result};
pub use scoring::SentenceScorer;
