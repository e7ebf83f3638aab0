//! Knowledge-base chat engine.
//!
//! A query is matched lexically against the sentences of a small in-memory
//! corpus; the best sentences are turned into a short answer by a fixed set of
//! rules. The core in [`domain`] and [`application`] is synchronous and works
//! on value snapshots. [`api`] hosts it over HTTP and [`infrastructure`]
//! provides configuration and snapshot persistence.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
