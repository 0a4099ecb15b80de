//! Cleaning and the end-to-end pipeline.
//!
//! - [`dedup`] - full-row duplicate removal
//! - [`pipeline`] - read, describe, deduplicate, write

pub mod dedup;
pub mod pipeline;

pub use dedup::{drop_duplicates, duplicated, DedupOutcome};
