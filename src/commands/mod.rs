//! Command implementations for linedup.

pub mod dedup;
pub mod generate;

pub use dedup::{create_output, DedupCommand, DedupStats};
pub use generate::{GenerateCommand, GenerateConfig, GenerateStats};
