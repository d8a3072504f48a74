//! Generate synthetic line corpora with planted duplicates.
//!
//! This module provides the `linedup generate` command to create text files
//! with a known approximate duplicate fraction, for exercising and
//! benchmarking the dedup pass.
//!
//! Features:
//! - Deterministic reproducibility via seed
//! - Controlled duplicate fraction via a bounded re-emission pool
//! - Fresh lines carry a running id, so they are unique by construction

use crate::commands::dedup::create_output;
use crate::error::{DedupError, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Buffer size for corpus output (8MB for better throughput)
const BUF_SIZE: usize = 8 * 1024 * 1024;

/// Cap on the re-emission pool; bounds generator memory
const POOL_CAP: usize = 4096;

/// Configuration for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub output: PathBuf,
    pub lines: u64,
    pub duplicate_frac: f64,
    pub seed: u64,
    pub force: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("corpus.txt"),
            lines: 1_000_000,
            duplicate_frac: 0.2,
            seed: 42,
            force: false,
        }
    }
}

/// Statistics from generate operation.
#[derive(Debug, Default, Clone)]
pub struct GenerateStats {
    pub lines_written: u64,
    pub duplicates_planted: u64,
    pub elapsed_secs: f64,
}

impl std::fmt::Display for GenerateStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} lines ({} planted duplicates) in {:.1}s",
            self.lines_written, self.duplicates_planted, self.elapsed_secs
        )
    }
}

/// Synthetic corpus generator.
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    config: GenerateConfig,
}

impl GenerateCommand {
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    /// Generate the corpus file.
    pub fn run(&self) -> Result<GenerateStats> {
        if !(0.0..=1.0).contains(&self.config.duplicate_frac) {
            return Err(DedupError::InvalidArgument(format!(
                "duplicate fraction must be within 0..=1, got {}",
                self.config.duplicate_frac
            )));
        }

        let start = Instant::now();
        let file = create_output(&self.config.output, self.config.force)?;
        let mut writer = BufWriter::with_capacity(BUF_SIZE, file);

        let mut stats = self.write_corpus(&mut writer)?;
        writer.flush()?;

        stats.elapsed_secs = start.elapsed().as_secs_f64();
        Ok(stats)
    }

    /// Write the corpus into any writer (elapsed time filled in by `run`).
    pub fn write_corpus<W: Write>(&self, writer: &mut W) -> Result<GenerateStats> {
        let mut rng = SmallRng::seed_from_u64(self.config.seed);
        let mut stats = GenerateStats::default();
        let mut pool: Vec<String> = Vec::new();
        let mut next_id: u64 = 0;

        for _ in 0..self.config.lines {
            let plant_dup = !pool.is_empty() && rng.gen::<f64>() < self.config.duplicate_frac;

            if plant_dup {
                // Every pool entry was already written once, so re-emitting
                // one is always a true duplicate
                let idx = rng.gen_range(0..pool.len());
                writer.write_all(pool[idx].as_bytes())?;
                stats.duplicates_planted += 1;
            } else {
                let line = format!("{:016x}\t{:08}\n", rng.gen::<u64>(), next_id);
                next_id += 1;
                writer.write_all(line.as_bytes())?;

                if pool.len() < POOL_CAP {
                    pool.push(line);
                } else {
                    let slot = rng.gen_range(0..pool.len());
                    pool[slot] = line;
                }
            }

            stats.lines_written += 1;
        }

        Ok(stats)
    }
}
