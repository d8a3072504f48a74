//! linedup: streaming duplicate-line removal.
//!
//! This library removes duplicate lines from large text files in a single
//! pass, tracking a compact 16-byte digest per distinct line instead of the
//! line contents themselves.
//!
//! # Features
//!
//! - **Streaming I/O**: one pass, memory bounded by the number of distinct
//!   lines (16 bytes each), never by file size
//! - **Verbatim output**: first occurrences are written byte-for-byte in
//!   input order, line terminators included
//! - **Byte-transparent**: no decoding; any line-oriented encoding works
//!
//! # Example
//!
//! ```rust,no_run
//! use linedup::commands::DedupCommand;
//!
//! let cmd = DedupCommand::new();
//! let stdout = std::io::stdout();
//! let mut handle = stdout.lock();
//! let stats = cmd.run("input.txt", &mut handle).unwrap();
//! eprintln!("{}", stats);
//! ```

pub mod commands;
pub mod digest;
pub mod error;
pub mod seen;

// Re-export commonly used types
pub use commands::{DedupCommand, DedupStats};
pub use digest::{line_digest, LineDigest, DIGEST_LEN};
pub use error::{DedupError, Result};
pub use seen::SeenSet;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::commands::{
        DedupCommand, DedupStats, GenerateCommand, GenerateConfig, GenerateStats,
    };
    pub use crate::digest::{line_digest, LineDigest};
    pub use crate::error::{DedupError, Result};
    pub use crate::seen::SeenSet;
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_workflow() {
        use crate::commands::DedupCommand;

        let input = b"a\nb\na\nc\nb\n";
        let cmd = DedupCommand::new();
        let mut output = Vec::new();

        let stats = cmd.run_reader(&input[..], &mut output).unwrap();

        assert_eq!(output, b"a\nb\nc\n");
        assert_eq!(stats.unique, 3);
        assert_eq!(stats.duplicates, 2);
    }

    #[test]
    fn test_generate_dedup_workflow() {
        use crate::commands::{DedupCommand, GenerateCommand, GenerateConfig};

        let config = GenerateConfig {
            lines: 1000,
            duplicate_frac: 0.4,
            seed: 11,
            ..GenerateConfig::default()
        };
        let mut corpus = Vec::new();
        let gen_stats = GenerateCommand::new(config)
            .write_corpus(&mut corpus)
            .unwrap();

        let mut output = Vec::new();
        let stats = DedupCommand::new()
            .run_reader(&corpus[..], &mut output)
            .unwrap();

        assert_eq!(stats.lines_read, 1000);
        assert_eq!(stats.duplicates, gen_stats.duplicates_planted);
        assert_eq!(stats.unique + stats.duplicates, stats.lines_read);
    }
}
