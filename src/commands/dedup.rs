//! Streaming duplicate-line removal.
//!
//! Single pass over the input with O(distinct lines) memory:
//! - Chunked reads with memchr newline scanning (no per-line allocation)
//! - 16-byte digest per line instead of stored line contents
//! - First occurrences written verbatim, terminator included
//! - Later occurrences counted and dropped
//!
//! Two distinct lines hashing to the same digest are merged as duplicates;
//! that is an accepted probabilistic risk of the digest size and is not
//! detected or corrected.

use crate::digest::line_digest;
use crate::error::{open_error, DedupError, Result};
use crate::seen::SeenSet;
use memchr::memchr;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Buffer size for I/O operations (256KB for better throughput)
const BUF_SIZE: usize = 256 * 1024;

/// Streaming dedup command.
#[derive(Debug, Clone, Default)]
pub struct DedupCommand {
    /// Overwrite an existing output file in `run_paths`
    pub force: bool,
}

impl DedupCommand {
    pub fn new() -> Self {
        Self { force: false }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Run dedup from an input file into an output file.
    ///
    /// Input existence is checked before the output path is touched, so a
    /// missing input leaves no output file behind. An existing output is
    /// refused unless `force` is set.
    pub fn run_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<DedupStats> {
        let input = input.as_ref();
        if !input.exists() {
            return Err(DedupError::InputNotFound(input.to_path_buf()));
        }

        let mut out = create_output(output.as_ref(), self.force)?;
        self.run(input, &mut out)
    }

    /// Run dedup from an input file into an already-open writer.
    pub fn run<P: AsRef<Path>, W: Write>(&self, input_path: P, output: &mut W) -> Result<DedupStats> {
        let path = input_path.as_ref();
        let file = File::open(path).map_err(|e| open_error(path, e))?;
        self.run_reader(file, output)
    }

    /// Run dedup from stdin.
    pub fn run_stdin<W: Write>(&self, output: &mut W) -> Result<DedupStats> {
        let stdin = io::stdin();
        self.run_reader(stdin.lock(), output)
    }

    /// Core single-pass dedup over any reader.
    pub fn run_reader<R: Read, W: Write>(
        &self,
        mut reader: R,
        output: &mut W,
    ) -> Result<DedupStats> {
        let mut stats = DedupStats::default();
        let mut seen = SeenSet::new();
        let mut writer = BufWriter::with_capacity(BUF_SIZE, output);

        // Read buffer - we process in chunks
        let mut buf = vec![0u8; BUF_SIZE];
        let mut leftover: Vec<u8> = Vec::with_capacity(4096);
        let mut work_buf: Vec<u8> = Vec::with_capacity(BUF_SIZE + 4096);

        loop {
            let bytes_read = reader.read(&mut buf)?;
            if bytes_read == 0 {
                break;
            }

            // Combine leftover with new data into work buffer
            work_buf.clear();
            work_buf.extend_from_slice(&leftover);
            work_buf.extend_from_slice(&buf[..bytes_read]);
            leftover.clear();

            let data = work_buf.as_slice();
            let mut pos = 0;

            // Process complete lines, terminator included
            while let Some(newline_pos) = memchr(b'\n', &data[pos..]) {
                let line = &data[pos..pos + newline_pos + 1];
                pos += newline_pos + 1;
                process_line(line, &mut seen, &mut writer, &mut stats)?;
            }

            // Save incomplete line for next iteration
            if pos < data.len() {
                leftover.extend_from_slice(&data[pos..]);
            }
        }

        // Final line without a trailing newline
        if !leftover.is_empty() {
            process_line(&leftover, &mut seen, &mut writer, &mut stats)?;
        }

        writer.flush()?;
        Ok(stats)
    }
}

/// Digest one line and write it through if it is a first occurrence.
#[inline(always)]
fn process_line<W: Write>(
    line: &[u8],
    seen: &mut SeenSet,
    writer: &mut W,
    stats: &mut DedupStats,
) -> Result<()> {
    stats.lines_read += 1;
    if seen.insert(line_digest(line)) {
        writer.write_all(line)?;
        stats.unique += 1;
    } else {
        stats.duplicates += 1;
    }
    Ok(())
}

/// Create or truncate an output file, refusing to clobber without `force`.
pub fn create_output(path: &Path, force: bool) -> Result<File> {
    if !force && path.exists() {
        return Err(DedupError::OutputExists(path.to_path_buf()));
    }

    File::create(path).map_err(|e| match e.kind() {
        io::ErrorKind::PermissionDenied => DedupError::PermissionDenied(path.to_path_buf()),
        _ => DedupError::Io(e),
    })
}

/// Statistics from one dedup pass.
#[derive(Debug, Default, Clone)]
pub struct DedupStats {
    pub lines_read: u64,
    pub unique: u64,
    pub duplicates: u64,
}

impl DedupStats {
    pub fn duplicate_ratio(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            self.duplicates as f64 / self.lines_read as f64
        }
    }
}

impl std::fmt::Display for DedupStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Read: {}, Written: {}, Duplicates: {} ({:.1}% duplicate)",
            self.lines_read,
            self.unique,
            self.duplicates,
            self.duplicate_ratio() * 100.0
        )
    }
}
