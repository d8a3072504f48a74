//! Compact per-line digests.
//!
//! Each line is reduced to a fixed 16-byte MD5 digest so the seen-set holds
//! 16 bytes per distinct line regardless of line length. Two distinct lines
//! hashing to the same digest are merged as duplicates; that probabilistic
//! risk is accepted in exchange for the bounded memory footprint.

use md5::{Digest, Md5};

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 16;

/// Fixed-size fingerprint of one line's bytes.
pub type LineDigest = [u8; DIGEST_LEN];

/// Digest a line's raw bytes, terminator included.
///
/// The terminator is part of the hashed bytes, so lines differing only in
/// ending style (`\n` vs `\r\n`, or a missing final newline) stay distinct.
#[inline]
pub fn line_digest(line: &[u8]) -> LineDigest {
    let mut hasher = Md5::new();
    hasher.update(line);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(line_digest(b"hello\n"), line_digest(b"hello\n"));
    }

    #[test]
    fn test_digest_differs_by_content() {
        assert_ne!(line_digest(b"hello\n"), line_digest(b"world\n"));
    }

    #[test]
    fn test_terminator_is_significant() {
        assert_ne!(line_digest(b"hello\n"), line_digest(b"hello"));
        assert_ne!(line_digest(b"hello\n"), line_digest(b"hello\r\n"));
    }

    #[test]
    fn test_known_md5() {
        // md5("") = d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(
            line_digest(b""),
            [
                0xd4, 0x1d, 0x8c, 0xd9, 0x8f, 0x00, 0xb2, 0x04, 0xe9, 0x80, 0x09, 0x98, 0xec,
                0xf8, 0x42, 0x7e
            ]
        );
    }
}
