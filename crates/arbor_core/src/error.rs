//! Error types for the genome codec.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenomeError {
    /// A genome needs at least the root gene.
    #[error("genome is empty")]
    Empty,

    /// A mask bit asked for a child after the last byte.
    #[error("genome truncated: gene {at} expects a child but no bytes remain")]
    Truncated { at: usize },

    /// The tree closed before the byte sequence ended.
    #[error("genome has trailing bytes: tree ends after {consumed} of {len} bytes")]
    TrailingBytes { consumed: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, GenomeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GenomeError::TrailingBytes {
            consumed: 2,
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "genome has trailing bytes: tree ends after 2 of 5 bytes"
        );
        assert_eq!(GenomeError::Empty.to_string(), "genome is empty");
    }
}
