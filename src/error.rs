use thiserror::Error;

/// Errors produced while decoding a characteristic payload.
///
/// The Heart Rate Measurement format has no version field and no checksum,
/// so the only way a payload can be malformed is by ending before a field
/// its own flags byte promised.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ended before a mandatory or in-progress field could be
    /// fully read.
    #[error("buffer truncated: needed {needed} more byte(s), {remaining} remaining")]
    TruncatedBuffer { needed: usize, remaining: usize },
}
