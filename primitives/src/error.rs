use thiserror::Error;

use crate::wire::INPUT_LEN;

/// Failure modes of the attestation entrypoints.
///
/// Both variants carry the offending value so callers can log or surface it
/// without re-deriving anything from the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttestationError {
    /// The raw request was not exactly one height word plus one hash.
    #[error("invalid input length: expected {INPUT_LEN} bytes, got {0}")]
    InvalidInputLength(usize),

    /// The store has no canonical header at the requested height.
    #[error("no header at height {0}")]
    HeaderNotFound(u64),
}
