//! Primitives for serving light-client header attestations.
//!
//! A request names a block height and the header hash the requester expects
//! to find there; the response is the canonical header at that height in a
//! fixed 288-byte layout. Everything here is stateless and synchronous: one
//! decode, one store lookup, one encode, no retries and no partial output.

pub mod error;
pub mod store;
pub mod types;
pub mod wire;

pub use error::AttestationError;
pub use store::{HeaderStore, InMemoryHeaderStore};
pub use types::{AttestationRequest, HeaderRecord};
pub use wire::{
    decode_input, encode_header, encode_header_record, encode_input, EncodedHeader,
    ENCODED_HEADER_LEN, INPUT_LEN,
};

/// Serves one attestation request against `store`.
///
/// Decodes `input`, looks up the canonical header at the requested height and
/// returns its 288-byte wire form. The expected hash inside the request is
/// surfaced by [`decode_input`] but deliberately not compared against the
/// stored header here: the caller holds both sides and applies its own policy
/// on mismatch.
pub fn attest<S: HeaderStore>(input: &[u8], store: &S) -> Result<EncodedHeader, AttestationError> {
    let request = decode_input(input)?;
    encode_header(store, request.height)
}
