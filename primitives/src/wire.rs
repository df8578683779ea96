//! Binary wire layout for attestation requests and attested headers.
//!
//! Both sides of the contract are sequences of 32-byte words in the Solidity
//! ABI style; the tuple schemas in [`crate::types`] describe the same layout
//! for on-chain consumers. Offsets are part of the public contract and must
//! not move without a format version.
//!
//! ```text
//! Request (64 bytes):
//!   0..32    height, big-endian; value in the low 8 bytes (24..32)
//!   32..64   expected header hash
//!
//! Attested header (288 bytes):
//!   0..32    parent hash
//!   32..64   uncle-set hash
//!   64..96   coinbase address, right-aligned (64..76 zero)
//!   96..128  difficulty, low 8 bytes big-endian (96..120 zero)
//!   128..160 block number, low 8 bytes big-endian
//!   160..192 gas limit, low 8 bytes big-endian
//!   192..224 gas used, low 8 bytes big-endian
//!   224..256 timestamp, low 8 bytes big-endian
//!   256..288 proof nonce (256..264), zero-padded to the word
//! ```

use alloy::primitives::B256;

use crate::error::AttestationError;
use crate::store::HeaderStore;
use crate::types::{AttestationRequest, HeaderRecord};

/// Length in bytes of a well-formed attestation request.
pub const INPUT_LEN: usize = 64;

/// Length in bytes of an encoded header.
pub const ENCODED_HEADER_LEN: usize = 288;

/// A fully serialized header, ready to hand to a verifier.
pub type EncodedHeader = [u8; ENCODED_HEADER_LEN];

/// Parses a raw 64-byte attestation request.
///
/// Anything other than exactly [`INPUT_LEN`] bytes is rejected before the
/// height word is touched. The upper 24 bytes of the height word are ignored,
/// not rejected; the expected hash is copied verbatim and never checked
/// against anything here.
pub fn decode_input(input: &[u8]) -> Result<AttestationRequest, AttestationError> {
    if input.len() != INPUT_LEN {
        return Err(AttestationError::InvalidInputLength(input.len()));
    }

    let mut height = [0u8; 8];
    height.copy_from_slice(&input[24..32]);

    Ok(AttestationRequest {
        height: u64::from_be_bytes(height),
        expected_hash: B256::from_slice(&input[32..64]),
    })
}

/// Serializes a request into its 64-byte wire form, the inverse of
/// [`decode_input`] for canonical (zero-padded) buffers.
pub fn encode_input(request: &AttestationRequest) -> [u8; INPUT_LEN] {
    let mut out = [0u8; INPUT_LEN];
    out[24..32].copy_from_slice(&request.height.to_be_bytes());
    out[32..64].copy_from_slice(request.expected_hash.as_slice());
    out
}

/// Looks up the canonical header at `height` and serializes it.
///
/// Returns [`AttestationError::HeaderNotFound`] when the store has no header
/// at that height; nothing is written on that path.
pub fn encode_header<S: HeaderStore>(
    store: &S,
    height: u64,
) -> Result<EncodedHeader, AttestationError> {
    let header = store
        .header_by_number(height)
        .ok_or(AttestationError::HeaderNotFound(height))?;

    Ok(encode_header_record(&header))
}

/// Serializes a header snapshot into the fixed 288-byte layout.
///
/// Hashes fill their words; the coinbase address and every numeric field are
/// right-aligned with zero padding on the left; the nonce sits at the start
/// of the last word, zero-padded on the right. `difficulty` and `number` are
/// truncated to their low 64 bits: the format reserves a full word per field
/// but carries at most 64 bits of magnitude.
pub fn encode_header_record(header: &HeaderRecord) -> EncodedHeader {
    let mut out = [0u8; ENCODED_HEADER_LEN];

    out[0..32].copy_from_slice(header.parent_hash.as_slice());
    out[32..64].copy_from_slice(header.uncle_hash.as_slice());
    out[76..96].copy_from_slice(header.coinbase.as_slice());
    out[120..128].copy_from_slice(&header.difficulty.as_limbs()[0].to_be_bytes());
    out[152..160].copy_from_slice(&header.number.as_limbs()[0].to_be_bytes());
    out[184..192].copy_from_slice(&header.gas_limit.to_be_bytes());
    out[216..224].copy_from_slice(&header.gas_used.to_be_bytes());
    out[248..256].copy_from_slice(&header.timestamp.to_be_bytes());
    out[256..264].copy_from_slice(header.nonce.as_slice());

    out
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{Address, B256, B64, U256};

    use super::*;
    use crate::store::InMemoryHeaderStore;

    fn sample_header() -> HeaderRecord {
        HeaderRecord {
            parent_hash: B256::repeat_byte(0x11),
            uncle_hash: B256::repeat_byte(0x22),
            coinbase: Address::from([0xaa; 20]),
            difficulty: U256::from(0x0102030405060708_u64),
            number: U256::from(0x1122334455667788_u64),
            gas_limit: 0xa1a2a3a4a5a6a7a8,
            gas_used: 0xb1b2b3b4b5b6b7b8,
            timestamp: 0xc1c2c3c4c5c6c7c8,
            nonce: B64::from([0xd1, 0xd2, 0xd3, 0xd4, 0xd5, 0xd6, 0xd7, 0xd8]),
        }
    }

    #[test]
    fn rejects_any_length_but_64() {
        for len in [0usize, 1, 32, 63, 65, 96, 128] {
            let buf = vec![0u8; len];
            assert_eq!(
                decode_input(&buf),
                Err(AttestationError::InvalidInputLength(len))
            );
        }
    }

    #[test]
    fn decodes_height_and_hash() {
        let mut input = [0u8; INPUT_LEN];
        input[24..32].copy_from_slice(&19_000_000u64.to_be_bytes());
        input[32..64].copy_from_slice(&[0xcd; 32]);

        let request = decode_input(&input).unwrap();
        assert_eq!(request.height, 19_000_000);
        assert_eq!(request.expected_hash, B256::repeat_byte(0xcd));
    }

    #[test]
    fn ignores_upper_height_bytes() {
        let mut input = [0xff; INPUT_LEN];
        input[24..32].copy_from_slice(&42u64.to_be_bytes());

        assert_eq!(decode_input(&input).unwrap().height, 42);
    }

    #[test]
    fn roundtrip_keeps_low_height_bytes_and_hash() {
        let mut input = [0u8; INPUT_LEN];
        input[0..24].copy_from_slice(&[0x99; 24]);
        input[24..32].copy_from_slice(&777u64.to_be_bytes());
        input[32..64].copy_from_slice(&[0x0f; 32]);

        let reencoded = encode_input(&decode_input(&input).unwrap());
        assert_eq!(reencoded[24..32], input[24..32]);
        assert_eq!(reencoded[32..64], input[32..64]);
        // The non-significant padding comes back canonical.
        assert_eq!(reencoded[0..24], [0u8; 24]);
    }

    #[test]
    fn canonical_request_roundtrip_is_identity() {
        let request = AttestationRequest {
            height: u64::MAX,
            expected_hash: B256::repeat_byte(0x5a),
        };
        assert_eq!(decode_input(&encode_input(&request)).unwrap(), request);
    }

    #[test]
    fn header_fields_land_at_their_offsets() {
        let out = encode_header_record(&sample_header());

        assert_eq!(out[0..32], [0x11; 32]);
        assert_eq!(out[32..64], [0x22; 32]);
        assert_eq!(out[64..76], [0u8; 12]);
        assert_eq!(out[76..96], [0xaa; 20]);
        assert_eq!(out[96..120], [0u8; 24]);
        assert_eq!(out[120..128], 0x0102030405060708_u64.to_be_bytes());
        assert_eq!(out[128..152], [0u8; 24]);
        assert_eq!(out[152..160], 0x1122334455667788_u64.to_be_bytes());
        assert_eq!(out[160..184], [0u8; 24]);
        assert_eq!(out[184..192], 0xa1a2a3a4a5a6a7a8_u64.to_be_bytes());
        assert_eq!(out[192..216], [0u8; 24]);
        assert_eq!(out[216..224], 0xb1b2b3b4b5b6b7b8_u64.to_be_bytes());
        assert_eq!(out[224..248], [0u8; 24]);
        assert_eq!(out[248..256], 0xc1c2c3c4c5c6c7c8_u64.to_be_bytes());
        assert_eq!(out[256..264], [0xd1, 0xd2, 0xd3, 0xd4, 0xd5, 0xd6, 0xd7, 0xd8]);
        assert_eq!(out[264..288], [0u8; 24]);
    }

    #[test]
    fn truncates_difficulty_and_number_to_64_bits() {
        let mut wide = sample_header();
        // 2^64 + 5 and 2^64 + 9: anything above the low limb is dropped.
        wide.difficulty = U256::from_limbs([5, 1, 0, 0]);
        wide.number = U256::from_limbs([9, 1, 0, 0]);

        let mut narrow = wide.clone();
        narrow.difficulty = U256::from(5u64);
        narrow.number = U256::from(9u64);

        let wide_out = encode_header_record(&wide);
        assert_eq!(wide_out, encode_header_record(&narrow));
        assert_eq!(wide_out[120..128], 5u64.to_be_bytes());
        assert_eq!(wide_out[152..160], 9u64.to_be_bytes());
    }

    #[test]
    fn encode_header_reads_through_the_store() {
        let mut store = InMemoryHeaderStore::new();
        store.insert(7, sample_header());

        let direct = encode_header_record(&sample_header());
        assert_eq!(encode_header(&store, 7).unwrap(), direct);
        assert_eq!(
            encode_header(&store, 8),
            Err(AttestationError::HeaderNotFound(8))
        );
    }
}
