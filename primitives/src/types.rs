use alloy::primitives::{Address, B256, B64, U256};
use alloy::sol;
use serde::{Deserialize, Serialize};

/// uint256 height;        // only the low 8 bytes are read back
/// bytes32 expected_hash;
pub type RequestTuple = sol! {
    tuple(uint256, bytes32)
};

/// bytes32 parent_hash;
/// bytes32 uncle_hash;
/// address coinbase;
/// uint256 difficulty;    // truncated to the low 64 bits on encode
/// uint256 number;        // truncated to the low 64 bits on encode
/// uint64 gas_limit;
/// uint64 gas_used;
/// uint64 timestamp;
/// bytes8 nonce;
pub type AttestedHeaderTuple = sol! {
    tuple(bytes32, bytes32, address, uint256, uint256, uint64, uint64, uint64, bytes8)
};

/// A decoded attestation request: which height the light client wants the
/// canonical header for, and which hash it believes that header has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttestationRequest {
    /// Height of the block whose header is to be attested.
    pub height: u64,
    /// Hash the requester believes the header at `height` has. Surfaced for
    /// the protocol layer driving this call; never compared here.
    pub expected_hash: B256,
}

/// Snapshot of the header fields the attestation covers.
///
/// The canonical record lives with the host chain client; the store hands out
/// one copy per lookup and this crate drops it once encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderRecord {
    /// Hash of the parent block's header.
    pub parent_hash: B256,
    /// Hash over the block's uncle set.
    pub uncle_hash: B256,
    /// Address credited with the block reward.
    pub coinbase: Address,
    /// Proof-of-work difficulty target. Values above 2^64 - 1 lose their
    /// high-order bits on the wire.
    pub difficulty: U256,
    /// Block number. Same precision ceiling as `difficulty`.
    pub number: U256,
    /// Maximum gas the block may consume.
    pub gas_limit: u64,
    /// Gas actually consumed by the block.
    pub gas_used: u64,
    /// Block timestamp in seconds since the Unix epoch.
    pub timestamp: u64,
    /// Proof-of-work nonce.
    pub nonce: B64,
}
