use std::collections::BTreeMap;

use crate::types::HeaderRecord;

/// Read-only access to canonical headers, keyed by block height.
///
/// The attestation path performs exactly one lookup per request and never
/// writes, so this is the only capability it asks of its environment. A node
/// database, an RPC cache, or a fixture map all fit behind it.
pub trait HeaderStore {
    /// Returns the canonical header at `height`, or `None` if the store has
    /// no entry there.
    fn header_by_number(&self, height: u64) -> Option<HeaderRecord>;
}

/// Height-indexed header map, the store used by the fixtures and the CLI.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHeaderStore {
    headers: BTreeMap<u64, HeaderRecord>,
}

impl InMemoryHeaderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `header` at `height`, replacing any previous entry. The key is
    /// taken as given and is not required to match `header.number`.
    pub fn insert(&mut self, height: u64, header: HeaderRecord) {
        self.headers.insert(height, header);
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl HeaderStore for InMemoryHeaderStore {
    fn header_by_number(&self, height: u64) -> Option<HeaderRecord> {
        self.headers.get(&height).cloned()
    }
}
