use std::fs;
use std::path::Path;

use anyhow::Context;
use astrum_primitives::{HeaderRecord, HeaderStore, InMemoryHeaderStore};
use serde::{Deserialize, Serialize};

/// One pinned header in a snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    pub height: u64,
    pub header: HeaderRecord,
}

/// Header fixtures loaded from a JSON file, served through [`HeaderStore`].
///
/// The file is a flat array of [`SnapshotRecord`]s; later entries win on
/// duplicate heights. A snapshot stands in for a live node database so the
/// CLI can serve attestations offline.
#[derive(Debug, Clone, Default)]
pub struct HeaderSnapshot {
    store: InMemoryHeaderStore,
}

impl HeaderSnapshot {
    /// Reads and parses a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        let records: Vec<SnapshotRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))?;

        let mut store = InMemoryHeaderStore::new();
        for record in records {
            store.insert(record.height, record.header);
        }

        Ok(Self { store })
    }

    pub fn insert(&mut self, height: u64, header: HeaderRecord) {
        self.store.insert(height, header);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl HeaderStore for HeaderSnapshot {
    fn header_by_number(&self, height: u64) -> Option<HeaderRecord> {
        self.store.header_by_number(height)
    }
}
