//! Immutable index of IUPHAR family records and parent-chain resolution
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One row of the IUPHAR family table. Families form a forest through
/// `parent_family_id`; an empty parent marks a root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FamilyRecord {
    pub family_id: String,
    pub family_name: String,
    pub parent_family_id: String,
    /// Pipe-delimited member target ids
    pub target_ids: String,
    /// "Class.Subclass" label
    pub family_type: String,
}

#[derive(Debug, Default)]
pub struct FamilyCatalog {
    records: Vec<FamilyRecord>,
    by_id: IndexMap<String, usize>,
}

impl FamilyCatalog {
    pub fn from_records(records: Vec<FamilyRecord>) -> Self {
        let mut by_id = IndexMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if !record.family_id.is_empty() {
                by_id.entry(record.family_id.clone()).or_insert(i);
            }
        }
        FamilyCatalog { records, by_id }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, family_id: &str) -> Option<&FamilyRecord> {
        self.by_id.get(family_id).map(|&i| &self.records[i])
    }

    pub fn family_name(&self, family_id: &str) -> String {
        self.record(family_id)
            .map(|r| r.family_name.clone())
            .unwrap_or_default()
    }

    pub fn family_type(&self, family_id: &str) -> String {
        self.record(family_id)
            .map(|r| r.family_type.clone())
            .unwrap_or_default()
    }

    pub fn parent(&self, family_id: &str) -> String {
        self.record(family_id)
            .map(|r| r.parent_family_id.clone())
            .unwrap_or_default()
    }

    /// Root-directed family chain starting at `start_id`, nearest first.
    ///
    /// Follows `parent_family_id` links until a root or an id that is not in
    /// the catalog. An id already present in the chain stops the walk, so
    /// cyclic or self-referential parent data yields a truncated chain
    /// instead of looping.
    pub fn chain(&self, start_id: &str) -> Vec<String> {
        let mut chain: Vec<String> = Vec::new();
        let mut current = start_id.to_string();
        while !current.is_empty() {
            if chain.iter().any(|id| *id == current) {
                break;
            }
            chain.push(current.clone());
            match self.record(&current) {
                Some(record) if !record.parent_family_id.is_empty() => {
                    current = record.parent_family_id.clone();
                }
                _ => break,
            }
        }
        chain
    }
}
