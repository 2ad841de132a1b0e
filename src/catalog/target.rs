//! Immutable index of IUPHAR target records
use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::classify::record::NOT_AVAILABLE;

/// One row of the IUPHAR target table. All identifiers stay zero-padded
/// strings; absent fields default to the empty string at load time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetRecord {
    pub target_id: String,
    pub swissprot: String,
    pub hgnc_name: String,
    pub hgnc_id: String,
    pub gene_name: String,
    /// Pipe-delimited synonym list as shipped by IUPHAR
    pub synonyms: String,
    pub family_id: String,
    pub target_name: String,
    /// "Class.Subclass" label, empty when the source table has no type column
    pub target_type: String,
}

/// Queryable snapshot of the target table. Duplicate target ids can occur in
/// the source data; the first record wins, matching row order.
#[derive(Debug, Default)]
pub struct TargetCatalog {
    records: Vec<TargetRecord>,
    by_id: IndexMap<String, usize>,
    by_uniprot: IndexMap<String, usize>,
    by_hgnc_name: HashMap<String, BTreeSet<String>>,
    by_hgnc_id: HashMap<String, BTreeSet<String>>,
    by_gene: HashMap<String, BTreeSet<String>>,
}

fn join_sorted(ids: Option<&BTreeSet<String>>) -> String {
    match ids {
        Some(set) => set.iter().cloned().collect::<Vec<_>>().join("|"),
        None => String::new(),
    }
}

impl TargetCatalog {
    pub fn from_records(records: Vec<TargetRecord>) -> Self {
        let mut catalog = TargetCatalog {
            records,
            ..Default::default()
        };
        for (i, record) in catalog.records.iter().enumerate() {
            if !record.target_id.is_empty() {
                catalog.by_id.entry(record.target_id.clone()).or_insert(i);
                if !record.swissprot.is_empty() {
                    catalog.by_uniprot.entry(record.swissprot.clone()).or_insert(i);
                }
                for (key, map) in [
                    (&record.hgnc_name, &mut catalog.by_hgnc_name),
                    (&record.hgnc_id, &mut catalog.by_hgnc_id),
                    (&record.gene_name, &mut catalog.by_gene),
                ] {
                    if !key.is_empty() {
                        map.entry(key.clone())
                            .or_default()
                            .insert(record.target_id.clone());
                    }
                }
            }
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, target_id: &str) -> Option<&TargetRecord> {
        self.by_id.get(target_id).map(|&i| &self.records[i])
    }

    /// First target id carrying this UniProt accession, "" when unmapped.
    pub fn target_id_by_uniprot(&self, accession: &str) -> String {
        if accession.is_empty() {
            return String::new();
        }
        self.by_uniprot
            .get(accession)
            .map(|&i| self.records[i].target_id.clone())
            .unwrap_or_default()
    }

    /// Exact HGNC symbol match; pipe-joined unique ids, ascending.
    pub fn target_id_by_hgnc_name(&self, hgnc_name: &str) -> String {
        if hgnc_name.is_empty() {
            return String::new();
        }
        join_sorted(self.by_hgnc_name.get(hgnc_name))
    }

    pub fn target_id_by_hgnc_id(&self, hgnc_id: &str) -> String {
        if hgnc_id.is_empty() {
            return String::new();
        }
        join_sorted(self.by_hgnc_id.get(hgnc_id))
    }

    pub fn target_id_by_gene(&self, gene_name: &str) -> String {
        if gene_name.is_empty() {
            return String::new();
        }
        join_sorted(self.by_gene.get(gene_name))
    }

    /// Case-insensitive substring match against the synonym field. The query
    /// is always a literal string, so pattern metacharacters cannot raise.
    pub fn target_id_by_name(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }
        let needle = name.to_lowercase();
        let mut ids = BTreeSet::new();
        for record in &self.records {
            if !record.target_id.is_empty()
                && record.synonyms.to_lowercase().contains(&needle)
            {
                ids.insert(record.target_id.clone());
            }
        }
        ids.into_iter().collect::<Vec<_>>().join("|")
    }

    /// Union of the UniProt and HGNC lookups for one input row; sorted
    /// unique, pipe-joined, the placeholder when nothing matches.
    pub fn target_id_from_row(&self, uniprot: &str, hgnc_name: &str, hgnc_id: &str) -> String {
        let mut ids = BTreeSet::new();
        for mapped in [
            self.target_id_by_uniprot(uniprot),
            self.target_id_by_hgnc_name(hgnc_name),
            self.target_id_by_hgnc_id(hgnc_id),
        ] {
            for id in mapped.split('|') {
                if !id.is_empty() {
                    ids.insert(id.to_string());
                }
            }
        }
        if ids.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            ids.into_iter().collect::<Vec<_>>().join("|")
        }
    }

    /// Map a synonym list through the substring lookup, keeping only
    /// unambiguous single-id hits. Very short synonyms match too broadly and
    /// are skipped.
    pub fn target_ids_by_synonyms<'a, I>(&self, synonyms: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ids = BTreeSet::new();
        for synonym in synonyms {
            if synonym.len() <= 3 {
                continue;
            }
            let mapped = self.target_id_by_name(synonym);
            if !mapped.is_empty() && !mapped.contains('|') {
                ids.insert(mapped);
            }
        }
        ids.into_iter().collect::<Vec<_>>().join("|")
    }

    /// Family ids reached through the synonym-substring lookup; sorted
    /// unique, pipe-joined.
    pub fn family_id_by_name(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }
        let mut family_ids = BTreeSet::new();
        for target_id in self.target_id_by_name(name).split('|') {
            if target_id.is_empty() {
                continue;
            }
            let family_id = self.target_family_id(target_id);
            if !family_id.is_empty() {
                family_ids.insert(family_id);
            }
        }
        family_ids.into_iter().collect::<Vec<_>>().join("|")
    }

    pub fn target_name(&self, target_id: &str) -> String {
        self.record(target_id)
            .map(|r| r.target_name.clone())
            .unwrap_or_default()
    }

    pub fn target_family_id(&self, target_id: &str) -> String {
        self.record(target_id)
            .map(|r| r.family_id.clone())
            .unwrap_or_default()
    }

    pub fn target_type(&self, target_id: &str) -> String {
        self.record(target_id)
            .map(|r| r.target_type.clone())
            .unwrap_or_default()
    }
}
