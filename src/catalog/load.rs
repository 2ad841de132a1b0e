//! Catalog construction from IUPHAR reference tables
//!
//! The official `_IUPHAR_target.csv` / `_IUPHAR_family.csv` exports carry
//! zero-padded identifiers, so every column is read as a string and missing
//! values become empty strings. Legacy header spellings are normalised
//! before validation.
use std::path::Path;

use tracing::{debug, info};

use crate::table::Table;
use crate::Result;

use super::{FamilyCatalog, FamilyRecord, TargetCatalog, TargetRecord};

pub const EXPECTED_TARGET_COLUMNS: &[&str] = &[
    "target_id",
    "swissprot",
    "hgnc_name",
    "hgnc_id",
    "gene_name",
    "synonyms",
    "family_id",
    "target_name",
];

pub const EXPECTED_FAMILY_COLUMNS: &[&str] = &[
    "family_id",
    "family_name",
    "parent_family_id",
    "target_id",
    "type",
];

fn normalise_target_headers(table: &mut Table) {
    for (legacy, canonical) in [
        ("HGNC_NAME", "hgnc_name"),
        ("HGNC_name", "hgnc_name"),
        ("HGNC_ID", "hgnc_id"),
        ("HGNC_id", "hgnc_id"),
    ] {
        table.rename_column(legacy, canonical);
    }
}

/// Build a [`TargetCatalog`] from a loaded target table.
pub fn load_targets(mut table: Table) -> Result<TargetCatalog> {
    normalise_target_headers(&mut table);
    table.validate_columns(EXPECTED_TARGET_COLUMNS)?;

    let mut records = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        records.push(TargetRecord {
            target_id: table.value(row, "target_id").to_string(),
            swissprot: table.value(row, "swissprot").to_string(),
            hgnc_name: table.value(row, "hgnc_name").to_string(),
            hgnc_id: table.value(row, "hgnc_id").to_string(),
            gene_name: table.value(row, "gene_name").to_string(),
            synonyms: table.value(row, "synonyms").to_string(),
            family_id: table.value(row, "family_id").to_string(),
            target_name: table.value(row, "target_name").to_string(),
            // optional column, absent in older exports
            target_type: table.value(row, "type").to_string(),
        });
    }
    info!("loaded {} target records", records.len());
    Ok(TargetCatalog::from_records(records))
}

/// Build a [`FamilyCatalog`] from a loaded family table.
pub fn load_families(table: Table) -> Result<FamilyCatalog> {
    table.validate_columns(EXPECTED_FAMILY_COLUMNS)?;

    let mut records = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        records.push(FamilyRecord {
            family_id: table.value(row, "family_id").to_string(),
            family_name: table.value(row, "family_name").to_string(),
            parent_family_id: table.value(row, "parent_family_id").to_string(),
            target_ids: table.value(row, "target_id").to_string(),
            family_type: table.value(row, "type").to_string(),
        });
    }
    info!("loaded {} family records", records.len());
    Ok(FamilyCatalog::from_records(records))
}

impl TargetCatalog {
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("loading target catalog from {}", path.as_ref().display());
        load_targets(Table::from_csv_path(path, b',')?)
    }
}

impl FamilyCatalog {
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("loading family catalog from {}", path.as_ref().display());
        load_families(Table::from_csv_path(path, b',')?)
    }
}
