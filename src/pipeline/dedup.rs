//! Bulk classification cleanup pipeline
//!
//! Reconciles alternative-name tagging across a bulk classification table in
//! four stages: normalise text and collect per-row alternative names (A),
//! group identical classifications and explode one row per name (B), borrow
//! classifications onto unresolved rows that share a name with a resolved
//! one (C), then keep singleton matches plus curated known-good duplicates
//! (D). Every grouping step preserves first-seen order; downstream joins
//! depend on exact output row order.
use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info};

use crate::table::Table;
use crate::Result;

use super::curated::CuratedKeys;

/// Columns the input table must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "chembl_id",
    "target_id",
    "IUPHAR_family_id",
    "IUPHAR_type",
    "IUPHAR_class",
    "IUPHAR_subclass",
    "IUPHAR_chain",
    "full_id_path",
    "full_name_path",
    "gene",
    "component_description",
    "names_x",
    "chembl_alternative_name",
];

/// Free-text columns lowered before name collection; only those present are
/// touched.
const LOWERCASE_COLUMNS: &[&str] = &[
    "component_description",
    "pref_name",
    "gene",
    "chembl_alternative_name",
    "names_x",
    "cellular_component_x",
    "subcellular_location_x",
    "topology_x",
];

/// Full identity of a classification row; rows sharing a key are the same
/// classification and their alternative names are pooled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub chembl_id: String,
    pub target_id: String,
    pub family_id: String,
    pub type_label: String,
    pub class: String,
    pub subclass: String,
    pub chain: String,
    pub full_id_path: String,
    pub full_name_path: String,
    pub gene_name: String,
}

/// One exploded row: a single alternative name with a stable output index.
#[derive(Debug, Clone)]
pub struct ExpandedRow {
    pub key: GroupKey,
    pub alternative_name: String,
    pub index: usize,
}

/// Stage C output: an unresolved row joined to a resolved classification it
/// shares an alternative name with.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseRow {
    pub chembl_id: String,
    pub gene_name: String,
    pub index: usize,
    pub alternative_name: String,
    pub matched_chembl_id: String,
    pub matched_gene_name: String,
    pub target_id: String,
    pub family_id: String,
    pub type_label: String,
    pub class: String,
    pub subclass: String,
    pub chain: String,
    pub full_id_path: String,
    pub full_name_path: String,
    pub gene_match: bool,
    /// Curated composite key: borrowed family id + row index
    pub merged_key: String,
}

/// Split pipe-delimited name fields into unique trimmed tokens, first-seen
/// order; "synonyms=" tags are stripped.
pub fn split_and_clean(texts: &[&str]) -> Vec<String> {
    let mut unique: IndexSet<String> = IndexSet::new();
    for text in texts {
        if text.is_empty() {
            continue;
        }
        for token in text.split('|') {
            let token = token.trim().replace("synonyms=", "");
            if !token.is_empty() {
                unique.insert(token);
            }
        }
    }
    unique.into_iter().collect()
}

#[derive(Debug, Default)]
pub struct DedupPipeline {
    curated: CuratedKeys,
}

impl DedupPipeline {
    pub fn new(curated: CuratedKeys) -> Self {
        DedupPipeline { curated }
    }

    /// Stages A+B: normalise, collect alternative names, group by identity,
    /// union each group's names and explode one row per name.
    pub fn expand(&self, table: &Table) -> Result<Vec<ExpandedRow>> {
        table.validate_columns(REQUIRED_COLUMNS)?;

        let mut lowered = table.clone();
        lowered.lowercase_columns(LOWERCASE_COLUMNS);

        let mut groups: IndexMap<GroupKey, IndexSet<String>> = IndexMap::new();
        for row in 0..lowered.len() {
            let gene = lowered.value(row, "gene");
            let key = GroupKey {
                chembl_id: lowered.value(row, "chembl_id").to_string(),
                target_id: lowered.value(row, "target_id").to_string(),
                family_id: lowered.value(row, "IUPHAR_family_id").to_string(),
                type_label: lowered.value(row, "IUPHAR_type").to_string(),
                class: lowered.value(row, "IUPHAR_class").to_string(),
                subclass: lowered.value(row, "IUPHAR_subclass").to_string(),
                chain: lowered.value(row, "IUPHAR_chain").to_string(),
                full_id_path: lowered.value(row, "full_id_path").to_string(),
                full_name_path: lowered.value(row, "full_name_path").to_string(),
                gene_name: gene.split('|').next().unwrap_or("").to_string(),
            };
            let names = split_and_clean(&[
                gene,
                lowered.value(row, "component_description"),
                lowered.value(row, "names_x"),
                lowered.value(row, "chembl_alternative_name"),
            ]);
            groups.entry(key).or_default().extend(names);
        }

        let mut expanded = Vec::new();
        let mut index = 0;
        for (key, names) in groups {
            for name in names {
                if name.is_empty() {
                    continue;
                }
                expanded.push(ExpandedRow {
                    key: key.clone(),
                    alternative_name: name,
                    index,
                });
                index += 1;
            }
        }
        debug!("expanded to {} alternative-name rows", expanded.len());
        Ok(expanded)
    }

    /// Stage C: borrow classifications onto unresolved rows by shared
    /// alternative name, then drop curated false positives.
    pub fn join_unresolved(&self, rows: &[ExpandedRow]) -> Vec<BaseRow> {
        let mut resolved_by_name: IndexMap<&str, Vec<&ExpandedRow>> = IndexMap::new();
        for row in rows {
            if !row.alternative_name.is_empty() && !row.key.type_label.is_empty() {
                resolved_by_name
                    .entry(row.alternative_name.as_str())
                    .or_default()
                    .push(row);
            }
        }

        let mut base = Vec::new();
        for row in rows.iter().filter(|r| r.key.type_label.is_empty()) {
            let Some(matches) = resolved_by_name.get(row.alternative_name.as_str()) else {
                // left join without a partner stays untyped and is dropped
                continue;
            };
            for resolved in matches {
                let merged_key = format!("{}{}", resolved.key.family_id, row.index);
                if self.curated.is_excluded(&merged_key) {
                    continue;
                }
                base.push(BaseRow {
                    chembl_id: row.key.chembl_id.clone(),
                    gene_name: row.key.gene_name.clone(),
                    index: row.index,
                    alternative_name: row.alternative_name.clone(),
                    matched_chembl_id: resolved.key.chembl_id.clone(),
                    matched_gene_name: resolved.key.gene_name.clone(),
                    target_id: resolved.key.target_id.clone(),
                    family_id: resolved.key.family_id.clone(),
                    type_label: resolved.key.type_label.clone(),
                    class: resolved.key.class.clone(),
                    subclass: resolved.key.subclass.clone(),
                    chain: resolved.key.chain.clone(),
                    full_id_path: resolved.key.full_id_path.clone(),
                    full_name_path: resolved.key.full_name_path.clone(),
                    gene_match: row.key.gene_name == resolved.key.gene_name,
                    merged_key,
                });
            }
        }
        debug!("stage C kept {} joined rows", base.len());
        base
    }

    /// Stage D: singleton matches pass through; duplicated matches survive
    /// only when curated as known-correct.
    pub fn partition(&self, base: Vec<BaseRow>) -> Vec<BaseRow> {
        let mut groups: IndexMap<(String, String, usize), Vec<BaseRow>> = IndexMap::new();
        for row in base {
            groups
                .entry((row.chembl_id.clone(), row.gene_name.clone(), row.index))
                .or_default()
                .push(row);
        }

        let mut singles = Vec::new();
        let mut kept_duplicates = Vec::new();
        for (_, rows) in groups {
            if rows.len() == 1 {
                singles.extend(rows);
            } else {
                kept_duplicates.extend(
                    rows.into_iter()
                        .filter(|r| self.curated.is_whitelisted(&r.merged_key)),
                );
            }
        }
        singles.extend(kept_duplicates);
        singles
    }

    /// Run the full pipeline over a classification table.
    pub fn run(&self, table: &Table) -> Result<Table> {
        let expanded = self.expand(table)?;
        let base = self.join_unresolved(&expanded);
        let cleaned = self.partition(base);
        info!("dedup pipeline kept {} rows", cleaned.len());
        rows_to_table(&cleaned)
    }

    /// CSV entry point: read, run, write.
    pub fn run_csv_path<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
        delimiter: u8,
    ) -> Result<Table> {
        let table = Table::from_csv_path(input, delimiter)?;
        let cleaned = self.run(&table)?;
        cleaned.write_csv_path(output, delimiter)?;
        Ok(cleaned)
    }
}

/// Output schema of the cleaned table.
pub const OUTPUT_COLUMNS: &[&str] = &[
    "chembl_id",
    "gene_name",
    "Index",
    "alternative_name",
    "matched_chembl_id",
    "target_id",
    "IUPHAR_family_id",
    "IUPHAR_type",
    "IUPHAR_class",
    "IUPHAR_subclass",
    "IUPHAR_chain",
    "full_id_path",
    "full_name_path",
    "matched_gene_name",
    "gene_match",
];

fn rows_to_table(rows: &[BaseRow]) -> Result<Table> {
    let mut table = Table::new(OUTPUT_COLUMNS.to_vec())?;
    for row in rows {
        table.push_row(vec![
            row.chembl_id.clone(),
            row.gene_name.clone(),
            row.index.to_string(),
            row.alternative_name.clone(),
            row.matched_chembl_id.clone(),
            row.target_id.clone(),
            row.family_id.clone(),
            row.type_label.clone(),
            row.class.clone(),
            row.subclass.clone(),
            row.chain.clone(),
            row.full_id_path.clone(),
            row.full_name_path.clone(),
            row.matched_gene_name.clone(),
            row.gene_match.to_string(),
        ]);
    }
    Ok(table)
}
