//! Batch mapping of UniProt accessions to classification columns
use std::collections::BTreeSet;
use std::path::Path;

use rayon::prelude::*;
use tracing::info;

use crate::catalog::{FamilyCatalog, TargetCatalog};
use crate::classify::record::EC_NOT_ASSIGNED;
use crate::classify::{Resolver, Status};
use crate::table::Table;
use crate::Result;

/// Columns appended to the input table, in output order.
pub const OUTPUT_COLUMNS: &[&str] = &[
    "target_id",
    "IUPHAR_family_id",
    "IUPHAR_type",
    "IUPHAR_class",
    "IUPHAR_subclass",
    "IUPHAR_chain",
    "full_id_path",
    "full_name_path",
];

/// Merge two raw EC fields into one sorted, unique, pipe-joined set. The
/// "not assigned" placeholder is dropped.
pub fn merge_ec_fields(left: &str, right: &str) -> String {
    let mut numbers = BTreeSet::new();
    for field in [left, right] {
        for item in field.split('|') {
            let item = item.trim();
            if !item.is_empty() && item != EC_NOT_ASSIGNED {
                numbers.insert(item.to_string());
            }
        }
    }
    numbers.into_iter().collect::<Vec<_>>().join("|")
}

pub struct BatchMapper<'a> {
    targets: &'a TargetCatalog,
    families: &'a FamilyCatalog,
}

struct MappedRow {
    target_id: String,
    ec_numbers: String,
    family_id: String,
    type_label: String,
    class: String,
    subclass: String,
    chain: String,
    full_id_path: String,
    full_name_path: String,
}

impl<'a> BatchMapper<'a> {
    pub fn new(targets: &'a TargetCatalog, families: &'a FamilyCatalog) -> Self {
        BatchMapper { targets, families }
    }

    /// Map every row of a table carrying a `uniprot_id` column. All input
    /// columns pass through unchanged; the classification columns are
    /// written last, replacing any stale copies already present. An
    /// optional `ec_number` column feeds the EC fallback for accessions the
    /// catalog cannot resolve, merged with the `activity.ec_number` column
    /// when activity data has been joined in upstream.
    ///
    /// Rows are classified in parallel; the Resolver is pure, and the
    /// ordered collect keeps output rows aligned with input rows.
    pub fn map_table(&self, table: &Table) -> Result<Table> {
        table.validate_columns(&["uniprot_id"])?;
        let resolver = Resolver::new(self.targets, self.families);

        let mapped: Vec<MappedRow> = (0..table.len())
            .into_par_iter()
            .map(|row| {
                let accession = table.value(row, "uniprot_id");
                let ec_field = merge_ec_fields(
                    table.value(row, "ec_number"),
                    table.value(row, "activity.ec_number"),
                );
                let target_id = self.targets.target_id_by_uniprot(accession);
                let record = resolver.classify(&target_id, "", &ec_field, "");

                // an unresolved row keeps its classification columns empty so
                // downstream cleanup can recognise it
                let (family_id, type_label, class, subclass, chain) =
                    if record.status == Status::NotAvailable {
                        Default::default()
                    } else {
                        let chain = record.chain_label();
                        (
                            record.family_id,
                            record.target_type,
                            record.class,
                            record.subclass,
                            chain,
                        )
                    };

                MappedRow {
                    full_id_path: resolver.all_id(&target_id),
                    full_name_path: resolver.all_name(&target_id),
                    target_id,
                    ec_numbers: ec_field,
                    family_id,
                    type_label,
                    class,
                    subclass,
                    chain,
                }
            })
            .collect();

        let mut output = table.clone();
        if table.has_column("activity.ec_number") {
            output.set_column(
                "ec_number",
                mapped.iter().map(|m| m.ec_numbers.clone()).collect(),
            )?;
        }
        output.set_column(
            "target_id",
            mapped.iter().map(|m| m.target_id.clone()).collect(),
        )?;
        output.set_column(
            "IUPHAR_family_id",
            mapped.iter().map(|m| m.family_id.clone()).collect(),
        )?;
        output.set_column(
            "IUPHAR_type",
            mapped.iter().map(|m| m.type_label.clone()).collect(),
        )?;
        output.set_column(
            "IUPHAR_class",
            mapped.iter().map(|m| m.class.clone()).collect(),
        )?;
        output.set_column(
            "IUPHAR_subclass",
            mapped.iter().map(|m| m.subclass.clone()).collect(),
        )?;
        output.set_column(
            "IUPHAR_chain",
            mapped.iter().map(|m| m.chain.clone()).collect(),
        )?;
        output.set_column(
            "full_id_path",
            mapped.iter().map(|m| m.full_id_path.clone()).collect(),
        )?;
        output.set_column(
            "full_name_path",
            mapped.iter().map(|m| m.full_name_path.clone()).collect(),
        )?;

        info!("mapped {} accessions", output.len());
        Ok(output)
    }

    /// CSV entry point: read, map, write.
    pub fn map_csv_path<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
        delimiter: u8,
    ) -> Result<Table> {
        let table = Table::from_csv_path(input, delimiter)?;
        let mapped = self.map_table(&table)?;
        mapped.write_csv_path(output, delimiter)?;
        Ok(mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_ec_fields() {
        assert_eq!(merge_ec_fields("2.7.11.1", "1.1.1.1"), "1.1.1.1|2.7.11.1");
        assert_eq!(
            merge_ec_fields("EC-not-assigned", " 1.1.1.1 |1.1.1.1"),
            "1.1.1.1"
        );
        assert_eq!(merge_ec_fields("", ""), "");
    }
}
