//! Dedup pipeline tests over CSV input
use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use gtopclass::pipeline::{CuratedKeys, DedupPipeline};
use gtopclass::table::Table;
use gtopclass::GtopError;

const CLASSIFICATION_CSV: &str = "\
chembl_id,target_id,IUPHAR_family_id,IUPHAR_type,IUPHAR_class,IUPHAR_subclass,IUPHAR_chain,full_id_path,full_name_path,gene,component_description,names_x,chembl_alternative_name
CH1,T1,F1,Enzyme.Hydrolase,Enzyme,Hydrolase,F1,T1#F1,Target One#Family One,GENE1,Shared Protein,,
CH2,,,,,,,,,GENE1,Shared Protein,,
CH3,,,,,,,,,GENE3,Unmatched Protein,,
";

#[test]
fn pipeline_csv_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bulk.csv");
    let output = dir.path().join("clean.csv");
    fs::write(&input, CLASSIFICATION_CSV).unwrap();

    let pipeline = DedupPipeline::default();
    pipeline.run_csv_path(&input, &output, b',').unwrap();

    let out = Table::from_csv_path(&output, b',').unwrap();
    // CH2 borrows CH1's classification via the shared lowercased name;
    // CH2's own gene token also matches CH1's, so two joined rows survive.
    // CH3 shares no name with a resolved row and is dropped.
    assert_eq!(out.len(), 2);
    for row in 0..out.len() {
        assert_eq!(out.value(row, "chembl_id"), "CH2");
        assert_eq!(out.value(row, "matched_chembl_id"), "CH1");
        assert_eq!(out.value(row, "IUPHAR_type"), "Enzyme.Hydrolase");
        assert_eq!(out.value(row, "IUPHAR_family_id"), "F1");
        assert_eq!(out.value(row, "gene_match"), "true");
    }
    let names: Vec<&str> = (0..out.len())
        .map(|r| out.value(r, "alternative_name"))
        .collect();
    assert_eq!(names, vec!["gene1", "shared protein"]);
}

#[test]
fn missing_columns_fail_loudly() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.csv");
    let output = dir.path().join("clean.csv");
    fs::write(&input, "chembl_id,gene\nCH1,GENE1\n").unwrap();

    let pipeline = DedupPipeline::default();
    let err = pipeline.run_csv_path(&input, &output, b',').unwrap_err();
    match err {
        GtopError::MissingColumns(names) => {
            assert!(names.contains("target_id"));
            assert!(names.contains("chembl_alternative_name"));
        }
        other => panic!("expected MissingColumns, got {:?}", other),
    }
}

#[test]
fn curated_exclusion_applies_from_override() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bulk.csv");
    fs::write(&input, CLASSIFICATION_CSV).unwrap();
    let table = Table::from_csv_path(&input, b',').unwrap();

    // find the composite keys the default run produces, then exclude them
    let default_run = DedupPipeline::default();
    let expanded = default_run.expand(&table).unwrap();
    let keys: Vec<String> = default_run
        .join_unresolved(&expanded)
        .into_iter()
        .map(|r| r.merged_key)
        .collect();
    assert_eq!(keys.len(), 2);

    let excluding = DedupPipeline::new(CuratedKeys {
        excluded: keys,
        whitelisted: vec![],
    });
    let cleaned = excluding.run(&table).unwrap();
    assert_eq!(cleaned.len(), 0);
}
