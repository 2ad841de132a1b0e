//! Classification records and identifier validity rules
use serde::{Deserialize, Serialize};

/// Placeholder for an unresolved identifier or name.
pub const NOT_AVAILABLE: &str = "N/A";

/// Catch-all class/subclass for targets outside the curated taxonomy.
pub const OTHER_PROTEIN_TARGET: &str = "Other Protein Target";

/// "class.subclass" label of the unresolved record.
pub const DEFAULT_TYPE: &str = "Other Protein Target.Other Protein Target";

/// EC field entries carrying this sentinel are treated as absent.
pub const EC_NOT_ASSIGNED: &str = "EC-not-assigned";

/// Family chain of the unresolved record ("other protein targets" family).
pub fn default_tree() -> Vec<String> {
    vec!["0864-1".to_string(), "0864".to_string()]
}

/// Which identifier source produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    TargetId,
    FamilyId,
    EcNumber,
    Name,
    NotAvailable,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::TargetId => "target_id",
            Status::FamilyId => "family_id",
            Status::EcNumber => "ec_number",
            Status::Name => "name",
            Status::NotAvailable => NOT_AVAILABLE,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved classification. Instances are built once per query and not
/// mutated afterwards; the default value is the canonical unresolved record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    pub target_id: String,
    pub family_id: String,
    pub class: String,
    pub subclass: String,
    /// Root-directed family chain, nearest ancestor first
    pub tree: Vec<String>,
    /// Full "class.subclass" label as resolved
    pub target_type: String,
    pub name: String,
    pub ec_numbers: Vec<String>,
    pub status: Status,
}

impl Default for ClassificationRecord {
    fn default() -> Self {
        ClassificationRecord {
            target_id: NOT_AVAILABLE.to_string(),
            family_id: NOT_AVAILABLE.to_string(),
            class: OTHER_PROTEIN_TARGET.to_string(),
            subclass: OTHER_PROTEIN_TARGET.to_string(),
            tree: default_tree(),
            target_type: DEFAULT_TYPE.to_string(),
            name: NOT_AVAILABLE.to_string(),
            ec_numbers: Vec::new(),
            status: Status::NotAvailable,
        }
    }
}

impl ClassificationRecord {
    /// The chain joined with ">" for table output.
    pub fn chain_label(&self) -> String {
        self.tree.join(">")
    }
}

/// A usable single identifier: non-empty and not a placeholder.
pub fn is_valid_parameter(parameter: &str) -> bool {
    !parameter.is_empty() && parameter != NOT_AVAILABLE && parameter != OTHER_PROTEIN_TARGET
}

/// A usable EC-number list: something left after dropping placeholders, and
/// not just the default sentinel chain.
pub fn is_valid_ec_list(values: &[String]) -> bool {
    let kept: Vec<&String> = values
        .iter()
        .filter(|v| !v.is_empty() && *v != NOT_AVAILABLE && *v != EC_NOT_ASSIGNED)
        .collect();
    if kept.is_empty() {
        return false;
    }
    !(kept.len() == 2 && kept[0] == "0864-1")
}

/// Split a "class.subclass" label; a missing subclass falls back to the
/// catch-all.
pub fn split_type(type_label: &str) -> (String, String) {
    match type_label.split_once('.') {
        Some((class, subclass)) => (class.to_string(), subclass.to_string()),
        None => {
            let class = if type_label.is_empty() {
                OTHER_PROTEIN_TARGET.to_string()
            } else {
                type_label.to_string()
            };
            (class, OTHER_PROTEIN_TARGET.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = ClassificationRecord::default();
        assert_eq!(record.target_id, "N/A");
        assert_eq!(record.family_id, "N/A");
        assert_eq!(record.class, "Other Protein Target");
        assert_eq!(record.tree, vec!["0864-1", "0864"]);
        assert_eq!(record.chain_label(), "0864-1>0864");
        assert_eq!(record.status, Status::NotAvailable);
    }

    #[test]
    fn test_parameter_validity() {
        assert!(is_valid_parameter("1234"));
        assert!(!is_valid_parameter(""));
        assert!(!is_valid_parameter("N/A"));
        assert!(!is_valid_parameter("Other Protein Target"));
    }

    #[test]
    fn test_ec_list_validity() {
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert!(is_valid_ec_list(&list(&["1.2.3.4"])));
        assert!(!is_valid_ec_list(&list(&[])));
        assert!(!is_valid_ec_list(&list(&["", "N/A"])));
        assert!(!is_valid_ec_list(&list(&["EC-not-assigned"])));
        // the bare sentinel chain is not an EC list
        assert!(!is_valid_ec_list(&list(&["0864-1", "0864"])));
        assert!(is_valid_ec_list(&list(&["0864-1", "0864", "1.1.1.1"])));
    }

    #[test]
    fn test_split_type() {
        assert_eq!(
            split_type("Enzyme.Transferase"),
            ("Enzyme".to_string(), "Transferase".to_string())
        );
        assert_eq!(
            split_type("Enzyme"),
            ("Enzyme".to_string(), "Other Protein Target".to_string())
        );
        assert_eq!(
            split_type(""),
            (
                "Other Protein Target".to_string(),
                "Other Protein Target".to_string()
            )
        );
    }
}
