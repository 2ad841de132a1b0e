//! Classification resolver over the target and family catalogs
//!
//! Reconciles up to four identifier sources with a fixed precedence:
//! target_id > family_id > ec_number > free-text name. Each source is
//! evaluated on its own and the highest-precedence successful record wins.
use tracing::trace;

use crate::catalog::{FamilyCatalog, TargetCatalog};

use super::ec::{ec_numbers_to_chain, ec_numbers_to_type, parse_ec_field};
use super::name::name_to_type;
use super::record::{
    default_tree, is_valid_ec_list, is_valid_parameter, split_type, ClassificationRecord, Status,
    DEFAULT_TYPE, NOT_AVAILABLE,
};

pub struct Resolver<'a> {
    targets: &'a TargetCatalog,
    families: &'a FamilyCatalog,
}

impl<'a> Resolver<'a> {
    pub fn new(targets: &'a TargetCatalog, families: &'a FamilyCatalog) -> Self {
        Resolver { targets, families }
    }

    fn family_to_type(&self, family_id: &str) -> String {
        if !is_valid_parameter(family_id) {
            return NOT_AVAILABLE.to_string();
        }
        let family_type = self.families.family_type(family_id);
        if family_type.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            family_type
        }
    }

    fn family_to_chain(&self, family_id: &str) -> Vec<String> {
        if is_valid_parameter(family_id) {
            self.families.chain(family_id)
        } else {
            Vec::new()
        }
    }

    /// Reconcile a target's own type with its family's type.
    ///
    /// The target's type wins over the family's when both are valid but
    /// disagree; the final arm is a contradiction guard that cannot fire for
    /// well-formed data but is kept so the precedence is total.
    pub fn target_type_for(&self, target_id: &str) -> String {
        let record = if is_valid_parameter(target_id) {
            self.targets.record(target_id)
        } else {
            None
        };
        let Some(record) = record else {
            return DEFAULT_TYPE.to_string();
        };

        let type1 = record.target_type.clone();
        let type2 = self.family_to_type(&record.family_id);
        let valid1 = is_valid_parameter(&type1);
        let valid2 = is_valid_parameter(&type2);

        let resolved = if valid1 && !valid2 {
            type1
        } else if valid2 && !valid1 {
            type2
        } else if !valid1 && !valid2 {
            DEFAULT_TYPE.to_string()
        } else if type1 == type2 {
            type1
        } else if valid1 {
            type1
        } else {
            "N/A.N/A".to_string()
        };

        if resolved.is_empty() {
            DEFAULT_TYPE.to_string()
        } else {
            resolved
        }
    }

    fn build_record(
        &self,
        target_id: &str,
        family_id: &str,
        name: &str,
        ec_numbers: &[String],
        status: Option<Status>,
    ) -> ClassificationRecord {
        let target_id = if is_valid_parameter(target_id) {
            target_id
        } else {
            NOT_AVAILABLE
        };

        let mut family_id = family_id.to_string();
        if !is_valid_parameter(&family_id) && is_valid_parameter(target_id) {
            let derived = self.targets.target_family_id(target_id);
            family_id = if derived.is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                derived
            };
        }

        let name = if is_valid_parameter(name) {
            name
        } else {
            NOT_AVAILABLE
        };
        let ec_numbers: Vec<String> = if is_valid_ec_list(ec_numbers) {
            ec_numbers.to_vec()
        } else {
            Vec::new()
        };

        let status = status.unwrap_or_else(|| {
            if is_valid_parameter(target_id) {
                Status::TargetId
            } else if is_valid_parameter(&family_id) {
                Status::FamilyId
            } else if is_valid_ec_list(&ec_numbers) {
                Status::EcNumber
            } else {
                Status::NotAvailable
            }
        });

        let type_label = if is_valid_parameter(target_id) {
            self.target_type_for(target_id)
        } else if is_valid_parameter(&family_id) {
            self.family_to_type(&family_id)
        } else {
            DEFAULT_TYPE.to_string()
        };
        let (class, subclass) = split_type(&type_label);

        let tree = if is_valid_parameter(&family_id) {
            self.families.chain(&family_id)
        } else {
            default_tree()
        };

        ClassificationRecord {
            target_id: target_id.to_string(),
            family_id: if is_valid_parameter(&family_id) {
                family_id
            } else {
                NOT_AVAILABLE.to_string()
            },
            class,
            subclass,
            tree,
            target_type: type_label,
            name: name.to_string(),
            ec_numbers,
            status,
        }
    }

    /// Classify by IUPHAR target id. Ambiguous (pipe-joined) or invalid ids
    /// resolve to the default record.
    pub fn by_target_id(&self, target_id: &str, optional_name: Option<&str>) -> ClassificationRecord {
        if !is_valid_parameter(target_id) || target_id.contains('|') {
            return ClassificationRecord::default();
        }
        let family_id = self.targets.target_family_id(target_id);
        self.build_record(target_id, &family_id, optional_name.unwrap_or(""), &[], None)
    }

    /// Classify by UniProt accession: resolve to a target id, then delegate.
    pub fn by_uniprot_id(&self, accession: &str) -> ClassificationRecord {
        let target_id = self.targets.target_id_by_uniprot(accession);
        if target_id.is_empty() {
            return ClassificationRecord::default();
        }
        self.by_target_id(&target_id, None)
    }

    /// Classify by family id alone.
    pub fn by_family_id(&self, family_id: &str, optional_name: Option<&str>) -> ClassificationRecord {
        if !is_valid_parameter(family_id) || family_id.contains('|') {
            return ClassificationRecord::default();
        }
        self.build_record(NOT_AVAILABLE, family_id, optional_name.unwrap_or(""), &[], None)
    }

    /// Classify by a raw (possibly pipe-joined) EC-number field.
    pub fn by_ec_number(&self, ec_field: &str, optional_name: Option<&str>) -> ClassificationRecord {
        let ec_numbers = parse_ec_field(ec_field);
        if !is_valid_ec_list(&ec_numbers) {
            return ClassificationRecord::default();
        }
        let derived = ec_numbers_to_type(&ec_numbers);
        let type_label = if derived.is_empty() {
            DEFAULT_TYPE.to_string()
        } else {
            derived
        };
        let (class, subclass) = split_type(&type_label);
        let tree = ec_numbers_to_chain(&ec_numbers);
        let name = optional_name.filter(|n| is_valid_parameter(n)).unwrap_or(NOT_AVAILABLE);

        ClassificationRecord {
            target_id: NOT_AVAILABLE.to_string(),
            family_id: NOT_AVAILABLE.to_string(),
            class,
            subclass,
            tree,
            target_type: type_label,
            name: name.to_string(),
            ec_numbers,
            status: Status::EcNumber,
        }
    }

    /// Classify by free text: try the synonym lookup first, then the family
    /// lookup, then the keyword heuristic.
    pub fn by_name(&self, name: &str) -> ClassificationRecord {
        if !is_valid_parameter(name) {
            return ClassificationRecord::default();
        }
        let target_id = self.targets.target_id_by_name(name);
        let family_id = self.targets.family_id_by_name(name);

        let type_label = if is_valid_parameter(&target_id) {
            self.target_type_for(&target_id)
        } else if is_valid_parameter(&family_id) {
            self.family_to_type(&family_id)
        } else {
            name_to_type(name)
        };
        let (class, subclass) = split_type(&type_label);
        let tree = if is_valid_parameter(&family_id) {
            self.family_to_chain(&family_id)
        } else {
            default_tree()
        };

        ClassificationRecord {
            target_id: if is_valid_parameter(&target_id) {
                target_id
            } else {
                NOT_AVAILABLE.to_string()
            },
            family_id: if is_valid_parameter(&family_id) {
                family_id
            } else {
                NOT_AVAILABLE.to_string()
            },
            class,
            subclass,
            tree,
            target_type: type_label,
            name: name.to_string(),
            ec_numbers: Vec::new(),
            status: Status::Name,
        }
    }

    /// Single entry point combining all four candidate sources under the
    /// fixed precedence. Each candidate is resolved independently; the
    /// highest-precedence successful record is returned.
    pub fn classify(
        &self,
        target_id: &str,
        family_id: &str,
        ec_field: &str,
        name: &str,
    ) -> ClassificationRecord {
        let target_record = if is_valid_parameter(target_id) {
            self.by_target_id(target_id, Some(name))
        } else {
            ClassificationRecord::default()
        };
        let family_record = if is_valid_parameter(family_id) {
            self.by_family_id(family_id, Some(name))
        } else {
            ClassificationRecord::default()
        };
        let ec_record = self.by_ec_number(ec_field, Some(name));
        let name_record = self.by_name(name);

        let resolved = if matches!(target_record.status, Status::TargetId | Status::FamilyId) {
            target_record
        } else if family_record.status == Status::FamilyId {
            family_record
        } else if ec_record.status == Status::EcNumber {
            ec_record
        } else if name_record.status == Status::Name {
            name_record
        } else {
            ClassificationRecord::default()
        };
        trace!(
            status = %resolved.status,
            type_label = %resolved.target_type,
            "classified"
        );
        resolved
    }

    /// Full family-id path for a target: `"{target_id}#{chain joined by >}"`,
    /// empty when the target has no family.
    pub fn all_id(&self, target_id: &str) -> String {
        let family_id = self.targets.target_family_id(target_id);
        if family_id.is_empty() {
            return String::new();
        }
        let chain = self.families.chain(&family_id);
        format!("{}#{}", target_id, chain.join(">"))
    }

    /// Full family-name path for a target. The bare "enzyme" grouping label
    /// is skipped because it adds no information to the path.
    pub fn all_name(&self, target_id: &str) -> String {
        let family_id = self.targets.target_family_id(target_id);
        if family_id.is_empty() {
            return String::new();
        }
        let names: Vec<String> = self
            .families
            .chain(&family_id)
            .iter()
            .map(|id| self.families.family_name(id))
            .filter(|name| !name.is_empty() && name.to_lowercase() != "enzyme")
            .collect();
        format!("{}#{}", self.targets.target_name(target_id), names.join(">"))
    }
}
