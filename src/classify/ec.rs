//! Enzyme Commission number mapping
//!
//! The leading digit of an EC number (`a.b.c.d`) names the broad enzyme
//! class. A mixed set of leading digits marks a multifunctional enzyme.
use super::record::{default_tree, is_valid_ec_list, EC_NOT_ASSIGNED, NOT_AVAILABLE};

/// Derive the "class.subclass" label for a set of EC numbers; empty string
/// when the set carries no classifiable code.
pub fn ec_numbers_to_type(ec_numbers: &[String]) -> String {
    if !is_valid_ec_list(ec_numbers) {
        return String::new();
    }
    let mut prefixes: Vec<&str> = Vec::new();
    for number in ec_numbers {
        if let Some((prefix, _)) = number.split_once('.') {
            if !prefix.is_empty() && !prefixes.contains(&prefix) {
                prefixes.push(prefix);
            }
        }
    }
    match prefixes.as_slice() {
        [] => String::new(),
        [code] => match *code {
            "1" => "Enzyme.Oxidoreductase",
            "2" => "Enzyme.Transferase",
            "3" => "Enzyme.Hydrolase",
            "4" => "Enzyme.Lyase",
            "5" => "Enzyme.Isomerase",
            "6" => "Enzyme.Ligase",
            "7" => "Enzyme.Translocase",
            _ => "",
        }
        .to_string(),
        _ => "Enzyme.Multifunctional".to_string(),
    }
}

/// Two-element chain anchor for a resolved "class.subclass" label, nearest
/// first. Labels without an anchor fall back to the default sentinel chain.
pub fn type_to_chain(type_label: &str) -> Vec<String> {
    let anchor: Option<[&str; 2]> = match type_label {
        "Enzyme.Oxidoreductase" => Some(["0690-1", "0690"]),
        "Enzyme.Transferase" => Some(["0690-2", "0690"]),
        "Enzyme.Multifunctional" => Some(["0690-3", "0690"]),
        "Enzyme.Hydrolase" => Some(["0690-4", "0690"]),
        "Enzyme.Isomerase" => Some(["0690-5", "0690"]),
        "Enzyme.Lyase" => Some(["0690-6", "0690"]),
        "Enzyme.Ligase" => Some(["0690-6", "0690"]),
        "Receptor.Catalytic receptor" => Some(["0862", "0688"]),
        "Receptor.G protein-coupled receptor" => Some(["0694", "0688"]),
        "Receptor.Nuclear hormone receptor" => Some(["0095", "0688"]),
        "Transporter.ATP-binding cassette transporter family" => Some(["0136", "0691"]),
        "Transporter.F-type and V-type ATPase" => Some(["0137", "0691"]),
        "Transporter.P-type ATPase" => Some(["0138", "0691"]),
        "Transporter.SLC superfamily of solute carrier" => Some(["0863", "0691"]),
        "Ion channel.Ligand-gated ion channel" => Some(["0697", "0689"]),
        "Ion channel.Other ion channel" => Some(["0861", "0689"]),
        "Ion channel.Voltage-gated ion channel" => Some(["0696", "0689"]),
        _ => None,
    };
    match anchor {
        Some([child, root]) => vec![child.to_string(), root.to_string()],
        None => default_tree(),
    }
}

pub fn ec_numbers_to_chain(ec_numbers: &[String]) -> Vec<String> {
    type_to_chain(&ec_numbers_to_type(ec_numbers))
}

/// Parse a raw EC field into a cleaned list. The field is pipe-delimited;
/// anything without a dot or pipe is not an EC list at all. Placeholder
/// entries are dropped.
pub fn parse_ec_field(raw: &str) -> Vec<String> {
    if !raw.contains('.') && !raw.contains('|') {
        return Vec::new();
    }
    raw.split('|')
        .map(str::trim)
        .filter(|item| !item.is_empty() && *item != NOT_AVAILABLE && *item != EC_NOT_ASSIGNED)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_class_mapping() {
        assert_eq!(ec_numbers_to_type(&list(&["1.2.3.4"])), "Enzyme.Oxidoreductase");
        assert_eq!(ec_numbers_to_type(&list(&["7.1.1.1"])), "Enzyme.Translocase");
        assert_eq!(
            ec_numbers_to_type(&list(&["3.4.21.1", "3.4.22.9"])),
            "Enzyme.Hydrolase"
        );
    }

    #[test]
    fn test_mixed_classes_are_multifunctional() {
        assert_eq!(
            ec_numbers_to_type(&list(&["1.2.3.4", "2.7.11.1"])),
            "Enzyme.Multifunctional"
        );
    }

    #[test]
    fn test_unknown_or_invalid_input() {
        assert_eq!(ec_numbers_to_type(&list(&["9.9.9.9"])), "");
        assert_eq!(ec_numbers_to_type(&list(&[])), "");
        assert_eq!(ec_numbers_to_type(&list(&["nodots"])), "");
    }

    #[test]
    fn test_chain_anchors() {
        assert_eq!(ec_numbers_to_chain(&list(&["1.2.3.4"])), vec!["0690-1", "0690"]);
        assert_eq!(ec_numbers_to_chain(&list(&["6.1.1.1"])), vec!["0690-6", "0690"]);
        // Translocase has no anchor of its own
        assert_eq!(ec_numbers_to_chain(&list(&["7.1.1.1"])), vec!["0864-1", "0864"]);
        assert_eq!(ec_numbers_to_chain(&list(&[])), vec!["0864-1", "0864"]);
    }

    #[test]
    fn test_parse_ec_field() {
        assert_eq!(parse_ec_field("1.2.3.4"), list(&["1.2.3.4"]));
        assert_eq!(
            parse_ec_field("1.2.3.4| 2.7.11.1 |EC-not-assigned|"),
            list(&["1.2.3.4", "2.7.11.1"])
        );
        assert_eq!(parse_ec_field("plain text"), Vec::<String>::new());
        assert_eq!(parse_ec_field(""), Vec::<String>::new());
    }
}
