//! Keyword fallback classifier for free-text target names
use super::record::{is_valid_parameter, DEFAULT_TYPE};

/// Ordered keyword ladder; the first matching rule wins.
const RULES: &[(&[&str], &str)] = &[
    (&["kinase"], "Enzyme.Transferase"),
    (&["oxidase", "reductase"], "Enzyme.Oxidoreductase"),
    (&["hydrolase", "protease", "phosphatases"], "Enzyme.Hydrolase"),
    (&["atpase"], "Transporter.N/A"),
    (&["solute carrier"], "Transporter.SLC superfamily of solute carrier"),
    (&["transport"], "Transporter.N/A"),
    (&["channel"], "Ion channel.N/A"),
    (&["hormone"], "Receptor.Nuclear hormone receptor"),
];

/// Classify a free-text name; unmatched or invalid input falls back to the
/// catch-all type.
pub fn name_to_type(name: &str) -> String {
    if !is_valid_parameter(name) {
        return DEFAULT_TYPE.to_string();
    }
    let lowered = name.to_lowercase();
    for (keywords, type_label) in RULES {
        if keywords.iter().any(|k| lowered.contains(k)) {
            return type_label.to_string();
        }
    }
    DEFAULT_TYPE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_matches() {
        assert_eq!(name_to_type("Example Kinase"), "Enzyme.Transferase");
        assert_eq!(name_to_type("aldehyde oxidase"), "Enzyme.Oxidoreductase");
        assert_eq!(name_to_type("steroid reductase"), "Enzyme.Oxidoreductase");
        assert_eq!(name_to_type("serine protease 1"), "Enzyme.Hydrolase");
        assert_eq!(name_to_type("Na+/K+ ATPase"), "Transporter.N/A");
        assert_eq!(
            name_to_type("solute carrier family 6"),
            "Transporter.SLC superfamily of solute carrier"
        );
        assert_eq!(name_to_type("zinc transporter"), "Transporter.N/A");
        assert_eq!(name_to_type("potassium channel"), "Ion channel.N/A");
        assert_eq!(
            name_to_type("thyroid hormone receptor"),
            "Receptor.Nuclear hormone receptor"
        );
    }

    #[test]
    fn test_first_rule_wins() {
        // "kinase" outranks "channel"
        assert_eq!(
            name_to_type("channel kinase"),
            "Enzyme.Transferase"
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(
            name_to_type("uncharacterised protein"),
            "Other Protein Target.Other Protein Target"
        );
        assert_eq!(name_to_type(""), "Other Protein Target.Other Protein Target");
        assert_eq!(name_to_type("N/A"), "Other Protein Target.Other Protein Target");
    }
}
