//! Best-effort conversion of property nodes to field values
//!
//! None of these fail. A missing child, an absent value or an unparseable
//! number yields the type's zero value, so a single bad field never costs the
//! rest of the record.

use crate::formats::exml::PropertyNode;

/// Path prefix of icon textures in the data tables.
pub const ICON_PREFIX: &str = "TEXTURES/UI/FRONTEND/ICONS/";

/// File extension of icon textures in the data tables.
pub const ICON_SUFFIX: &str = ".DDS";

/// The node's own value.
pub fn scalar(node: &PropertyNode) -> &str {
    node.value_str()
}

/// The value of the node's first child.
///
/// Enum-like fields are stored one level down, e.g.
/// `<Property name="Rarity" value="GcRarity.xml"><Property name="Rarity" value="Common" /></Property>`.
pub fn indirect(node: &PropertyNode) -> &str {
    node.first_child().map(PropertyNode::value_str).unwrap_or_default()
}

/// [`indirect`] applied to every child.
pub fn indirect_list(node: &PropertyNode) -> Vec<String> {
    node.children
        .iter()
        .map(|child| indirect(child).to_string())
        .collect()
}

/// `true` only for the literal token `True`.
pub fn boolean(node: &PropertyNode) -> bool {
    node.value_str() == "True"
}

/// Base-10 integer, 0 on failure.
pub fn integer(node: &PropertyNode) -> i64 {
    node.value_str().parse().unwrap_or(0)
}

/// Decimal float, 0.0 on failure.
pub fn float(node: &PropertyNode) -> f64 {
    node.value_str().parse().unwrap_or(0.0)
}

/// Canonical icon id from an icon texture path.
pub fn icon_path(node: &PropertyNode) -> String {
    canonical_icon(indirect(node))
}

/// Strip the icon directory and extension, then lower-case.
///
/// `TEXTURES/UI/FRONTEND/ICONS/U4PRODUCTS/PRODUCT.CASING.DDS` becomes
/// `u4products/product.casing`.
pub fn canonical_icon(path: &str) -> String {
    let path = path.strip_prefix(ICON_PREFIX).unwrap_or(path);
    let path = path.strip_suffix(ICON_SUFFIX).unwrap_or(path);
    path.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: &str) -> PropertyNode {
        PropertyNode::with_value("Field", value)
    }

    #[test]
    fn test_boolean() {
        assert!(boolean(&leaf("True")));
        assert!(!boolean(&leaf("true")));
        assert!(!boolean(&leaf("false")));
        assert!(!boolean(&leaf("")));
        assert!(!boolean(&PropertyNode::new("Field")));
    }

    #[test]
    fn test_numbers_default_to_zero() {
        assert_eq!(integer(&leaf("42")), 42);
        assert_eq!(integer(&leaf("-7")), -7);
        assert_eq!(integer(&leaf("4.5")), 0);
        assert_eq!(integer(&PropertyNode::new("Field")), 0);

        assert!((float(&leaf("0.25")) - 0.25).abs() < f64::EPSILON);
        assert!(float(&leaf("abc")).abs() < f64::EPSILON);
    }

    #[test]
    fn test_indirect() {
        let node = PropertyNode::with_value("Rarity", "GcRarity.xml")
            .child_node(PropertyNode::with_value("Rarity", "Rare"));
        assert_eq!(indirect(&node), "Rare");
        assert_eq!(scalar(&node), "GcRarity.xml");
        assert_eq!(indirect(&PropertyNode::new("Rarity")), "");
    }

    #[test]
    fn test_indirect_list() {
        let node = PropertyNode::new("ChargeBy")
            .child_node(PropertyNode::new("").child_node(PropertyNode::with_value("ID", "FUEL1")))
            .child_node(PropertyNode::new("").child_node(PropertyNode::with_value("ID", "LAUNCHSUB")));
        assert_eq!(indirect_list(&node), vec!["FUEL1", "LAUNCHSUB"]);
        assert!(indirect_list(&PropertyNode::new("ChargeBy")).is_empty());
    }

    #[test]
    fn test_canonical_icon() {
        assert_eq!(
            canonical_icon("TEXTURES/UI/FRONTEND/ICONS/U4PRODUCTS/PRODUCT.CASING.DDS"),
            "u4products/product.casing"
        );
        // Prefix and suffix match is case-sensitive
        assert_eq!(
            canonical_icon("textures/ui/frontend/icons/FOO.dds"),
            "textures/ui/frontend/icons/foo.dds"
        );
        assert_eq!(canonical_icon(""), "");
    }

    #[test]
    fn test_icon_path_reads_first_child() {
        let node = PropertyNode::with_value("Icon", "TkTextureResource.xml").child_node(
            PropertyNode::with_value("Filename", "TEXTURES/UI/FRONTEND/ICONS/SUBSTANCES/FUEL.1.DDS"),
        );
        assert_eq!(icon_path(&node), "substances/fuel.1");
    }
}
