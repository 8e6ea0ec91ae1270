use xot::{Node, Xot};

/// The discriminator attribute distinguishing dimension vectors from
/// payload arrays among a container's children.
pub(crate) const MAP_TYPE: &str = "mapType";
/// Discriminator value for a dimension vector node.
pub(crate) const VECTOR: &str = "vector";
/// Discriminator value for a parameter payload node.
pub(crate) const ARRAY: &str = "array";

fn has_map_type(xot: &Xot, node: Node, expected: &str) -> bool {
    if !xot.is_element(node) {
        return false;
    }
    // if the name is not in the arena at all, no node carries it
    let Some(name) = xot.name(MAP_TYPE) else {
        return false;
    };
    match xot.get_attribute(node, name) {
        Some(value) => value == expected,
        None => false,
    }
}

pub(crate) fn is_vector(xot: &Xot, node: Node) -> bool {
    has_map_type(xot, node, VECTOR)
}

pub(crate) fn is_array(xot: &Xot, node: Node) -> bool {
    has_map_type(xot, node, ARRAY)
}

/// Local tag name of an element node.
pub(crate) fn tag_name(xot: &Xot, node: Node) -> Option<String> {
    let element = xot.element(node)?;
    let (local, _) = xot.name_ns_str(element.name());
    Some(local.to_string())
}

/// Human-readable handle on a node, for error messages.
pub(crate) fn describe(xot: &Xot, node: Node) -> String {
    tag_name(xot, node).unwrap_or_else(|| "(not an element)".to_string())
}
