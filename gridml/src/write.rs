use xot::{Node, Xot};

use crate::error::{Error, Result};
use crate::kind;
use crate::tokenize;

/// Adds a dimension vector element under `parent`.
///
/// The new element is tagged `name`, carries `mapType="vector"`, and
/// holds the values joined with `;`. Reading it back with
/// [`read_vector`] returns the same values; an empty slice writes an
/// empty payload, which deliberately does not read back as a vector of
/// size zero.
///
/// [`read_vector`]: crate::read_vector
pub fn write_vector(xot: &mut Xot, parent: Node, name: &str, values: &[f64]) -> Result<Node> {
    write_payload(xot, parent, name, kind::VECTOR, values)
}

/// Adds a parameter payload element under `parent`.
///
/// `values` must already be flattened in row-major order across `sizes`;
/// only the total length is validated here, against the product of
/// `sizes`. On a mismatch nothing is added to the tree.
pub fn write_array(
    xot: &mut Xot,
    parent: Node,
    name: &str,
    sizes: &[usize],
    values: &[f64],
) -> Result<Node> {
    let expected: usize = sizes.iter().product();
    if values.len() != expected {
        return Err(Error::NonMatchingSize {
            expected,
            actual: values.len(),
        });
    }
    write_payload(xot, parent, name, kind::ARRAY, values)
}

fn write_payload(
    xot: &mut Xot,
    parent: Node,
    name: &str,
    map_type: &str,
    values: &[f64],
) -> Result<Node> {
    let name_id = xot.add_name(name);
    let map_type_id = xot.add_name(kind::MAP_TYPE);

    let node = xot.new_element(name_id);
    xot.set_attribute(node, map_type_id, map_type);

    if !values.is_empty() {
        let text = xot.new_text(&tokenize::format_values(values));
        xot.append(node, text)?;
    }
    xot.append(parent, node)?;
    Ok(node)
}
