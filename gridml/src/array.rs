use xot::{Node, Xot};

use crate::error::{Error, Result};
use crate::kind;
use crate::tokenize;

/// Reads a parameter's flattened payload.
///
/// Locates the single direct child of `container` whose tag equals
/// `parameter_name` and parses its delimited text content into a flat
/// buffer. `expected_size` is normally the dimension-size product from
/// [`Dimensions::sizes`]; a payload with any other token count is
/// rejected without returning a partial buffer.
///
/// A child that exists under the right name but carries a missing or
/// wrong `mapType` discriminator fails with [`Error::AttributeNotFound`].
/// This also catches a `parameter_name` that accidentally names a
/// dimension vector.
///
/// [`Dimensions::sizes`]: crate::Dimensions::sizes
pub fn read_array(
    xot: &Xot,
    container: Node,
    parameter_name: &str,
    expected_size: usize,
) -> Result<Vec<f64>> {
    let node = child_by_name(xot, container, parameter_name)
        .ok_or_else(|| Error::ElementNotFound(parameter_name.to_string()))?;
    if !kind::is_array(xot, node) {
        return Err(Error::AttributeNotFound {
            element: parameter_name.to_string(),
            attribute: kind::MAP_TYPE.to_string(),
        });
    }
    let values = tokenize::parse_values(&xot.string_value(node))?;
    if values.len() != expected_size {
        return Err(Error::NonMatchingSize {
            expected: expected_size,
            actual: values.len(),
        });
    }
    Ok(values)
}

fn child_by_name(xot: &Xot, container: Node, name: &str) -> Option<Node> {
    // a name absent from the arena cannot name any element
    let name_id = xot.name(name)?;
    xot.children(container).find(|&child| {
        xot.element(child)
            .map(|element| element.name() == name_id)
            .unwrap_or(false)
    })
}
