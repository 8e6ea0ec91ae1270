use xot::{Node, Xot};

use crate::error::{Error, Result};
use crate::kind;
use crate::tokenize;

/// Reads a dimension vector node.
///
/// The node must carry the `mapType="vector"` discriminator; a node under
/// the right name but of the wrong kind is treated as not found. Its
/// entire text content is a `;`-delimited list of doubles, returned in
/// token order. The vector's size is the returned length.
pub fn read_vector(xot: &Xot, node: Node) -> Result<Vec<f64>> {
    if !kind::is_vector(xot, node) {
        return Err(Error::ElementNotFound(kind::describe(xot, node)));
    }
    tokenize::parse_values(&xot.string_value(node))
}
