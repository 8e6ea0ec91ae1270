use xot::{Node, Xot};

use crate::error::{Error, Result};
use crate::kind;

/// The parameter payloads declared by an array container.
///
/// Stateless like [`Dimensions`]: the container's direct children are
/// re-walked on every call. Qualifying children carry `mapType="array"`.
/// Parameters are looked up by name, so their document order only matters
/// for enumeration, not for any index arithmetic.
///
/// [`Dimensions`]: crate::Dimensions
pub struct Parameters<'a> {
    xot: &'a Xot,
    container: Node,
}

impl<'a> Parameters<'a> {
    pub fn new(xot: &'a Xot, container: Node) -> Self {
        Self { xot, container }
    }

    fn nodes(&self) -> impl Iterator<Item = Node> + 'a {
        let xot = self.xot;
        xot.children(self.container)
            .filter(move |&child| kind::is_array(xot, child))
    }

    /// The number of parameter payloads under the container.
    ///
    /// A container without any payload is reported as not found.
    pub fn count(&self) -> Result<usize> {
        let count = self.nodes().count();
        if count == 0 {
            return Err(self.no_parameters());
        }
        Ok(count)
    }

    /// Tag names of the parameter payloads, in document order.
    pub fn names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for node in self.nodes() {
            // qualifying children carry the discriminator, so they are
            // elements
            let name = kind::tag_name(self.xot, node).expect("parameter child is an element");
            names.push(name);
        }
        if names.is_empty() {
            return Err(self.no_parameters());
        }
        Ok(names)
    }

    fn no_parameters(&self) -> Error {
        Error::ElementNotFound(format!(
            "no parameter arrays under {}",
            kind::describe(self.xot, self.container)
        ))
    }
}
