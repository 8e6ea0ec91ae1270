use xot::{Node, Xot};

use crate::error::{Error, Result};
use crate::kind;
use crate::vector;

/// The dimensions declared by an array container.
///
/// A borrowed, stateless view: every call re-walks the container's direct
/// children and re-parses text, so it can never observe stale data. The
/// qualifying children are those carrying `mapType="vector"`; their
/// relative document order determines dimension indexing, regardless of
/// any parameter children interleaved between them.
pub struct Dimensions<'a> {
    xot: &'a Xot,
    container: Node,
}

impl<'a> Dimensions<'a> {
    pub fn new(xot: &'a Xot, container: Node) -> Self {
        Self { xot, container }
    }

    fn nodes(&self) -> impl Iterator<Item = Node> + 'a {
        let xot = self.xot;
        xot.children(self.container)
            .filter(move |&child| kind::is_vector(xot, child))
    }

    /// The number of dimensions declared by the container.
    ///
    /// An array description must declare at least one dimension; a
    /// container without any is reported as not found.
    pub fn count(&self) -> Result<usize> {
        let count = self.nodes().count();
        if count == 0 {
            return Err(self.no_dimensions());
        }
        Ok(count)
    }

    /// Per-dimension sizes in document order, and their product.
    ///
    /// The product is the required flattened length of every parameter
    /// payload in this container.
    pub fn sizes(&self) -> Result<(Vec<usize>, usize)> {
        let mut sizes = Vec::new();
        for node in self.nodes() {
            sizes.push(vector::read_vector(self.xot, node)?.len());
        }
        if sizes.is_empty() {
            return Err(self.no_dimensions());
        }
        let product = sizes.iter().product();
        Ok((sizes, product))
    }

    /// Tag names of the dimensions, in the same order as [`sizes`].
    ///
    /// [`sizes`]: Dimensions::sizes
    pub fn names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for node in self.nodes() {
            // qualifying children carry the discriminator, so they are
            // elements; skipping one here would desynchronize names from
            // sizes
            let name = kind::tag_name(self.xot, node).expect("dimension child is an element");
            names.push(name);
        }
        if names.is_empty() {
            return Err(self.no_dimensions());
        }
        Ok(names)
    }

    /// The values the dimension at `dim_index` ranges over.
    ///
    /// Indexes into the dimension children only, 0-based, in document
    /// order. An out-of-range index is reported as not found, matching
    /// how existing callers distinguish nothing beyond "no such
    /// dimension".
    pub fn values(&self, dim_index: usize) -> Result<Vec<f64>> {
        let node = self.nodes().nth(dim_index).ok_or_else(|| {
            Error::ElementNotFound(format!(
                "dimension {} of {}",
                dim_index,
                kind::describe(self.xot, self.container)
            ))
        })?;
        vector::read_vector(self.xot, node)
    }

    fn no_dimensions(&self) -> Error {
        Error::ElementNotFound(format!(
            "no dimension vectors under {}",
            kind::describe(self.xot, self.container)
        ))
    }
}
