//! Dense N-dimensional numeric arrays embedded in XML trees.
//!
//! An array is described by a container element whose children are
//! discriminated by a `mapType` attribute: `vector` children declare the
//! dimensions (their text holds the distinct values each axis ranges
//! over), `array` children hold named parameter payloads, flattened in
//! row-major order across all dimensions. All numeric content is a
//! `;`-delimited list of doubles:
//!
//! ```xml
//! <aeroPerformanceMap>
//!     <machNumber mapType="vector">0.3;0.5</machNumber>
//!     <angleOfAttack mapType="vector">0;5;10</angleOfAttack>
//!     <cl mapType="array">0.1;0.2;0.3;0.4;0.5;0.6</cl>
//! </aeroPerformanceMap>
//! ```
//!
//! The crate operates on [`xot`] trees owned by the caller; it never
//! parses or serializes XML itself. All reads are stateless and
//! re-walk the tree, so repeated calls against an unmodified tree are
//! safe from any number of threads; mutating the tree concurrently with
//! a read is the caller's problem to serialize.

mod array;
mod dimension;
mod error;
mod index;
mod kind;
mod parameter;
mod tokenize;
mod vector;
mod write;

pub use crate::array::read_array;
pub use crate::dimension::Dimensions;
pub use crate::error::{Error, Result};
pub use crate::index::value_at;
pub use crate::parameter::Parameters;
pub use crate::vector::read_vector;
pub use crate::write::{write_array, write_vector};
