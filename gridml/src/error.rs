use thiserror::Error;

/// Errors reported while decoding or encoding embedded arrays.
///
/// All of these are data-shape errors: the caller handed us a tree or a
/// coordinate that does not describe a well-formed dense array. They are
/// recoverable and never leave partially-filled buffers behind.
#[derive(Debug, Error)]
pub enum Error {
    /// A structurally required element is absent, or a requested
    /// dimension index is outside the discovered range.
    #[error("element not found: {0}")]
    ElementNotFound(String),
    /// The element exists but lacks the discriminator attribute, or its
    /// value does not mark the expected kind of node.
    #[error("attribute {attribute} not found on element {element}")]
    AttributeNotFound { element: String, attribute: String },
    /// A payload's token count does not equal the expected flattened
    /// length (the product of all dimension sizes).
    #[error("payload has {actual} values where {expected} were expected")]
    NonMatchingSize { expected: usize, actual: usize },
    /// A token in a delimited payload does not parse as a double.
    #[error("cannot parse {0:?} as a number")]
    NoNumber(String),
    /// A coordinate or a computed offset falls outside valid bounds.
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),
    #[error("XML tree error")]
    Xot(#[from] xot::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
