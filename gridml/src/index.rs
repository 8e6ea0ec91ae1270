use crate::error::{Error, Result};

/// Row-major lookup into a flattened buffer.
///
/// `sizes` are the per-dimension sizes, `coord` a coordinate with one
/// index per dimension; the last dimension varies fastest. All bounds are
/// checked: a `sizes`/`coord` length mismatch, an out-of-range coordinate
/// component, or a computed offset past the end of `buffer` is reported
/// as [`Error::IndexOutOfRange`], never read.
pub fn value_at(buffer: &[f64], sizes: &[usize], coord: &[usize]) -> Result<f64> {
    if sizes.is_empty() || sizes.len() != coord.len() {
        return Err(Error::IndexOutOfRange(format!(
            "coordinate has {} indices for {} dimensions",
            coord.len(),
            sizes.len()
        )));
    }
    let mut index: usize = 0;
    for (dim, (&size, &c)) in sizes.iter().zip(coord).enumerate() {
        if c >= size {
            return Err(Error::IndexOutOfRange(format!(
                "coordinate {c} exceeds size {size} of dimension {dim}"
            )));
        }
        // an offset no buffer can hold is out of range like any other
        index = index
            .checked_mul(size)
            .and_then(|stride| stride.checked_add(c))
            .ok_or_else(|| {
                Error::IndexOutOfRange(format!("offset overflows at dimension {dim}"))
            })?;
    }
    buffer.get(index).copied().ok_or_else(|| {
        Error::IndexOutOfRange(format!(
            "offset {index} past the end of a buffer of {}",
            buffer.len()
        ))
    })
}
