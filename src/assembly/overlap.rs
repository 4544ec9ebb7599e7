//! Directed suffix/prefix overlap cost between two fragments.

use crate::error::{Error, Result};

/// Returns the smallest shift `i >= 1` such that `a[i..]` equals the prefix of
/// `b` of the same length.
///
/// When no shift aligns the two fragments the full length is returned, which
/// is the worst possible cost. The metric is directed: `overlap(a, b)` and
/// `overlap(b, a)` generally differ.
///
/// # Arguments
///
/// * `a` - Fragment that comes first in the assembly
/// * `b` - Fragment that follows `a`
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] when the fragments differ in length.
pub fn overlap(a: &str, b: &str) -> Result<usize> {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let len = a.len();
    let shift = (1..len)
        .find(|&i| a[i..] == b[..len - i])
        .unwrap_or(len);
    Ok(shift)
}
