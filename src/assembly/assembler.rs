//! Merges an ordered fragment route into a single sequence.

use super::overlap::overlap;
use crate::error::{Error, Result};

/// Assembles a route of equal-length fragments into one sequence.
///
/// Starting from the first fragment, every following fragment contributes only
/// the characters that extend past its overlap with the previous one: with a
/// shift of `s` the last `s` characters are appended.
///
/// # Errors
///
/// Returns [`Error::EmptyRoute`] for an empty route and
/// [`Error::LengthMismatch`] if fragments differ in length.
pub fn assemble<S: AsRef<str>>(route: &[S]) -> Result<String> {
    let Some((first, rest)) = route.split_first() else {
        return Err(Error::EmptyRoute);
    };

    let mut previous = first.as_ref();
    let mut sequence = String::with_capacity(previous.len() + rest.len());
    sequence.push_str(previous);

    for next in rest {
        let next = next.as_ref();
        let shift = overlap(previous, next)?;
        sequence.push_str(&next[next.len() - shift..]);
        previous = next;
    }

    Ok(sequence)
}
