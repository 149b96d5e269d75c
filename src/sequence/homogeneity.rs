//! Runtime homogeneity checking for type-erased sequences.
//!
//! The reference type is the runtime type of the first element. Type
//! equality is nominal: a value of any other concrete type is a mismatch,
//! whatever traits the two types share.

use crate::error::{Error, Result};

use super::Dynamic;

/// Returns `true` if every value has the runtime type of the first one.
///
/// An empty slice is vacuously homogeneous.
///
/// # Examples
///
/// ```rust
/// use fpbox::sequence::{Dynamic, is_homogeneous};
///
/// assert!(is_homogeneous(&[]));
/// assert!(is_homogeneous(&[Dynamic::new(1), Dynamic::new(2), Dynamic::new(3)]));
/// assert!(!is_homogeneous(&[Dynamic::new(1), Dynamic::new(2), Dynamic::new("3")]));
/// ```
pub fn is_homogeneous(values: &[Dynamic]) -> bool {
    first_mismatch(values).is_none()
}

/// Like [`is_homogeneous`], but reports the first offending element.
///
/// # Errors
///
/// Returns [`Error::TypeMismatch`] naming the index and type of the first
/// value whose runtime type differs from the first value's.
pub fn check_homogeneous(values: &[Dynamic]) -> Result<()> {
    match first_mismatch(values) {
        None => Ok(()),
        Some(index) => {
            let error = Error::TypeMismatch {
                index,
                expected: values[0].type_name(),
                found: values[index].type_name(),
            };
            tracing::debug!(%error, length = values.len(), "sequence is not homogeneous");
            Err(error)
        }
    }
}

fn first_mismatch(values: &[Dynamic]) -> Option<usize> {
    let (first, rest) = values.split_first()?;
    let reference = first.runtime_type();
    rest.iter()
        .position(|value| value.runtime_type() != reference)
        .map(|offset| offset + 1)
}
