//! Line-oriented text rendering of array contents, for debugging.

use core::fmt::{Display, Formatter};

/// Renders each element as `Index: <i> | Value: <v>` followed by a newline, in index order.
///
/// Returned by `dump()` on [`crate::FixedArray`] and [`crate::GrowableArray`]; use it with
/// `{}` formatting.
///
/// Example:
/// ```
/// use dsa_arrays::GrowableArray;
/// let v = GrowableArray::from([1, 2, 3]);
/// assert_eq!(v.dump().to_string(), "Index: 0 | Value: 1\nIndex: 1 | Value: 2\nIndex: 2 | Value: 3\n");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Dump<'a, T>(&'a [T]);

impl<'a, T> Dump<'a, T> {
    pub(crate) fn new(elems: &'a [T]) -> Self { Self(elems) }
}

impl<T: Display> Display for Dump<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for (i, elem) in self.0.iter().enumerate() {
            writeln!(f, "Index: {} | Value: {}", i, elem)?;
        }
        Ok(())
    }
}
