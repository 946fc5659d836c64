//! Defines [`FixedArray`], a heap-allocated array whose length is part of its type.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use core::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::dump::Dump;
use crate::error::ArrayError;
use crate::iter::{IntoIter, Iter, IterMut};

/// An exclusively-owned, heap-allocated array of exactly `N` elements of type `T`.
///
/// The length is a const generic parameter: it cannot change, and [`Self::len`] needs no runtime
/// state. Every slot always holds a valid `T`; slots not explicitly set are `T::default()`.
///
/// ## Summary of supported operations
///
/// - Create with all-default elements ([`Self::new`]), all-zero elements ([`Self::zeroed`]), or
///   from a sequence of exactly `N` elements ([`Self::from_slice`], `TryFrom<Vec<T>>`,
///   `From<[T; N]>`).
///
/// - Bounds-checked {get, mutable get, set} element at index; `first` / `last`.
///   Out-of-bounds access fails with [`ArrayError::IndexOutOfBounds`].
///   Subscript syntax (`a[i]`) is also available and panics instead.
///
/// - Bulk replace in place from a sequence of exactly `N` elements ([`Self::replace_all`]).
///
/// - Deep copy through [`Clone`]. Moving the array transfers the heap buffer without copying it;
///   the moved-from binding can no longer be used until it is reassigned.
///
/// ## Iterator support
///
/// - [`Self::iter`] and [`Self::iter_mut`] walk the elements in index order and can be restarted
///   any number of times. `&a`, `&mut a` and `a` itself are [`IntoIterator`].
///
/// Example:
/// ```
/// use dsa_arrays::{ArrayError, FixedArray};
/// let mut a = FixedArray::<i32, 5>::new();
/// assert_eq!(a.len(), 5);
/// assert!(a.iter().all(|&x| x == 0));
///
/// a.replace_all(&[1, 2, 3, 4, 5]).unwrap();
/// a.set(3, 0).unwrap();
/// a[0] = 8;
/// assert_eq!(a.as_slice(), &[8, 2, 3, 0, 5]);
/// assert_eq!(a.get(5), Err(ArrayError::IndexOutOfBounds { index: 5, len: 5 }));
/// assert_eq!(a.replace_all(&[1, 2]), Err(ArrayError::SizeMismatch { expected: 5, actual: 2 }));
/// assert_eq!(a.as_slice(), &[8, 2, 3, 0, 5]);
/// ```
///
#[derive(PartialEq, Eq, Hash)]
pub struct FixedArray<T, const N: usize>(Box<[T; N]>);

impl<T, const N: usize>
FixedArray<T, N> {
    /// The fixed length of this array.
    pub const LENGTH: usize = N;

    /// Creates an array with every element set to `T::default()`.
    pub fn new() -> Self
        where T: Default {
        Self::from_exact((0..N).map(|_| T::default()).collect())
    }

    /// Creates an array with every element set to zero.
    ///
    /// Example:
    /// ```
    /// use dsa_arrays::FixedArray;
    /// let a = FixedArray::<f64, 3>::zeroed();
    /// assert_eq!(a.as_slice(), &[0.0, 0.0, 0.0]);
    /// ```
    pub fn zeroed() -> Self
        where T: Zero {
        Self::from_exact((0..N).map(|_| T::zero()).collect())
    }

    /// Creates an array by cloning `values` element-wise.
    /// Fails with [`ArrayError::SizeMismatch`] unless `values` has exactly `N` elements.
    pub fn from_slice(values: &[T]) -> Result<Self, ArrayError>
        where T: Clone {
        ArrayError::check_size(N, values.len())?;
        Ok(Self::from_exact(values.to_vec()))
    }

    /// Moves `elems` into the boxed array in place; the elements never pass through the stack.
    /// `elems.len()` must be `N`.
    fn from_exact(elems: Vec<T>) -> Self {
        let buf: Result<Box<[T; N]>, Box<[T]>> = elems.into_boxed_slice().try_into();
        match buf {
            Ok(buf) => Self(buf),
            Err(rejected) => unreachable!("{} elements built for an array of length {}", rejected.len(), N),
        }
    }

    /// Returns the (fixed) length of this array.
    pub const fn len(&self) -> usize { N }

    /// Returns whether this array has no slots at all, i.e. `N == 0`.
    pub const fn is_empty(&self) -> bool { N == 0 }

    ////////////////////////////////////////////////////////////////////
    // index

    /// Returns a reference to the `i`-th element.
    /// Fails with [`ArrayError::IndexOutOfBounds`] if `i >= N`.
    pub fn get(&self, i: usize) -> Result<&T, ArrayError> {
        ArrayError::check_index(i, N).map(|i| &self.0[i])
    }

    /// Returns a mutable reference to the `i`-th element.
    /// Fails with [`ArrayError::IndexOutOfBounds`] if `i >= N`.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut T, ArrayError> {
        ArrayError::check_index(i, N).map(|i| &mut self.0[i])
    }

    /// Sets the `i`-th element to `elem`, dropping the previous value.
    /// Fails with [`ArrayError::IndexOutOfBounds`] if `i >= N`, leaving the array untouched.
    pub fn set(&mut self, i: usize, elem: T) -> Result<(), ArrayError> {
        *self.get_mut(i)? = elem;
        Ok(())
    }

    /// Returns the first element; fails with [`ArrayError::IndexOutOfBounds`] when `N == 0`.
    pub fn first(&self) -> Result<&T, ArrayError> { self.get(0) }

    /// Returns the last element; fails with [`ArrayError::IndexOutOfBounds`] when `N == 0`.
    pub fn last(&self) -> Result<&T, ArrayError> { self.get(N.saturating_sub(1)) }

    /// Mutable counterpart of [`Self::first`].
    pub fn first_mut(&mut self) -> Result<&mut T, ArrayError> { self.get_mut(0) }

    /// Mutable counterpart of [`Self::last`].
    pub fn last_mut(&mut self) -> Result<&mut T, ArrayError> { self.get_mut(N.saturating_sub(1)) }

    ////////////////////////////////////////////////////////////////////
    // bulk

    /// Overwrites every element with the corresponding element of `values`.
    /// Fails with [`ArrayError::SizeMismatch`] unless `values` has exactly `N` elements;
    /// on failure no element is changed.
    pub fn replace_all(&mut self, values: &[T]) -> Result<(), ArrayError>
        where T: Clone {
        ArrayError::check_size(N, values.len())?;
        log::trace!("replacing all {} elements of fixed array", N);
        self.0.clone_from_slice(values);
        Ok(())
    }

    ////////////////////////////////////////////////////////////////////
    // views

    /// Returns all elements as a slice of length `N`.
    pub fn as_slice(&self) -> &[T] { self.0.as_slice() }

    /// Returns all elements as a mutable slice of length `N`.
    pub fn as_mut_slice(&mut self) -> &mut [T] { self.0.as_mut_slice() }

    /// Returns an iterator over the elements, in index order.
    pub fn iter(&self) -> Iter<'_, T> { Iter::new(self.as_slice()) }

    /// Returns an iterator that allows modifying each element in place.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> { IterMut::new(self.as_mut_slice()) }

    /// Returns a [`Display`](core::fmt::Display) adapter that lists every element on its own line.
    pub fn dump(&self) -> Dump<'_, T> { Dump::new(self.as_slice()) }
}

impl<T: Clone, const N: usize>
Clone for FixedArray<T, N> {
    fn clone(&self) -> Self { Self::from_exact(self.as_slice().to_vec()) }

    fn clone_from(&mut self, source: &Self) { self.0.clone_from_slice(source.as_slice()) }
}

impl<T: Default, const N: usize>
Default for FixedArray<T, N> {
    fn default() -> Self { Self::new() }
}

impl<T, const N: usize>
From<[T; N]> for FixedArray<T, N> {
    fn from(values: [T; N]) -> Self { Self(Box::new(values)) }
}

impl<T, const N: usize>
From<FixedArray<T, N>> for [T; N] {
    fn from(a: FixedArray<T, N>) -> Self { *a.0 }
}

/// Takes over the heap buffer of `values` without cloning the elements.
impl<T, const N: usize>
TryFrom<Vec<T>> for FixedArray<T, N> {
    type Error = ArrayError;
    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        ArrayError::check_size(N, values.len())?;
        Ok(Self::from_exact(values))
    }
}

impl<T, const N: usize>
Index<usize> for FixedArray<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T, const N: usize>
IndexMut<usize> for FixedArray<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.get_mut(i) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T, const N: usize>
IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T, const N: usize>
IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T, const N: usize>
IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter { IntoIter::new(self.0) }
}

impl<T: Debug, const N: usize>
Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
