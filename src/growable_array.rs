//! Defines [`GrowableArray`], a heap-allocated array that grows and shrinks at either end.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use core::ops::{Index, IndexMut};

use crate::dump::Dump;
use crate::error::ArrayError;
use crate::iter::{IntoIter, Iter, IterMut};

/// An exclusively-owned, heap-allocated array of `0..` elements of type `T`.
///
/// Storage is always sized exactly to the number of live elements: every operation that changes
/// the length moves the surviving elements into a freshly allocated buffer of the new size.
/// There is no spare capacity, so [`Self::len`] is both the element count and the buffer size.
///
/// ## Summary of supported operations
///
/// - Create empty ([`Self::new`]) or from a sequence of any length ([`Self::from_slice`],
///   `From<Vec<T>>`, `From<[T; M]>`, [`FromIterator`]).
///
/// - Bounds-checked {get, mutable get, set} element at index; `first` / `last`.
///   Out-of-bounds access fails with [`ArrayError::IndexOutOfBounds`].
///   Subscript syntax (`v[i]`) is also available and panics instead.
///
/// - Push at {front, back}; pop at {front, back} (fails with [`ArrayError::EmptyContainer`]
///   when empty); remove at index. Removed elements are returned to the caller.
///
/// - Bulk replace with a sequence of any length ([`Self::replace_all`]).
///
/// - Deep copy through [`Clone`]. Moving transfers the buffer; [`Self::take`] moves the contents
///   out through a `&mut` and leaves an empty array behind.
///
/// ## Iterator support
///
/// - [`Self::iter`] and [`Self::iter_mut`] walk the elements in index order and can be restarted
///   any number of times. `&v`, `&mut v` and `v` itself are [`IntoIterator`].
///
/// Example:
/// ```
/// use dsa_arrays::{ArrayError, GrowableArray};
/// let mut v = GrowableArray::from([10, 20, 30, 40, 50]);
/// assert_eq!(v.remove_at(2), Ok(30));
/// assert_eq!(v.as_slice(), &[10, 20, 40, 50]);
///
/// v.push_front(0);
/// v.push_back(60);
/// assert_eq!(v.first(), Ok(&0));
/// assert_eq!(v.last(), Ok(&60));
/// assert_eq!(v.len(), 6);
///
/// v.replace_all(&[]);
/// assert_eq!(v.pop_back(), Err(ArrayError::EmptyContainer));
/// ```
///
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GrowableArray<T>(Box<[T]>);

impl<T>
GrowableArray<T> {
    /// Creates an empty array. Does not allocate.
    pub fn new() -> Self { Self(Box::default()) }

    /// Creates an array holding clones of `values`, in order.
    pub fn from_slice(values: &[T]) -> Self
        where T: Clone {
        Self(values.into())
    }

    /// Returns the number of elements in this array.
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns whether this array holds no elements.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Moves all elements into a new array, leaving this one empty.
    ///
    /// Example:
    /// ```
    /// use dsa_arrays::GrowableArray;
    /// let mut source = GrowableArray::from([1, 2, 3]);
    /// let dest = source.take();
    /// assert_eq!(dest.as_slice(), &[1, 2, 3]);
    /// assert!(source.is_empty());
    /// ```
    pub fn take(&mut self) -> Self { core::mem::take(self) }

    /// Hands the current elements to `f` as a [`Vec`] and stores what it returns in a buffer of
    /// exactly the resulting length.
    fn reallocate<R>(&mut self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        replace_with::replace_with_or_default_and_return(&mut self.0, |buf| {
            let old_len = buf.len();
            let mut elems = buf.into_vec();
            let ret = f(&mut elems);
            log::trace!("reallocating growable array: {} -> {} elements", old_len, elems.len());
            (ret, elems.into_boxed_slice())
        })
    }

    ////////////////////////////////////////////////////////////////////
    // index

    /// Returns a reference to the `i`-th element.
    /// Fails with [`ArrayError::IndexOutOfBounds`] if `i >= self.len()`.
    pub fn get(&self, i: usize) -> Result<&T, ArrayError> {
        ArrayError::check_index(i, self.len()).map(|i| &self.0[i])
    }

    /// Returns a mutable reference to the `i`-th element.
    /// Fails with [`ArrayError::IndexOutOfBounds`] if `i >= self.len()`.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut T, ArrayError> {
        ArrayError::check_index(i, self.len()).map(|i| &mut self.0[i])
    }

    /// Sets the `i`-th element to `elem`.
    /// Fails with [`ArrayError::IndexOutOfBounds`] if `i >= self.len()`, leaving the array
    /// untouched.
    pub fn set(&mut self, i: usize, elem: T) -> Result<(), ArrayError> {
        *self.get_mut(i)? = elem;
        Ok(())
    }

    /// Returns the first element; fails with [`ArrayError::IndexOutOfBounds`] when empty.
    pub fn first(&self) -> Result<&T, ArrayError> { self.get(0) }

    /// Returns the last element; fails with [`ArrayError::IndexOutOfBounds`] when empty.
    pub fn last(&self) -> Result<&T, ArrayError> { self.get(self.len().saturating_sub(1)) }

    /// Mutable counterpart of [`Self::first`].
    pub fn first_mut(&mut self) -> Result<&mut T, ArrayError> { self.get_mut(0) }

    /// Mutable counterpart of [`Self::last`].
    pub fn last_mut(&mut self) -> Result<&mut T, ArrayError> {
        let i = self.len().saturating_sub(1);
        self.get_mut(i)
    }

    ////////////////////////////////////////////////////////////////////
    // push

    /// Appends `elem` after the last element.
    pub fn push_back(&mut self, elem: T) {
        self.reallocate(|elems| elems.push(elem));
    }

    /// Inserts `elem` before the first element; existing elements shift one index up.
    pub fn push_front(&mut self, elem: T) {
        self.reallocate(|elems| elems.insert(0, elem));
    }

    ////////////////////////////////////////////////////////////////////
    // pop

    /// Removes the last element and returns it.
    /// Fails with [`ArrayError::EmptyContainer`] if the array is empty.
    pub fn pop_back(&mut self) -> Result<T, ArrayError> {
        self.check_not_empty()?;
        let last = self.len() - 1;
        Ok(self.reallocate(|elems| elems.remove(last)))
    }

    /// Removes the first element and returns it; remaining elements shift one index down.
    /// Fails with [`ArrayError::EmptyContainer`] if the array is empty.
    pub fn pop_front(&mut self) -> Result<T, ArrayError> {
        self.check_not_empty()?;
        Ok(self.reallocate(|elems| elems.remove(0)))
    }

    /// Removes the `i`-th element and returns it; subsequent elements shift one index down.
    /// Fails with [`ArrayError::IndexOutOfBounds`] if `i >= self.len()`, leaving the array
    /// untouched.
    pub fn remove_at(&mut self, i: usize) -> Result<T, ArrayError> {
        let i = ArrayError::check_index(i, self.len())?;
        Ok(self.reallocate(|elems| elems.remove(i)))
    }

    fn check_not_empty(&self) -> Result<(), ArrayError> {
        if self.is_empty() {
            log::debug!("removal from empty growable array rejected");
            Err(ArrayError::EmptyContainer)
        } else {
            Ok(())
        }
    }

    ////////////////////////////////////////////////////////////////////
    // bulk

    /// Discards all current elements and replaces them with clones of `values`.
    /// The length becomes `values.len()`, which may be zero.
    pub fn replace_all(&mut self, values: &[T])
        where T: Clone {
        log::trace!("replacing growable array: {} -> {} elements", self.len(), values.len());
        self.0 = values.into();
    }

    ////////////////////////////////////////////////////////////////////
    // views

    /// Returns all elements as a slice.
    pub fn as_slice(&self) -> &[T] { &self.0 }

    /// Returns all elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }

    /// Returns an iterator over the elements, in index order.
    pub fn iter(&self) -> Iter<'_, T> { Iter::new(&self.0) }

    /// Returns an iterator that allows modifying each element in place.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> { IterMut::new(&mut self.0) }

    /// Returns a [`Display`](core::fmt::Display) adapter that lists every element on its own line.
    pub fn dump(&self) -> Dump<'_, T> { Dump::new(&self.0) }
}

impl<T>
Default for GrowableArray<T> {
    fn default() -> Self { Self::new() }
}

impl<T>
From<Vec<T>> for GrowableArray<T> {
    fn from(values: Vec<T>) -> Self { Self(values.into_boxed_slice()) }
}

impl<T, const M: usize>
From<[T; M]> for GrowableArray<T> {
    fn from(values: [T; M]) -> Self { Self(Box::new(values)) }
}

impl<T>
From<GrowableArray<T>> for Vec<T> {
    fn from(v: GrowableArray<T>) -> Self { v.0.into_vec() }
}

impl<T>
FromIterator<T> for GrowableArray<T> {
    fn from_iter<It: IntoIterator<Item=T>>(iter: It) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T>
Index<usize> for GrowableArray<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T>
IndexMut<usize> for GrowableArray<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.get_mut(i) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T>
IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T>
IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T>
IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter { IntoIter::new(self.0) }
}

impl<T: Debug>
Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::format;
    use std::string::{String, ToString};
    use std::vec;
    use std::vec::Vec;

    use super::*;

    type V = GrowableArray<i32>;

    #[test]
    fn starts_empty() {
        let v = V::new();
        assert_eq!(v.len(), 0);
        assert!(v.is_empty());
        assert_eq!(v, V::default());
        assert_eq!(V::from_slice(&[]), v);
    }

    #[test]
    fn from_sequence() {
        let v = V::from_slice(&[1, 2, 3, 4, 5]);
        assert_eq!(v.len(), 5);
        for i in 0..5 {
            assert_eq!(v[i], i as i32 + 1);
        }
        assert_eq!(V::from([1, 2, 3, 4, 5]), v);
        assert_eq!(V::from(vec![1, 2, 3, 4, 5]), v);
        assert_eq!((1..=5).collect::<V>(), v);
    }

    #[test]
    fn clone_is_independent() {
        let mut v = V::from([1, 2, 3]);
        let mut copy = v.clone();
        assert_eq!(copy.len(), 3);
        assert_eq!(copy, v);

        copy[0] = 100;
        copy.push_back(4);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        v.set(2, 30).unwrap();
        assert_eq!(copy.as_slice(), &[100, 2, 3, 4]);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut source = V::from([1, 2, 3]);
        let moved = source.take();
        assert_eq!(moved.len(), 3);
        assert_eq!(moved.as_slice(), &[1, 2, 3]);
        assert_eq!(source.len(), 0);
        assert_eq!(source.get(0), Err(ArrayError::IndexOutOfBounds { index: 0, len: 0 }));

        // the emptied source is still a usable array
        source.push_back(9);
        assert_eq!(source.as_slice(), &[9]);

        let mut target = V::from([7, 8]);
        assert_eq!(target.len(), 2);
        target = moved;
        assert_eq!(target.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn get_and_set() {
        let mut v = V::from([5, 10, 15]);
        assert_eq!(v.get(0), Ok(&5));
        assert_eq!(v.get(2), Ok(&15));
        assert_eq!(v.get(3), Err(ArrayError::IndexOutOfBounds { index: 3, len: 3 }));

        v.set(0, 50).unwrap();
        *v.get_mut(1).unwrap() = 100;
        assert_eq!(v.as_slice(), &[50, 100, 15]);
        assert_eq!(v.set(3, 0), Err(ArrayError::IndexOutOfBounds { index: 3, len: 3 }));
        assert_eq!(v.as_slice(), &[50, 100, 15]);
    }

    #[test]
    #[should_panic(expected = "index out of array bounds")]
    fn subscript_out_of_bounds() {
        let v = V::new();
        let _ = v[0];
    }

    #[test]
    fn first_and_last() {
        let mut v = V::from([1, 2, 3]);
        assert_eq!(v.first(), Ok(&1));
        assert_eq!(v.last(), Ok(&3));
        *v.first_mut().unwrap() = 10;
        *v.last_mut().unwrap() = 30;
        assert_eq!(v.as_slice(), &[10, 2, 30]);

        let mut empty = V::new();
        assert_eq!(empty.first(), Err(ArrayError::IndexOutOfBounds { index: 0, len: 0 }));
        assert_eq!(empty.last(), Err(ArrayError::IndexOutOfBounds { index: 0, len: 0 }));
        assert!(empty.last_mut().is_err());
    }

    #[test]
    fn push_back_and_front() {
        let mut v = V::new();
        v.push_back(1);
        v.push_back(2);
        v.push_back(3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        v.push_front(0);
        v.push_front(-1);
        assert_eq!(v.as_slice(), &[-1, 0, 1, 2, 3]);
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn pop_back_until_empty() {
        let mut v = V::from([1, 2, 3, 4, 5]);
        for expected in (1..=5).rev() {
            assert_eq!(v.pop_back(), Ok(expected));
        }
        assert_eq!(v.len(), 0);
        assert_eq!(v.pop_back(), Err(ArrayError::EmptyContainer));
        assert_eq!(v.len(), 0);

        let mut one = V::from([42]);
        assert_eq!(one.pop_back(), Ok(42));
        assert!(one.is_empty());
        assert_eq!(one.pop_back(), Err(ArrayError::EmptyContainer));
        one.push_back(1);
        assert_eq!(one.as_slice(), &[1]);
    }

    #[test]
    fn pop_front_until_empty() {
        let mut v = V::from([1, 2, 3, 4, 5]);
        assert_eq!(v.pop_front(), Ok(1));
        assert_eq!(v.as_slice(), &[2, 3, 4, 5]);
        for expected in 2..=5 {
            assert_eq!(v.pop_front(), Ok(expected));
        }
        assert_eq!(v.pop_front(), Err(ArrayError::EmptyContainer));
    }

    #[test]
    fn remove_at() {
        let mut v = V::from([10, 20, 30, 40, 50]);
        assert_eq!(v.remove_at(2), Ok(30));
        assert_eq!(v.as_slice(), &[10, 20, 40, 50]);
        assert_eq!(v.len(), 4);

        assert_eq!(v.remove_at(4), Err(ArrayError::IndexOutOfBounds { index: 4, len: 4 }));
        assert_eq!(v.as_slice(), &[10, 20, 40, 50]);

        assert_eq!(v.remove_at(0), Ok(10));
        assert_eq!(v.remove_at(2), Ok(50));
        assert_eq!(v.as_slice(), &[20, 40]);

        let mut one = V::from([42]);
        assert_eq!(one.remove_at(0), Ok(42));
        assert!(one.is_empty());
        assert_eq!(one.remove_at(0), Err(ArrayError::IndexOutOfBounds { index: 0, len: 0 }));
    }

    #[test]
    fn replace_all() {
        let mut v = V::from([1, 2, 3]);
        v.replace_all(&[4, 5, 6, 7]);
        assert_eq!(v.as_slice(), &[4, 5, 6, 7]);
        v.replace_all(&[8]);
        assert_eq!(v.as_slice(), &[8]);
        v.replace_all(&[]);
        assert!(v.is_empty());
    }

    #[test]
    fn iterate() {
        let mut v = V::from([1, 2, 3, 4, 5]);
        let mut expected = 1;
        for x in &v {
            assert_eq!(*x, expected);
            expected += 1;
        }
        assert_eq!(v.iter().len(), v.len());
        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);

        for x in v.iter_mut() {
            *x += 10;
        }
        assert_eq!(v.as_slice(), &[11, 12, 13, 14, 15]);
        assert_eq!(Vec::from(v.clone()), vec![11, 12, 13, 14, 15]);
        assert_eq!(v.into_iter().sum::<i32>(), 65);
    }

    #[test]
    fn dump_and_debug() {
        let v = V::from([1, 2, 3]);
        assert_eq!(v.dump().to_string(), "Index: 0 | Value: 1\nIndex: 1 | Value: 2\nIndex: 2 | Value: 3\n");
        assert_eq!(format!("{:?}", v), "[1, 2, 3]");
        assert_eq!(V::new().dump().to_string(), "");
    }

    #[test]
    fn different_element_types() {
        let mut doubles = GrowableArray::from([1.5, 2.5]);
        doubles.push_front(0.5);
        assert_eq!(doubles.as_slice(), &[0.5, 1.5, 2.5]);

        let mut strings = GrowableArray::<String>::new();
        strings.push_back("hello".to_string());
        strings.push_back("world".to_string());
        strings.push_front("say".to_string());
        assert_eq!(strings.remove_at(1), Ok("hello".to_string()));
        assert_eq!(strings.as_slice(), &["say", "world"]);
        assert_eq!(strings.dump().to_string(), "Index: 0 | Value: say\nIndex: 1 | Value: world\n");
    }

    #[test]
    fn stress() {
        let mut v = V::new();
        for i in 0..1000 {
            v.push_back(i);
        }
        assert_eq!(v.len(), 1000);
        for i in 0..1000 {
            assert_eq!(v[i as usize], i);
        }
        for _ in 0..500 {
            v.pop_front().unwrap();
        }
        assert_eq!(v.len(), 500);
        assert_eq!(v.first(), Ok(&500));
        assert_eq!(v.last(), Ok(&999));
    }
}
