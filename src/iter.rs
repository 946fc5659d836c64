//! Iterators shared by [`crate::FixedArray`] and [`crate::GrowableArray`].
//!
//! Both containers keep their elements in one contiguous heap buffer, so traversal is a cursor
//! walking that buffer in index order. Each call to `iter()` starts a fresh traversal; the borrow
//! checker rules out structural mutation of a container while one of its iterators is alive.

use alloc::vec;
use core::iter::FusedIterator;
use core::slice;

/// Borrowing iterator over the elements of an array, in index order.
///
/// Created by `iter()` on either container, or by iterating over `&array`.
#[derive(Clone, Debug)]
pub struct Iter<'a, T>(slice::Iter<'a, T>);

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(elems: &'a [T]) -> Self { Self(elems.iter()) }

    /// Returns the elements not yet visited, as a slice.
    pub fn as_slice(&self) -> &'a [T] { self.0.as_slice() }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
    fn nth(&mut self, n: usize) -> Option<Self::Item> { self.0.nth(n) }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator over the elements of an array, in index order.
///
/// Elements can be modified in place through the yielded references.
#[derive(Debug)]
pub struct IterMut<'a, T>(slice::IterMut<'a, T>);

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(elems: &'a mut [T]) -> Self { Self(elems.iter_mut()) }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
    fn nth(&mut self, n: usize) -> Option<Self::Item> { self.0.nth(n) }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Consuming iterator that moves the elements out of an array, in index order.
#[derive(Clone, Debug)]
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> IntoIter<T> {
    pub(crate) fn new(elems: alloc::boxed::Box<[T]>) -> Self { Self(elems.into_vec().into_iter()) }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
