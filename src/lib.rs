#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod dump;
mod error;
mod fixed_array;
mod growable_array;
mod iter;

pub use self::{
    dump::Dump,
    error::ArrayError,
    fixed_array::FixedArray,
    growable_array::GrowableArray,
    iter::{IntoIter, Iter, IterMut},
};
