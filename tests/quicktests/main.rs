//! Property tests over the public API of the tree.

#[macro_use]
extern crate quickcheck_macros;

mod tree;
