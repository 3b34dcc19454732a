//! FP-Growth over an arena-backed prefix tree.

pub mod growth;
pub mod tree;
