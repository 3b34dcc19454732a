//! Level-wise candidate mining with PCY hash-bucket pruning.

pub mod count;
pub mod pcy;
