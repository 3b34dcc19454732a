use std::collections::HashMap;

pub type ItemId = usize;
pub type Transaction = Vec<ItemId>;

/// Sorted ascending by id, no duplicates.
pub type IdItemset = Vec<ItemId>;

pub type ItemCounts = HashMap<ItemId, usize>;
pub type ItemsetCounts = Vec<(IdItemset, usize)>;

pub type ItemsetLength = usize;
pub type BucketId = usize;
pub type NodeId = usize;
