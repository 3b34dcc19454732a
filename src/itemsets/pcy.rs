use bitvec::prelude::*;
use itertools::Itertools;
use tracing::debug;

use crate::config::MiningConfig;
use crate::error::Result;
use crate::itemset::min_support_count;
use crate::types::{BucketId, ItemId, Transaction};

/// PCY first pass: pair counts folded into a fixed number of hash buckets.
///
/// Only the set of buckets whose total reached the support threshold is
/// kept. A pair in a dropped bucket cannot be frequent; a pair in a kept
/// bucket still has to be counted exactly.
#[derive(Debug, Clone)]
pub struct BucketPruner {
    frequent_buckets: BitVec,
    num_buckets: usize,
}

impl BucketPruner {
    /// One pass over `transactions`. Fails before the pass if `config` is invalid.
    pub fn build(transactions: &[Transaction], config: &MiningConfig) -> Result<Self> {
        config.validate()?;

        let num_buckets = config.num_buckets;
        let bucket_counts = get_bucket_counts(transactions, num_buckets);
        let threshold = min_support_count(config.min_support, transactions.len());
        let frequent_buckets = counts_to_bitvec(&bucket_counts, threshold);

        debug!(
            num_buckets,
            threshold,
            frequent_buckets = frequent_buckets.count_ones(),
            "built bucket pruner"
        );

        Ok(Self {
            frequent_buckets,
            num_buckets,
        })
    }

    /// Whether the bucket of the pair `{a, b}` survived. Argument order does not matter.
    pub fn contains(&self, a: ItemId, b: ItemId) -> bool {
        self.frequent_buckets[bucket_of(a, b, self.num_buckets)]
    }

    pub fn num_frequent_buckets(&self) -> usize {
        self.frequent_buckets.count_ones()
    }
}

fn get_bucket_counts(transactions: &[Transaction], num_buckets: usize) -> Vec<usize> {
    let mut counts = vec![0; num_buckets];

    for transaction in transactions {
        transaction
            .iter()
            .tuple_combinations()
            .for_each(|(&a, &b)| counts[bucket_of(a, b, num_buckets)] += 1);
    }

    counts
}

/// Hash of the pair in canonical (ascending) order, reduced to a bucket.
fn bucket_of(a: ItemId, b: ItemId, num_buckets: usize) -> BucketId {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut key = [0u8; 16];
    key[..8].copy_from_slice(&(lo as u64).to_le_bytes());
    key[8..].copy_from_slice(&(hi as u64).to_le_bytes());
    let (h1, _) = mur3::murmurhash3_x64_128(&key, 0);
    (h1 % num_buckets as u64) as BucketId
}

fn counts_to_bitvec(counts: &[usize], threshold: usize) -> BitVec {
    counts.iter().map(|&count| count >= threshold).collect()
}
