use crate::error::{Error, Result};
use crate::types::ItemsetLength;

pub const DEFAULT_NUM_BUCKETS: usize = 10_000;

/// Parameters shared by both miners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningConfig {
    pub min_support: f64,
    /// Size of the PCY bucket table. Ignored by FP-Growth.
    pub num_buckets: usize,
    /// Largest itemset reported, `None` for no limit.
    pub max_len: Option<ItemsetLength>,
}

impl MiningConfig {
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            num_buckets: DEFAULT_NUM_BUCKETS,
            max_len: None,
        }
    }

    pub fn with_num_buckets(mut self, num_buckets: usize) -> Self {
        self.num_buckets = num_buckets;
        self
    }

    pub fn with_max_len(mut self, max_len: ItemsetLength) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_support) {
            return Err(Error::InvalidMinSupport(self.min_support));
        }
        if self.num_buckets == 0 {
            return Err(Error::InvalidBucketCount(self.num_buckets));
        }
        if self.max_len == Some(0) {
            return Err(Error::InvalidMaxLen(0));
        }
        Ok(())
    }

    pub(crate) fn allows_len(&self, len: ItemsetLength) -> bool {
        self.max_len.map_or(true, |max_len| len <= max_len)
    }
}
