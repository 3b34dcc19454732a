//! Frequent itemset mining.
//!
//! Two independent miners over the same input, a list of transactions and a
//! minimum support ratio:
//!
//! - [`candidate_gen`]: level-wise Apriori search whose pair level is
//!   filtered by a PCY hash-bucket pass.
//! - [`fp_growth`]: recursive mining of conditional prefix trees.
//!
//! Both return each frequent itemset once, with its count and its support
//! ratio. On the same input they agree on the set of itemsets and supports.
//!
//! ```
//! use frequent_itemsets::{candidate_gen, fp_growth, MiningConfig};
//!
//! let transactions = vec![
//!     vec!["a", "b", "c"],
//!     vec!["a", "b"],
//!     vec!["a", "c"],
//!     vec!["a"],
//!     vec!["b", "c"],
//! ];
//! let config = MiningConfig::new(0.4);
//!
//! let apriori = candidate_gen(&transactions, &config).unwrap();
//! let fp = fp_growth(&transactions, &config).unwrap();
//! assert_eq!(apriori.len(), 6);
//! assert_eq!(fp.len(), 6);
//! ```

pub mod combi;
pub mod config;
pub mod error;
pub mod fp;
pub mod itemset;
pub mod itemsets;
#[cfg(feature = "python")]
mod python;
pub mod types;

pub use config::{MiningConfig, DEFAULT_NUM_BUCKETS};
pub use error::{Error, Result};
pub use fp::growth::fp_growth;
pub use fp::tree::PrefixTree;
pub use itemset::{FrequentItemset, Itemset};
pub use itemsets::count::generate_frequent_itemsets as candidate_gen;
pub use itemsets::pcy::BucketPruner;
