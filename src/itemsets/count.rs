#![allow(non_snake_case)]

use std::hash::Hash;

use itertools::Itertools;
use rayon::prelude::*;
use tracing::debug;

use crate::{
    combi::generate_candidates_from_prev,
    config::MiningConfig,
    error::Result,
    itemset::{encode_transactions, min_support_count, resolve_all, FrequentItemset},
    itemsets::pcy::BucketPruner,
    types::{IdItemset, ItemCounts, ItemId, ItemsetCounts, Transaction},
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary

/// Level-wise frequent itemset mining with PCY pruning of the pair level.
///
/// Returns every frequent itemset, level by level, singletons first.
pub fn generate_frequent_itemsets<T>(
    raw_transactions: &[Vec<T>],
    config: &MiningConfig,
) -> Result<Vec<FrequentItemset<T>>>
where
    T: Eq + Hash + Clone + Ord,
{
    config.validate()?;

    let N = raw_transactions.len();
    let (inventory, transactions) = encode_transactions(raw_transactions);
    let itemset_counts = generate_frequent_itemsets_id(transactions, config)?;

    Ok(resolve_all(&inventory, itemset_counts, N))
}

/// Same as [`generate_frequent_itemsets`] on interned transactions, which
/// must be sorted by id without duplicates, as `encode_transactions` leaves them.
pub(crate) fn generate_frequent_itemsets_id(
    mut transactions: Vec<Transaction>,
    config: &MiningConfig,
) -> Result<ItemsetCounts> {
    let N = transactions.len();
    let min_support_count = min_support_count(config.min_support, N);

    // Pass 1 doubles as the PCY bucket pass.
    let pruner = BucketPruner::build(&transactions, config)?;

    debug!(N, min_support_count, "Counting itemsets of length 1");
    let item_counts = count_items(&transactions);
    let mut frequent: ItemsetCounts = item_counts
        .into_iter()
        .filter(|&(_, count)| count >= min_support_count)
        .sorted()
        .map(|(item, count)| (vec![item], count))
        .collect();
    debug!(frequent = frequent.len(), "Frequent itemsets of length 1");

    let mut all_frequent_itemsets = frequent.clone();

    let mut size = 2;
    while !frequent.is_empty() && config.allows_len(size) {
        transactions.retain(|transaction| transaction.len() >= size);

        let candidates = if size == 2 {
            generate_candidate_pairs(&frequent, &pruner)
        } else {
            let prev: Vec<IdItemset> = frequent.iter().map(|(itemset, _)| itemset.clone()).collect();
            generate_candidates_from_prev(&prev)
        };
        debug!(size, candidates = candidates.len(), "Counting itemsets");

        frequent = generate_frequent_k_itemset_counts(candidates, &transactions, min_support_count);
        debug!(size, frequent = frequent.len(), "Frequent itemsets");

        all_frequent_itemsets.extend(frequent.iter().cloned());
        size += 1;
    }

    Ok(all_frequent_itemsets)
}

fn count_items(transactions: &[Transaction]) -> ItemCounts {
    let mut item_counts = ItemCounts::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
    for transaction in transactions {
        for &item in transaction {
            *item_counts.entry(item).or_insert(0) += 1;
        }
    }
    item_counts
}

/// Pairs of frequent items whose bucket survived the PCY pass.
fn generate_candidate_pairs(frequent_items: &ItemsetCounts, pruner: &BucketPruner) -> Vec<IdItemset> {
    let total = frequent_items.len() * frequent_items.len().saturating_sub(1) / 2;
    let candidates: Vec<IdItemset> = frequent_items
        .iter()
        .filter_map(|(itemset, _)| itemset.first().copied())
        .tuple_combinations()
        .filter(|&(a, b)| pruner.contains(a, b))
        .map(|(a, b)| vec![a, b])
        .collect();
    debug!(
        total,
        pruned = total - candidates.len(),
        "Bucket pruning of candidate pairs"
    );
    candidates
}

/// Exact counting of candidates; keeps those meeting the threshold, in candidate order.
fn generate_frequent_k_itemset_counts(
    candidates: Vec<IdItemset>,
    transactions: &[Transaction],
    min_support_count: usize,
) -> ItemsetCounts {
    candidates
        .into_par_iter()
        .filter_map(|candidate| {
            let candidate_count = transactions
                .iter()
                .filter(|transaction| is_subset(&candidate, transaction))
                .count();
            if candidate_count >= min_support_count {
                Some((candidate, candidate_count))
            } else {
                None
            }
        })
        .collect()
}

fn is_subset(candidate: &[ItemId], transaction: &[ItemId]) -> bool {
    candidate
        .iter()
        .all(|item| transaction.binary_search(item).is_ok())
}
