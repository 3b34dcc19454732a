#![allow(non_snake_case)]

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;
use tracing::{debug, trace};

use super::tree::PrefixTree;
use crate::{
    config::MiningConfig,
    error::Result,
    itemset::{encode_transactions, min_support_count, resolve_all, FrequentItemset},
    types::{IdItemset, ItemId, ItemsetCounts, Transaction},
};

/// FP-Growth: frequent itemsets mined from a prefix tree through
/// conditional trees, without candidate generation.
///
/// Items with equal counts are ordered by first appearance in
/// `raw_transactions`. That order shapes the tree but not the result.
pub fn fp_growth<T>(
    raw_transactions: &[Vec<T>],
    config: &MiningConfig,
) -> Result<Vec<FrequentItemset<T>>>
where
    T: Eq + Hash + Clone + Ord,
{
    config.validate()?;

    let N = raw_transactions.len();
    let (inventory, transactions) = encode_transactions(raw_transactions);
    let patterns = fp_growth_id(&transactions, config);

    Ok(resolve_all(&inventory, patterns, N))
}

/// Same as [`fp_growth`] on interned transactions. The config is assumed valid.
pub(crate) fn fp_growth_id(transactions: &[Transaction], config: &MiningConfig) -> ItemsetCounts {
    let min_support_count = min_support_count(config.min_support, transactions.len());

    let ordered_items = order_frequent_items(transactions, min_support_count);
    debug!(
        frequent_items = ordered_items.len(),
        min_support_count, "Ordered frequent items"
    );

    let ordered_transactions = project_transactions(transactions, &ordered_items);
    let tree = build_tree(&ordered_transactions);
    debug!(nodes = tree.len(), "Built prefix tree");

    let patterns = extract_patterns(tree, min_support_count, config);
    debug!(patterns = patterns.len(), "Extracted patterns");
    patterns
}

/// Items meeting the threshold, by descending count. The sort is stable over
/// ids, which are handed out in first-seen order.
fn order_frequent_items(transactions: &[Transaction], min_support_count: usize) -> Vec<(ItemId, usize)> {
    let mut item_counts: HashMap<ItemId, usize> = HashMap::new();
    for transaction in transactions {
        for &item in transaction {
            *item_counts.entry(item).or_insert(0) += 1;
        }
    }

    item_counts
        .into_iter()
        .filter(|&(_, count)| count >= min_support_count)
        .sorted_by_key(|&(item, count)| (Reverse(count), item))
        .collect()
}

/// Drop infrequent items and put the rest in global frequency order.
fn project_transactions(
    transactions: &[Transaction],
    ordered_items: &[(ItemId, usize)],
) -> Vec<Transaction> {
    let rank: HashMap<ItemId, usize> = ordered_items
        .iter()
        .enumerate()
        .map(|(position, &(item, _))| (item, position))
        .collect();

    transactions
        .iter()
        .map(|transaction| {
            transaction
                .iter()
                .copied()
                .filter(|item| rank.contains_key(item))
                .sorted_by_key(|item| rank[item])
                .collect()
        })
        .collect()
}

fn build_tree(transactions: &[Transaction]) -> PrefixTree<ItemId> {
    let mut tree = PrefixTree::new();
    for transaction in transactions {
        tree.add_transaction(transaction);
    }
    tree
}

/// Each prefix path becomes `count` synthetic transactions of its items.
fn build_conditional_tree(conditional_pattern_base: &[(Vec<ItemId>, usize)]) -> PrefixTree<ItemId> {
    let mut tree = PrefixTree::new();
    for (path, count) in conditional_pattern_base {
        tree.add_weighted(path, *count);
    }
    tree
}

/// Mines `tree` with a work list of (conditional tree, suffix) pairs instead
/// of recursion. The absolute threshold is the same at every depth.
///
/// A suffix is the chain of (item, count) pairs that led to its tree; the
/// support of a pattern is the smallest count on that chain.
fn extract_patterns(
    tree: PrefixTree<ItemId>,
    min_support_count: usize,
    config: &MiningConfig,
) -> ItemsetCounts {
    let mut patterns: ItemsetCounts = Vec::new();
    let mut pending: Vec<(PrefixTree<ItemId>, Vec<(ItemId, usize)>)> = vec![(tree, Vec::new())];

    while let Some((tree, suffix)) = pending.pop() {
        for (item, support) in tree.get_frequent_items(min_support_count) {
            let mut pattern = suffix.clone();
            pattern.push((item, support));
            patterns.push(pattern_support(&pattern));

            if !config.allows_len(pattern.len() + 1) {
                continue;
            }

            let conditional_pattern_base = tree.conditional_pattern_base(&item);
            if conditional_pattern_base.is_empty() {
                continue;
            }

            let conditional_tree = build_conditional_tree(&conditional_pattern_base);
            trace!(
                item,
                depth = pattern.len(),
                nodes = conditional_tree.len(),
                "Conditional tree"
            );
            pending.push((conditional_tree, pattern));
        }
    }

    patterns
}

fn pattern_support(pattern: &[(ItemId, usize)]) -> (IdItemset, usize) {
    let itemset: IdItemset = pattern.iter().map(|&(item, _)| item).sorted().collect();
    let support = pattern.iter().map(|&(_, count)| count).min().unwrap_or(0);
    (itemset, support)
}
