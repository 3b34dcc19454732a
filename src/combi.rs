use std::collections::HashSet;

use itertools::Itertools;

use crate::types::{IdItemset, ItemId};

/// Join frequent (k-1)-itemsets that share their first k-2 items into
/// k-itemset candidates. Inputs must be sorted itemsets of equal length.
///
/// https://github.com/tommyod/Efficient-Apriori/blob/master/efficient_apriori/itemsets.py
pub fn join_step(mut itemsets: Vec<IdItemset>) -> Vec<IdItemset> {
    itemsets.sort_unstable();
    itemsets.dedup();

    let mut final_itemsets: Vec<IdItemset> = Vec::new();
    let mut tail_items: Vec<ItemId> = Vec::with_capacity(itemsets.len());

    let mut i = 0;
    while i < itemsets.len() {
        let (itemset_last, itemset_first) = match itemsets[i].split_last() {
            Some(split) => split,
            None => {
                i += 1;
                continue;
            }
        };

        tail_items.clear();
        tail_items.push(*itemset_last);

        let mut skip = 1;
        for itemset_n in &itemsets[(i + 1)..] {
            match itemset_n.split_last() {
                Some((itemset_n_last, itemset_n_first)) if itemset_n_first == itemset_first => {
                    tail_items.push(*itemset_n_last);
                    skip += 1;
                }
                _ => break,
            }
        }

        for (a, b) in tail_items.iter().tuple_combinations() {
            let mut candidate = Vec::with_capacity(itemset_first.len() + 2);
            candidate.extend_from_slice(itemset_first);
            candidate.push(*a);
            candidate.push(*b);
            final_itemsets.push(candidate);
        }

        i += skip;
    }

    final_itemsets
}

/// Anti-monotone check: every subset obtained by dropping one item must be
/// in `prev_frequent`.
pub fn all_subsets_frequent(candidate: &[ItemId], prev_frequent: &HashSet<IdItemset>) -> bool {
    (0..candidate.len()).all(|skip| {
        let subset: IdItemset = candidate
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &item)| item)
            .collect();
        prev_frequent.contains(&subset)
    })
}

/// Candidates of size k from the frequent itemsets of size k-1, with
/// anti-monotone pruning applied.
pub fn generate_candidates_from_prev(prev_frequent: &[IdItemset]) -> Vec<IdItemset> {
    let lookup: HashSet<IdItemset> = prev_frequent.iter().cloned().collect();
    join_step(prev_frequent.to_vec())
        .into_iter()
        .filter(|candidate| all_subsets_frequent(candidate, &lookup))
        .collect()
}
