use std::collections::HashMap;
use std::hash::Hash;

use crate::types::{IdItemset, ItemId, Transaction};

/// A set of items. Kept sorted and deduplicated, so equality is set equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset<T> {
    items: Vec<T>,
}

impl<T: Ord> Itemset<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let mut items: Vec<T> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.binary_search(item).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Ord> FromIterator<T> for Itemset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// An itemset that met the support threshold, with its raw count and its ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemset<T> {
    pub itemset: Itemset<T>,
    pub count: usize,
    pub support: f64,
}

/// Smallest count `c >= 1` with `c / num_transactions >= min_support`.
///
/// The product `min_support * n` is only a first guess: `0.7 * 10.0` is
/// slightly above 7, so the result is corrected against the ratio test itself.
pub fn min_support_count(min_support: f64, num_transactions: usize) -> usize {
    let n = num_transactions as f64;
    let mut count = (min_support * n).ceil().max(0.0) as usize;

    while count > 0 && (count - 1) as f64 / n >= min_support {
        count -= 1;
    }
    while count < num_transactions && (count as f64 / n) < min_support {
        count += 1;
    }

    count.max(1)
}

pub fn support_ratio(count: usize, num_transactions: usize) -> f64 {
    if num_transactions == 0 {
        return 0.0;
    }
    count as f64 / num_transactions as f64
}

/// Two-way lookup between raw items and dense ids, assigned in first-seen order.
#[derive(Debug, Clone)]
pub struct Inventory<T> {
    items: Vec<T>,
    reverse_lookup: HashMap<T, ItemId>,
}

impl<T: Eq + Hash + Clone> Default for Inventory<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            reverse_lookup: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> Inventory<T> {
    pub fn id_or_insert(&mut self, item: &T) -> ItemId {
        if let Some(&item_id) = self.reverse_lookup.get(item) {
            return item_id;
        }
        let item_id = self.items.len();
        self.items.push(item.clone());
        self.reverse_lookup.insert(item.clone(), item_id);
        item_id
    }

    pub fn id(&self, item: &T) -> Option<ItemId> {
        self.reverse_lookup.get(item).copied()
    }

    pub fn item(&self, item_id: ItemId) -> &T {
        &self.items[item_id]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Eq + Hash + Clone + Ord> Inventory<T> {
    pub fn resolve(&self, itemset: &[ItemId]) -> Itemset<T> {
        itemset.iter().map(|&id| self.item(id).clone()).collect()
    }
}

/// Intern raw transactions. Every transaction comes back sorted by id
/// with duplicate items collapsed.
pub fn encode_transactions<T>(raw_transactions: &[Vec<T>]) -> (Inventory<T>, Vec<Transaction>)
where
    T: Eq + Hash + Clone,
{
    let mut inventory = Inventory::default();
    let transactions = raw_transactions
        .iter()
        .map(|raw_transaction| {
            let mut items: Transaction = raw_transaction
                .iter()
                .map(|item| inventory.id_or_insert(item))
                .collect();
            items.sort_unstable();
            items.dedup();
            items
        })
        .collect();

    (inventory, transactions)
}

/// Translate id-level results back to raw items.
pub(crate) fn resolve_all<T>(
    inventory: &Inventory<T>,
    itemset_counts: impl IntoIterator<Item = (IdItemset, usize)>,
    num_transactions: usize,
) -> Vec<FrequentItemset<T>>
where
    T: Eq + Hash + Clone + Ord,
{
    itemset_counts
        .into_iter()
        .map(|(itemset, count)| FrequentItemset {
            itemset: inventory.resolve(&itemset),
            count,
            support: support_ratio(count, num_transactions),
        })
        .collect()
}
