use std::collections::HashMap;

use frequent_itemsets::{candidate_gen, fp_growth, BucketPruner, Error, FrequentItemset, MiningConfig};
use maplit::hashmap;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_transactions(seed: u64, num_transactions: usize, num_items: u32, density: f64) -> Vec<Vec<u32>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..num_transactions)
        .map(|_| (0..num_items).filter(|_| rng.gen_bool(density)).collect())
        .collect()
}

fn counts<T: Clone + Ord + std::hash::Hash>(frequent: &[FrequentItemset<T>]) -> HashMap<Vec<T>, usize> {
    frequent
        .iter()
        .map(|f| (f.itemset.items().to_vec(), f.count))
        .collect()
}

fn supports<T: Clone + Ord + std::hash::Hash>(frequent: &[FrequentItemset<T>]) -> HashMap<Vec<T>, f64> {
    frequent
        .iter()
        .map(|f| (f.itemset.items().to_vec(), f.support))
        .collect()
}

fn brute_force_count<T: PartialEq>(itemset: &[T], transactions: &[Vec<T>]) -> usize {
    transactions
        .iter()
        .filter(|transaction| itemset.iter().all(|item| transaction.contains(item)))
        .count()
}

fn both(transactions: &[Vec<u32>], config: &MiningConfig) -> (Vec<FrequentItemset<u32>>, Vec<FrequentItemset<u32>>) {
    (
        candidate_gen(transactions, config).unwrap(),
        fp_growth(transactions, config).unwrap(),
    )
}

#[test]
fn five_transaction_scenario() {
    let transactions = vec![
        vec!["a", "b", "c"],
        vec!["a", "b"],
        vec!["a", "c"],
        vec!["a"],
        vec!["b", "c"],
    ];
    let config = MiningConfig::new(0.4);

    let expected = hashmap! {
        vec!["a"] => 0.8,
        vec!["b"] => 0.6,
        vec!["c"] => 0.6,
        vec!["a", "b"] => 0.4,
        vec!["a", "c"] => 0.4,
        vec!["b", "c"] => 0.4,
    };

    let apriori = candidate_gen(&transactions, &config).unwrap();
    let fp = fp_growth(&transactions, &config).unwrap();

    assert_eq!(apriori.len(), 6);
    assert_eq!(fp.len(), 6);
    assert_eq!(supports(&apriori), expected);
    assert_eq!(supports(&fp), expected);
}

#[test]
fn empty_database() {
    let transactions: Vec<Vec<&str>> = vec![];
    let config = MiningConfig::new(0.5);

    assert!(candidate_gen(&transactions, &config).unwrap().is_empty());
    assert!(fp_growth(&transactions, &config).unwrap().is_empty());
}

#[test]
fn full_support_threshold() {
    let transactions = vec![vec!["x", "y"], vec!["x", "y"]];
    let config = MiningConfig::new(1.0);

    let expected = hashmap! {
        vec!["x"] => 1.0,
        vec!["y"] => 1.0,
        vec!["x", "y"] => 1.0,
    };

    assert_eq!(supports(&candidate_gen(&transactions, &config).unwrap()), expected);
    assert_eq!(supports(&fp_growth(&transactions, &config).unwrap()), expected);
}

#[test]
fn nothing_frequent_is_an_empty_result() {
    let transactions = vec![vec!["a"], vec!["b"], vec!["c"]];
    let config = MiningConfig::new(0.5);

    assert!(candidate_gen(&transactions, &config).unwrap().is_empty());
    assert!(fp_growth(&transactions, &config).unwrap().is_empty());
}

#[test]
fn invalid_configuration_fails_fast() {
    let transactions = vec![vec!["a"]];

    assert_eq!(
        candidate_gen(&transactions, &MiningConfig::new(1.2)),
        Err(Error::InvalidMinSupport(1.2))
    );
    assert_eq!(
        fp_growth(&transactions, &MiningConfig::new(-0.5)),
        Err(Error::InvalidMinSupport(-0.5))
    );
    assert_eq!(
        candidate_gen(&transactions, &MiningConfig::new(0.5).with_num_buckets(0)),
        Err(Error::InvalidBucketCount(0))
    );
}

#[test]
fn bucket_pruner_rejects_zero_buckets() {
    let transactions = vec![vec![0, 1], vec![0, 1]];

    assert_eq!(
        BucketPruner::build(&transactions, &MiningConfig::new(0.5).with_num_buckets(0)).unwrap_err(),
        Error::InvalidBucketCount(0)
    );

    let pruner = BucketPruner::build(&transactions, &MiningConfig::new(0.5)).unwrap();
    assert!(pruner.contains(1, 0));
}

#[test]
fn algorithms_agree() {
    for seed in 0..6 {
        let transactions = random_transactions(seed, 60, 12, 0.35);
        for &min_support in &[0.05, 0.1, 0.2, 0.35] {
            let config = MiningConfig::new(min_support);
            let (apriori, fp) = both(&transactions, &config);

            assert_eq!(counts(&apriori), counts(&fp), "seed {} support {}", seed, min_support);
            assert_eq!(supports(&apriori), supports(&fp));
        }
    }
}

#[test]
fn reported_support_matches_brute_force() {
    let transactions = random_transactions(42, 50, 10, 0.4);
    let config = MiningConfig::new(0.1);
    let n = transactions.len() as f64;
    let (apriori, fp) = both(&transactions, &config);

    for f in apriori.iter().chain(fp.iter()) {
        let exact = brute_force_count(f.itemset.items(), &transactions);
        assert_eq!(f.count, exact);
        assert_eq!((f.support * n).round() as usize, exact);
        assert!(f.support >= 0.1 && f.support <= 1.0);
    }
}

#[test]
fn every_subset_of_a_frequent_itemset_is_reported() {
    let transactions = random_transactions(7, 40, 9, 0.45);
    let config = MiningConfig::new(0.15);
    let (apriori, fp) = both(&transactions, &config);

    for frequent in [&apriori, &fp] {
        let reported = counts(frequent);
        for items in reported.keys().filter(|items| items.len() >= 2) {
            for skip in 0..items.len() {
                let mut subset = items.clone();
                subset.remove(skip);
                assert!(reported.contains_key(&subset), "{:?} missing {:?}", items, subset);
                assert!(reported[&subset] >= reported[items]);
            }
        }
    }
}

#[test]
fn raising_threshold_never_adds_itemsets() {
    let transactions = random_transactions(3, 50, 10, 0.4);
    let thresholds = [0.05, 0.1, 0.2, 0.3, 0.5, 0.8];

    for pair in thresholds.windows(2) {
        let (low_apriori, low_fp) = both(&transactions, &MiningConfig::new(pair[0]));
        let (high_apriori, high_fp) = both(&transactions, &MiningConfig::new(pair[1]));

        let low = counts(&low_apriori);
        assert!(counts(&high_apriori).keys().all(|items| low.contains_key(items)));
        let low = counts(&low_fp);
        assert!(counts(&high_fp).keys().all(|items| low.contains_key(items)));
    }
}

#[test]
fn repeated_runs_are_identical() {
    let transactions = random_transactions(11, 40, 8, 0.4);
    let config = MiningConfig::new(0.1);

    assert_eq!(
        candidate_gen(&transactions, &config).unwrap(),
        candidate_gen(&transactions, &config).unwrap()
    );
    assert_eq!(
        fp_growth(&transactions, &config).unwrap(),
        fp_growth(&transactions, &config).unwrap()
    );
}

#[test]
fn no_duplicates_within_a_run() {
    let transactions = random_transactions(5, 50, 10, 0.5);
    let config = MiningConfig::new(0.1);
    let (apriori, fp) = both(&transactions, &config);

    assert_eq!(counts(&apriori).len(), apriori.len());
    assert_eq!(counts(&fp).len(), fp.len());
}

#[test]
fn bucket_count_only_affects_work_not_results() {
    let transactions = random_transactions(9, 50, 10, 0.4);
    let baseline = counts(&candidate_gen(&transactions, &MiningConfig::new(0.1)).unwrap());

    for &num_buckets in &[1, 3, 17, 100] {
        let config = MiningConfig::new(0.1).with_num_buckets(num_buckets);
        assert_eq!(counts(&candidate_gen(&transactions, &config).unwrap()), baseline);
    }
}

#[test]
fn tie_order_does_not_change_results() {
    // Every item occurs equally often, so the frequency order is decided
    // entirely by first appearance.
    let transactions = vec![
        vec!["p", "q"],
        vec!["q", "r"],
        vec!["r", "p"],
        vec!["p", "q", "r"],
    ];
    let mut reversed = transactions.clone();
    reversed.reverse();
    let config = MiningConfig::new(0.25);

    let forward = counts(&fp_growth(&transactions, &config).unwrap());
    let backward = counts(&fp_growth(&reversed, &config).unwrap());

    assert_eq!(forward, backward);
    assert_eq!(forward, counts(&candidate_gen(&transactions, &config).unwrap()));
    assert_eq!(forward[&vec!["p", "q", "r"]], 1);
}

#[test]
fn zero_support_reports_only_observed_itemsets() {
    let transactions = vec![vec!["a", "b"], vec!["c"]];
    let config = MiningConfig::new(0.0);

    let expected = hashmap! {
        vec!["a"] => 1,
        vec!["b"] => 1,
        vec!["c"] => 1,
        vec!["a", "b"] => 1,
    };

    assert_eq!(counts(&candidate_gen(&transactions, &config).unwrap()), expected);
    assert_eq!(counts(&fp_growth(&transactions, &config).unwrap()), expected);
}

#[test]
fn long_single_path_is_mined_without_recursion() {
    let transaction: Vec<u32> = (0..16).collect();
    let transactions = vec![transaction.clone(), transaction];
    let config = MiningConfig::new(1.0);

    let fp = fp_growth(&transactions, &config).unwrap();

    assert_eq!(fp.len(), (1 << 16) - 1);
    assert!(fp.iter().all(|f| f.count == 2));
    assert!(fp.iter().any(|f| f.itemset.len() == 16));
}

#[test]
fn max_len_is_shared_by_both_miners() {
    let transactions = random_transactions(13, 40, 8, 0.5);
    let config = MiningConfig::new(0.1).with_max_len(2);
    let (apriori, fp) = both(&transactions, &config);

    assert!(apriori.iter().all(|f| f.itemset.len() <= 2));
    assert_eq!(counts(&apriori), counts(&fp));
}
