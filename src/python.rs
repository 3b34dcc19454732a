use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyFrozenSet;
use pyo3::wrap_pyfunction;

use crate::{FrequentItemset, MiningConfig, DEFAULT_NUM_BUCKETS};

type PyFrequentItemsets = Vec<(Py<PyFrozenSet>, f64)>;

#[pymodule]
fn frequent_itemsets(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(candidate_gen, m)?)?;
    m.add_function(wrap_pyfunction!(fp_growth, m)?)?;
    Ok(())
}

/// Level-wise mining with PCY pair pruning.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, num_buckets = DEFAULT_NUM_BUCKETS))]
fn candidate_gen(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support: f64,
    num_buckets: usize,
) -> PyResult<PyFrequentItemsets> {
    let config = MiningConfig::new(min_support).with_num_buckets(num_buckets);
    let frequent = crate::candidate_gen(&transactions, &config)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    convert_frequent_itemsets(py, frequent)
}

/// FP-Growth mining.
#[pyfunction]
fn fp_growth(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support: f64,
) -> PyResult<PyFrequentItemsets> {
    let config = MiningConfig::new(min_support);
    let frequent = crate::fp_growth(&transactions, &config)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    convert_frequent_itemsets(py, frequent)
}

fn convert_frequent_itemsets(
    py: Python<'_>,
    frequent: Vec<FrequentItemset<String>>,
) -> PyResult<PyFrequentItemsets> {
    frequent
        .into_iter()
        .map(|f| {
            let set: Py<PyFrozenSet> = PyFrozenSet::new(py, f.itemset.items())?.into();
            Ok((set, f.support))
        })
        .collect()
}
