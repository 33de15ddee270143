//! Minimal test sets
//!
//! A test listed by a suite and by any of its ancestors already runs in the
//! ancestor, so the suite only keeps the tests no ancestor covers. Over any
//! ancestor-closed group of suites the union of minimal sets equals the union
//! of full test lists.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;
use tracing::debug;

use super::ancestors::compute_ancestors;
use super::dag::SuiteDag;
use super::error::{HierarchyError, HierarchyResult};
use super::suite::{SuiteName, SuiteTests, TestName};

/// Tests of `suite` that appear in no ancestor's test list.
///
/// `tests_in_suite` is only read; the result is a fresh set.
///
/// # Errors
///
/// - [`HierarchyError::UnknownSuite`] if `suite` is missing from `dag` or
///   from `tests_in_suite`.
/// - [`HierarchyError::MissingAncestorTests`] if an ancestor has no entry in
///   `tests_in_suite`.
///
/// # Examples
///
/// ```
/// use std::collections::{BTreeMap, BTreeSet};
/// use suite_hierarchy::{compute_dag, compute_minimal_test_set, relation, SuiteTests};
///
/// let dag = compute_dag(&relation! { "A" => { "B" => {} } }).unwrap();
/// let mut tests = SuiteTests::new();
/// tests.insert("A".into(), BTreeSet::from(["t1".to_string()]));
/// tests.insert("B".into(), BTreeSet::from(["t1".to_string(), "t2".to_string()]));
///
/// let minimal = compute_minimal_test_set("B", &dag, &tests).unwrap();
/// assert_eq!(minimal, BTreeSet::from(["t2".to_string()]));
/// ```
pub fn compute_minimal_test_set(
    suite: &str,
    dag: &SuiteDag,
    tests_in_suite: &SuiteTests,
) -> HierarchyResult<BTreeSet<TestName>> {
    dag.node(suite)?;
    let own = tests_in_suite
        .get(suite)
        .ok_or_else(|| HierarchyError::UnknownSuite(suite.into()))?;

    let ancestors = compute_ancestors(suite, dag)?;
    let mut minimal = own.clone();
    for ancestor in &ancestors {
        let covered = tests_in_suite.get(ancestor).ok_or_else(|| {
            HierarchyError::MissingAncestorTests {
                suite: suite.into(),
                ancestor: ancestor.clone(),
            }
        })?;
        minimal.retain(|test| !covered.contains(test));
    }

    debug!(
        suite,
        ancestors = ancestors.len(),
        full = own.len(),
        minimal = minimal.len(),
        "minimized suite"
    );
    Ok(minimal)
}

/// Minimal test set of every suite listed in `tests_in_suite`.
///
/// A listed suite that is not part of `dag` has no more complex suite, so it
/// keeps its full list. Suites are minimized independently and in parallel.
/// The first error encountered is returned and no partial result is produced.
pub fn compute_minimal_test_sets(
    dag: &SuiteDag,
    tests_in_suite: &SuiteTests,
) -> HierarchyResult<BTreeMap<SuiteName, BTreeSet<TestName>>> {
    tests_in_suite
        .par_iter()
        .map(|(suite, tests)| {
            if !dag.contains(suite.as_str()) {
                debug!(suite = %suite, "suite outside hierarchy keeps its full list");
                return Ok((suite.clone(), tests.clone()));
            }
            compute_minimal_test_set(suite.as_str(), dag, tests_in_suite)
                .map(|minimal| (suite.clone(), minimal))
        })
        .collect()
}

/// Map each test to the suites whose full list contains it.
pub fn test_membership(tests_in_suite: &SuiteTests) -> BTreeMap<TestName, BTreeSet<SuiteName>> {
    let mut membership: BTreeMap<TestName, BTreeSet<SuiteName>> = BTreeMap::new();
    for (suite, tests) in tests_in_suite {
        for test in tests {
            membership
                .entry(test.clone())
                .or_default()
                .insert(suite.clone());
        }
    }
    membership
}
