//! Suite complexity hierarchy
//!
//! Test suites form a partial order by the features they exercise: a suite
//! that adds replication, sharding or stepdowns on top of another suite's
//! behaviour is "more complex" than it and covers every test the simpler
//! suite would run. This module turns the curated form of that order into a
//! graph and uses it to drop redundant tests from simpler suites.
//!
//! # Architecture
//!
//! - [`NestedRelation`](relation::NestedRelation) - The curated nested form
//! - [`compute_dag`](dag::compute_dag) - Normalizes it into a [`SuiteDag`](dag::SuiteDag)
//! - [`compute_ancestors`](ancestors::compute_ancestors) - Strictly more complex suites
//! - [`compute_minimal_test_set`](minimize::compute_minimal_test_set) - Tests left to run
//! - [`SuiteHierarchy`] - A DAG bundled with the test lists it minimizes

pub mod ancestors;
pub mod dag;
pub mod error;
pub mod minimize;
pub mod node;
pub mod relation;
pub mod suite;

pub use ancestors::{compute_ancestors, compute_descendants};
pub use dag::{compute_dag, SuiteDag};
pub use error::{HierarchyError, HierarchyResult};
pub use minimize::{compute_minimal_test_set, compute_minimal_test_sets, test_membership};
pub use node::SuiteNode;
pub use relation::NestedRelation;
pub use suite::{SuiteName, SuiteTests, TestName};

use std::collections::{BTreeMap, BTreeSet};

/// A normalized hierarchy together with the full test list of each suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteHierarchy {
    dag: SuiteDag,
    tests: SuiteTests,
}

impl SuiteHierarchy {
    /// Normalize `relation` and attach `tests`.
    pub fn new(
        relation: &NestedRelation,
        tests: SuiteTests,
    ) -> HierarchyResult<Self> {
        Ok(Self {
            dag: compute_dag(relation)?,
            tests,
        })
    }

    /// The normalized graph.
    #[inline]
    pub fn dag(&self) -> &SuiteDag {
        &self.dag
    }

    /// Full test list of every suite.
    #[inline]
    pub fn tests(&self) -> &SuiteTests {
        &self.tests
    }

    /// See [`compute_ancestors`].
    pub fn ancestors(
        &self,
        suite: &str,
    ) -> HierarchyResult<BTreeSet<SuiteName>> {
        compute_ancestors(suite, &self.dag)
    }

    /// See [`compute_descendants`].
    pub fn descendants(
        &self,
        suite: &str,
    ) -> HierarchyResult<BTreeSet<SuiteName>> {
        compute_descendants(suite, &self.dag)
    }

    /// See [`compute_minimal_test_set`].
    pub fn minimal_test_set(
        &self,
        suite: &str,
    ) -> HierarchyResult<BTreeSet<TestName>> {
        compute_minimal_test_set(suite, &self.dag, &self.tests)
    }

    /// See [`compute_minimal_test_sets`].
    pub fn minimal_test_sets(&self) -> HierarchyResult<BTreeMap<SuiteName, BTreeSet<TestName>>> {
        compute_minimal_test_sets(&self.dag, &self.tests)
    }

    /// Suites whose full test list contains `test`.
    pub fn suites_running(
        &self,
        test: &str,
    ) -> BTreeSet<SuiteName> {
        self.tests
            .iter()
            .filter(|(_, tests)| tests.contains(test))
            .map(|(suite, _)| suite.clone())
            .collect()
    }
}
