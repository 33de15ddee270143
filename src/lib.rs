//! Suite hierarchy
//!
//! Curated "more complex than" relation between test suites, and the
//! per-suite minimal test sets it implies: a test that some more complex
//! suite already runs does not need to run again in a simpler one.
//!
//! # Example
//!
//! ```
//! use suite_hierarchy::{compute_dag, compute_minimal_test_set, relation, SuiteTests};
//!
//! let dag = compute_dag(&relation! {
//!     "sharded_collections_passthrough" => { "replica_sets_passthrough" => { "core" => {} } },
//! })
//! .unwrap();
//!
//! let mut tests = SuiteTests::new();
//! for suite in ["sharded_collections_passthrough", "replica_sets_passthrough", "core"] {
//!     tests.insert(suite.into(), ["find.js".to_string()].into());
//! }
//! tests.get_mut("core").unwrap().insert("apply_ops.js".to_string());
//!
//! let minimal = compute_minimal_test_set("core", &dag, &tests).unwrap();
//! assert_eq!(minimal.len(), 1);
//! assert!(minimal.contains("apply_ops.js"));
//! ```

#![doc(html_root_url = "https://docs.rs/suite-hierarchy")]
#![warn(rust_2018_idioms)]

pub mod hierarchy;

// Utility modules
pub mod util;

// Re-exports
pub use hierarchy::{
    compute_ancestors, compute_dag, compute_descendants, compute_minimal_test_set,
    compute_minimal_test_sets, test_membership, HierarchyError, HierarchyResult, NestedRelation,
    SuiteDag, SuiteHierarchy, SuiteName, SuiteNode, SuiteTests, TestName,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name
pub const NAME: &str = "suite-hierarchy";
