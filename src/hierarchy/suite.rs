//! Suite and test identifiers
//!
//! Names are opaque: two distinct spellings are two distinct suites.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a test suite.
///
/// Borrows as `str`, so maps keyed by `SuiteName` can be queried with `&str`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuiteName(String);

impl SuiteName {
    /// Create a suite name.
    ///
    /// # Examples
    ///
    /// ```
    /// use suite_hierarchy::SuiteName;
    ///
    /// let name = SuiteName::new("sharding_jscore_passthrough");
    /// assert_eq!(name.as_str(), "sharding_jscore_passthrough");
    /// ```
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        SuiteName(name.into())
    }

    /// The name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SuiteName {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SuiteName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SuiteName {
    fn from(name: &str) -> Self {
        SuiteName(name.to_string())
    }
}

impl From<String> for SuiteName {
    fn from(name: String) -> Self {
        SuiteName(name)
    }
}

/// Name of a single test (typically a test file path).
pub type TestName = String;

/// Full test list of every suite.
pub type SuiteTests = BTreeMap<SuiteName, BTreeSet<TestName>>;
