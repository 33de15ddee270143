//! Node of the complexity DAG
//!
//! Holds the direct neighbours of one suite in both directions.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::suite::SuiteName;

/// Direct parents and children of a suite.
///
/// Parents are the suites immediately more complex than this one; children
/// are the suites immediately less complex. Equality compares both sets by
/// membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuiteNode {
    /// Suites that directly supersede this one
    parents: BTreeSet<SuiteName>,

    /// Suites this one directly supersedes
    children: BTreeSet<SuiteName>,
}

impl SuiteNode {
    /// Create a node with no edges.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct parents (more complex suites).
    #[inline]
    pub fn parents(&self) -> &BTreeSet<SuiteName> {
        &self.parents
    }

    /// Direct children (less complex suites).
    #[inline]
    pub fn children(&self) -> &BTreeSet<SuiteName> {
        &self.children
    }

    /// Record a direct parent. Returns `false` if it was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use suite_hierarchy::SuiteNode;
    ///
    /// let mut node = SuiteNode::new();
    /// assert!(node.add_parent("A".into()));
    /// assert!(!node.add_parent("A".into()));
    /// assert_eq!(node.parents().len(), 1);
    /// ```
    #[inline]
    pub fn add_parent(
        &mut self,
        parent: SuiteName,
    ) -> bool {
        self.parents.insert(parent)
    }

    /// Record a direct child. Returns `false` if it was already present.
    #[inline]
    pub fn add_child(
        &mut self,
        child: SuiteName,
    ) -> bool {
        self.children.insert(child)
    }

    /// Whether `name` is a direct parent.
    #[inline]
    pub fn has_parent(
        &self,
        name: &str,
    ) -> bool {
        self.parents.contains(name)
    }

    /// Whether `name` is a direct child.
    #[inline]
    pub fn has_child(
        &self,
        name: &str,
    ) -> bool {
        self.children.contains(name)
    }

    /// No suite is more complex than this one.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// No suite is less complex than this one.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

fn write_names(
    f: &mut fmt::Formatter<'_>,
    names: &BTreeSet<SuiteName>,
) -> fmt::Result {
    f.write_str("{")?;
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", name)?;
    }
    f.write_str("}")
}

impl fmt::Display for SuiteNode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("parents=")?;
        write_names(f, &self.parents)?;
        f.write_str(" children=")?;
        write_names(f, &self.children)
    }
}
