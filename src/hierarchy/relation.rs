//! Nested complexity relation
//!
//! The curated, human-edited form of the hierarchy. An entry
//! `A -> { B -> { C -> {} } }` states that `A` is more complex than `B`
//! and `B` is more complex than `C`. The same suite may appear under
//! several parents, and an edge may be restated along several paths.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::suite::SuiteName;

/// Mapping from a suite to the suites directly below it, recursively.
///
/// Serializes as a plain nested map, e.g. `{"A": {"B": {}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NestedRelation(IndexMap<SuiteName, NestedRelation>);

impl NestedRelation {
    /// Create an empty relation.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` with the given children, replacing any previous entry
    /// for the same name at this level.
    pub fn insert(
        &mut self,
        name: impl Into<SuiteName>,
        children: NestedRelation,
    ) -> &mut Self {
        self.0.insert(name.into(), children);
        self
    }

    /// Builder form of [`insert`](Self::insert).
    ///
    /// # Examples
    ///
    /// ```
    /// use suite_hierarchy::NestedRelation;
    ///
    /// let relation = NestedRelation::new()
    ///     .with("A", NestedRelation::new().with("B", NestedRelation::new()))
    ///     .with("P", NestedRelation::new());
    /// assert_eq!(relation.len(), 2);
    /// ```
    pub fn with(
        mut self,
        name: impl Into<SuiteName>,
        children: NestedRelation,
    ) -> Self {
        self.insert(name, children);
        self
    }

    /// Children of `name` at this level, if present.
    #[inline]
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&NestedRelation> {
        self.0.get(name)
    }

    /// Iterate over `(name, children)` pairs at this level.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&SuiteName, &NestedRelation)> {
        self.0.iter()
    }

    /// Number of entries at this level.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this level has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<SuiteName>> FromIterator<(N, NestedRelation)> for NestedRelation {
    fn from_iter<I: IntoIterator<Item = (N, NestedRelation)>>(iter: I) -> Self {
        let mut relation = NestedRelation::new();
        for (name, children) in iter {
            relation.insert(name, children);
        }
        relation
    }
}

/// Build a [`NestedRelation`] from a literal.
///
/// ```
/// use suite_hierarchy::relation;
///
/// let r = relation! {
///     "A" => { "B" => { "C" => {} } },
///     "P" => {},
/// };
/// assert_eq!(r.len(), 2);
/// assert!(r.get("A").and_then(|a| a.get("B")).is_some());
/// ```
#[macro_export]
macro_rules! relation {
    () => {
        $crate::NestedRelation::new()
    };
    ($($name:literal => { $($inner:tt)* }),+ $(,)?) => {{
        let mut relation = $crate::NestedRelation::new();
        $(
            relation.insert($name, $crate::relation!($($inner)*));
        )+
        relation
    }};
}
