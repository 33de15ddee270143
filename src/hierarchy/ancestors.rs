//! Transitive ancestry and descent

use std::collections::{BTreeSet, VecDeque};

use tracing::trace;

use super::dag::SuiteDag;
use super::error::HierarchyResult;
use super::node::SuiteNode;
use super::suite::SuiteName;

/// Every suite strictly more complex than `node`.
///
/// The suite itself is never included; a root yields the empty set.
///
/// # Errors
///
/// [`HierarchyError::UnknownSuite`](super::HierarchyError::UnknownSuite) if
/// `node` is not in `dag`.
///
/// # Examples
///
/// ```
/// use suite_hierarchy::{compute_ancestors, compute_dag, relation};
///
/// let dag = compute_dag(&relation! { "A" => { "B" => { "C" => {} } } }).unwrap();
/// let ancestors = compute_ancestors("C", &dag).unwrap();
/// assert_eq!(ancestors.len(), 2);
/// assert!(compute_ancestors("A", &dag).unwrap().is_empty());
/// ```
pub fn compute_ancestors(
    node: &str,
    dag: &SuiteDag,
) -> HierarchyResult<BTreeSet<SuiteName>> {
    let ancestors = closure(node, dag, SuiteNode::parents)?;
    trace!(suite = node, ancestors = ancestors.len(), "resolved ancestors");
    Ok(ancestors)
}

/// Every suite strictly less complex than `node`.
pub fn compute_descendants(
    node: &str,
    dag: &SuiteDag,
) -> HierarchyResult<BTreeSet<SuiteName>> {
    let descendants = closure(node, dag, SuiteNode::children)?;
    trace!(
        suite = node,
        descendants = descendants.len(),
        "resolved descendants"
    );
    Ok(descendants)
}

/// Breadth-first closure over one edge direction, excluding the start node.
fn closure(
    start: &str,
    dag: &SuiteDag,
    neighbours: fn(&SuiteNode) -> &BTreeSet<SuiteName>,
) -> HierarchyResult<BTreeSet<SuiteName>> {
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::from([dag.node(start)?]);

    while let Some(current) = queue.pop_front() {
        for next in neighbours(current) {
            if seen.insert(next.clone()) {
                queue.push_back(dag.node(next.as_str())?);
            }
        }
    }
    Ok(seen)
}
