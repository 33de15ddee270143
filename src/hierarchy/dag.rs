//! Complexity DAG
//!
//! Flat adjacency form of a [`NestedRelation`]. Every suite named anywhere in
//! the relation becomes exactly one node; every edge, however many times it
//! is restated, becomes exactly one parent/child pair.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use serde::Serialize;
use tracing::{debug, trace};

use super::error::{HierarchyError, HierarchyResult};
use super::node::SuiteNode;
use super::relation::NestedRelation;
use super::suite::SuiteName;

/// Normalized complexity graph: suite name to its direct neighbours.
///
/// Parent and child sets are kept consistent in both directions, and the
/// graph is acyclic. Two DAGs are equal when they hold the same suites with
/// the same neighbour sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SuiteDag {
    nodes: BTreeMap<SuiteName, SuiteNode>,
}

impl SuiteDag {
    /// Node for `name`, if the suite is part of the graph.
    #[inline]
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&SuiteNode> {
        self.nodes.get(name)
    }

    /// Node for `name`, or [`HierarchyError::UnknownSuite`].
    pub fn node(
        &self,
        name: &str,
    ) -> HierarchyResult<&SuiteNode> {
        self.nodes
            .get(name)
            .ok_or_else(|| HierarchyError::UnknownSuite(name.into()))
    }

    /// Whether `name` is part of the graph.
    #[inline]
    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.nodes.contains_key(name)
    }

    /// Number of suites.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no suites.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over `(suite, node)` pairs, ordered by name.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&SuiteName, &SuiteNode)> {
        self.nodes.iter()
    }

    /// All suite names, ordered by name.
    #[inline]
    pub fn suites(&self) -> impl Iterator<Item = &SuiteName> {
        self.nodes.keys()
    }

    /// Suites with no parents (the most complex ones).
    pub fn roots(&self) -> Vec<&SuiteName> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.is_root())
            .map(|(name, _)| name)
            .collect()
    }

    /// Suites with no children (the least complex ones).
    pub fn leaves(&self) -> Vec<&SuiteName> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(name, _)| name)
            .collect()
    }

    /// Every `(parent, child)` edge, ordered by parent then child.
    pub fn edges(&self) -> Vec<(&SuiteName, &SuiteName)> {
        self.nodes
            .iter()
            .flat_map(|(parent, node)| node.children().iter().map(move |child| (parent, child)))
            .collect()
    }

    /// Suites ordered so that each one comes after all of its ancestors.
    ///
    /// Among suites whose parents are all placed, the smallest name goes
    /// first, so the order is fully determined by the graph.
    pub fn topological_order(&self) -> Vec<&SuiteName> {
        let mut pending: HashMap<&SuiteName, usize> = self
            .nodes
            .iter()
            .map(|(name, node)| (name, node.parents().len()))
            .collect();
        let mut ready: BTreeSet<&SuiteName> = pending
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(name, _)| *name)
            .collect();

        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(name) = ready.pop_first() {
            order.push(name);
            let Some(node) = self.nodes.get(name) else {
                continue;
            };
            for child in node.children() {
                if let Some(count) = pending.get_mut(child) {
                    *count -= 1;
                    if *count == 0 {
                        ready.insert(child);
                    }
                }
            }
        }
        order
    }
}

/// Normalize a nested relation into a [`SuiteDag`].
///
/// Suites that only appear as children are still materialized, roots without
/// children are kept as isolated nodes, and redundant restatements of an edge
/// collapse into one. The result does not depend on the order of entries in
/// `nested`.
///
/// # Errors
///
/// [`HierarchyError::Cycle`] if some suite would become its own ancestor.
///
/// # Examples
///
/// ```
/// use suite_hierarchy::{compute_dag, relation};
///
/// let dag = compute_dag(&relation! {
///     "A" => { "B" => { "C" => {} }, "C" => {} },
/// }).unwrap();
/// let c = dag.get("C").unwrap();
/// assert!(c.has_parent("A") && c.has_parent("B"));
/// ```
pub fn compute_dag(nested: &NestedRelation) -> HierarchyResult<SuiteDag> {
    let mut nodes: BTreeMap<SuiteName, SuiteNode> = BTreeMap::new();
    let mut queue: VecDeque<(&SuiteName, &NestedRelation)> = nested.iter().collect();
    let mut visits = 0usize;

    while let Some((parent, children)) = queue.pop_front() {
        visits += 1;
        nodes.entry(parent.clone()).or_default();
        for (child, grandchildren) in children.iter() {
            nodes
                .entry(child.clone())
                .or_default()
                .add_parent(parent.clone());
            nodes
                .entry(parent.clone())
                .or_default()
                .add_child(child.clone());
            trace!(parent = %parent, child = %child, "edge");
            queue.push_back((child, grandchildren));
        }
    }

    if let Some(path) = find_cycle(&nodes) {
        debug!(len = path.len() - 1, "rejecting cyclic suite hierarchy");
        return Err(HierarchyError::Cycle { path });
    }

    let dag = SuiteDag { nodes };
    debug!(
        suites = dag.len(),
        edges = dag.edges().len(),
        visits,
        "normalized suite hierarchy"
    );
    Ok(dag)
}

/// First cycle reachable along `children` edges, as a closed path.
fn find_cycle(nodes: &BTreeMap<SuiteName, SuiteNode>) -> Option<Vec<SuiteName>> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        OnPath,
        Done,
    }

    let mut marks: HashMap<&SuiteName, Mark> = HashMap::with_capacity(nodes.len());

    for (start, start_node) in nodes {
        if marks.contains_key(start) {
            continue;
        }
        marks.insert(start, Mark::OnPath);
        let mut path = vec![start];
        let mut stack = vec![start_node.children().iter()];

        loop {
            let next = match stack.last_mut() {
                Some(children) => children.next(),
                None => break,
            };
            match next {
                Some(child) => match marks.get(child) {
                    Some(Mark::OnPath) => {
                        let from = path.iter().position(|name| *name == child).unwrap_or(0);
                        let mut cycle: Vec<SuiteName> =
                            path[from..].iter().map(|name| (*name).clone()).collect();
                        cycle.push(child.clone());
                        return Some(cycle);
                    }
                    Some(Mark::Done) => {}
                    None => match nodes.get(child) {
                        Some(node) => {
                            marks.insert(child, Mark::OnPath);
                            path.push(child);
                            stack.push(node.children().iter());
                        }
                        None => {
                            marks.insert(child, Mark::Done);
                        }
                    },
                },
                None => {
                    stack.pop();
                    if let Some(done) = path.pop() {
                        marks.insert(done, Mark::Done);
                    }
                }
            }
        }
    }
    None
}
