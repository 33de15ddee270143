//! Suite hierarchy error types

use thiserror::Error;

use super::suite::SuiteName;

/// Errors raised by normalization, ancestor resolution and minimization.
///
/// All of these are caller mistakes; none is retried or partially recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// Suite is not a node of the DAG, or has no test list
    #[error("Unknown suite: {0}")]
    UnknownSuite(SuiteName),

    /// An ancestor of the suite being minimized has no test list
    #[error("Suite '{ancestor}' (ancestor of '{suite}') has no test list")]
    MissingAncestorTests {
        /// Suite being minimized
        suite: SuiteName,
        /// Ancestor without an entry
        ancestor: SuiteName,
    },

    /// The nested relation makes a suite its own ancestor
    #[error("Cycle in suite hierarchy: {}", format_path(.path))]
    Cycle {
        /// Suites along the cycle, first suite repeated at the end
        path: Vec<SuiteName>,
    },
}

fn format_path(path: &[SuiteName]) -> String {
    path.iter()
        .map(SuiteName::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Result type for hierarchy operations
pub type HierarchyResult<T> = Result<T, HierarchyError>;
