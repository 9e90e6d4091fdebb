//! Error taxonomy for graph mutation and analysis.

/// Errors raised by graph construction, mutation and analysis.
///
/// Every variant is a deterministic precondition violation. Operations
/// validate all of their arguments before touching the graph, so a
/// returned error always leaves the graph unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// The referenced element is not stored in any node.
    #[error("Node not found: {0}")]
    NotFound(String),

    /// The element is already stored in another node.
    #[error("Element already exists in the graph: {0}")]
    DuplicateElement(String),

    /// Edge weights must be finite and non-negative.
    #[error("Invalid edge weight {0}: weight must be >= 0")]
    InvalidWeight(f64),

    /// Construction was attempted with a negative or oversized capacity.
    #[error(
        "Invalid capacity {0}: capacity must be between 0 and {max}",
        max = super::MAX_CAPACITY
    )]
    InvalidCapacity(i64),

    /// Adding a node would exceed the fixed capacity.
    #[error("Graph capacity of {0} nodes exceeded")]
    CapacityExceeded(usize),

    /// No edge exists between the given endpoints.
    #[error("No edge from {origin} to {destination}")]
    EdgeNotFound {
        /// Origin element, rendered for the message.
        origin: String,
        /// Destination element, rendered for the message.
        destination: String,
    },

    /// The operation needs at least one node.
    #[error("Operation requires a non-empty graph: {0}")]
    EmptyStructure(&'static str),
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
