//! Errors raised by the style engine.
//!
//! Resolution itself never fails: unknown or malformed values degrade to an
//! empty string or zero pixels. Only asking for the computed style of
//! something that is not an element of the queried tree is an error.

use koala_dom::NodeId;
use thiserror::Error;

/// Failures when setting up a style query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The node id is out of range for the tree being queried.
    #[error("node {0:?} does not belong to this document")]
    NodeNotFound(NodeId),

    /// Computed styles only exist for elements.
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),

    /// No built-in browser profile has this name.
    #[error("unknown browser profile '{0}'")]
    UnknownProfile(String),
}
