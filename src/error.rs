use thiserror::Error;

/// Recoverable graph conditions. None of these abort a computation; the
/// caller decides whether to retry with corrected input.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("a node with id `{0}` already exists")]
    DuplicateNode(String),
    #[error("no node with id `{0}` in this graph")]
    NodeNotFound(String),
    #[error("path has no edges")]
    EmptyPath,
}
