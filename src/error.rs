//! Error types for graph lookups and graph file loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Lookup failures on a graph.
///
/// Insertions never produce these: a duplicate id or a missing endpoint on
/// an add operation is reported through a `false` return instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No live vertex carries this id.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// No edge carries this id.
    #[error("edge not found: {0}")]
    EdgeNotFound(String),

    /// Positional vertex index past the end of the vertex listing.
    #[error("vertex index {index} out of range for {len} vertices")]
    VertexIndexOutOfRange { index: usize, len: usize },
}

/// Failures that stop loading a graph description or credit file.
///
/// Lines that are merely malformed do not end up here, they are collected in
/// the [`LoadReport`](crate::loader::LoadReport) instead.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from the underlying stream failed mid-way.
    #[error("read error at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// One of the two count lines is missing or not a number.
    #[error("malformed header at line {line}: {reason}")]
    MalformedHeader { line: usize, reason: String },
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;
