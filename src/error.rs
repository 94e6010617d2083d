use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading graphs or running contraction trials.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A token that is not a vertex label, reported only under strict parsing.
    #[error("line {line}: malformed token {token:?}")]
    MalformedToken { line: usize, token: String },

    /// An edge from a vertex to itself was requested.
    #[error("self-loop on vertex {vertex}")]
    SelfLoop { vertex: u32 },

    /// Contraction cannot reach two components through edges.
    #[error("graph has {components} connected components; contraction needs a connected graph")]
    Disconnected { components: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
