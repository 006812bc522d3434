use cancel_this::Cancelled;
use std::fmt::{Display, Formatter};

/// Errors rejected at the boundary of [`crate::find_pathways`], before any BFS stage or DP
/// column is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathwayError {
    /// The path-length cutoff `K` was zero or negative.
    InvalidCutoff { cutoff: i64 },
    /// The graph builder was asked to register a reaction whose identifier collides with a
    /// metabolite identifier (or vice versa), which would make the graph fail to be bipartite.
    NotBipartite { id: String },
    /// A cancellation signal was observed between BFS stages or DP columns.
    Cancelled(Cancelled),
}

impl From<Cancelled> for PathwayError {
    fn from(value: Cancelled) -> Self {
        PathwayError::Cancelled(value)
    }
}

impl Display for PathwayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PathwayError::InvalidCutoff { cutoff } => {
                write!(f, "path-length cutoff must be positive, got {cutoff}")
            }
            PathwayError::NotBipartite { id } => {
                write!(f, "identifier `{id}` is used for both a metabolite and a reaction")
            }
            PathwayError::Cancelled(c) => write!(f, "{c}"),
        }
    }
}

impl std::error::Error for PathwayError {}

pub type PathwayResult<T> = Result<T, PathwayError>;
