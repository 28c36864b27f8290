use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadmapError {
    /// A node without a usable label. Partial trees have no defined
    /// meaning, so the whole load is rejected.
    #[error("Malformed node at {path}: {reason}")]
    MalformedNode { path: String, reason: String },

    #[error("Invalid roadmap literal: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type RoadmapResult<T> = Result<T, RoadmapError>;
