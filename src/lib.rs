//! Curated learning roadmaps as immutable content trees.
//!
//! Two hand-authored roadmaps (Git and PySpark) ship as embedded literal
//! data. Each is loaded once into an owned [`Node`] tree and handed to the
//! consumer by reference; the tree is never mutated afterwards and is safe
//! to share across threads for read-only access.

pub mod cli;
pub mod display;
pub mod errors;
pub mod exitcode;
pub mod loader;
pub mod node;
pub mod traverse;
pub mod util;

pub use errors::{RoadmapError, RoadmapResult};
pub use loader::{parse_roadmap, Roadmap, RoadmapId};
pub use node::Node;

/// Loads the Git roadmap from its embedded literal.
///
/// # Errors
///
/// Fails only if the backing literal data is malformed (a node without a
/// non-empty `name`), which is a build-time concern for the embedded data.
pub fn load_git() -> RoadmapResult<Roadmap> {
    RoadmapId::Git.load()
}

/// Loads the PySpark roadmap from its embedded literal.
///
/// # Errors
///
/// See [`load_git`].
pub fn load_pyspark() -> RoadmapResult<Roadmap> {
    RoadmapId::Pyspark.load()
}

/// Loads every built-in roadmap, in presentation order.
pub fn load_all() -> RoadmapResult<Vec<Roadmap>> {
    RoadmapId::ALL.iter().map(|id| id.load()).collect()
}
