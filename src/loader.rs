//! Builds the built-in roadmap trees from their embedded literals.

use std::fmt;

use clap::ValueEnum;
use tracing::instrument;

use crate::errors::{RoadmapError, RoadmapResult};
use crate::node::Node;

const GIT_DATA: &str = include_str!("../data/git.json");
const PYSPARK_DATA: &str = include_str!("../data/pyspark.json");

/// The built-in roadmaps shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoadmapId {
    Git,
    Pyspark,
}

impl RoadmapId {
    /// All built-in roadmaps, in presentation order.
    pub const ALL: [RoadmapId; 2] = [RoadmapId::Git, RoadmapId::Pyspark];

    pub fn key(&self) -> &'static str {
        match self {
            RoadmapId::Git => "git",
            RoadmapId::Pyspark => "pyspark",
        }
    }

    fn data(&self) -> &'static str {
        match self {
            RoadmapId::Git => GIT_DATA,
            RoadmapId::Pyspark => PYSPARK_DATA,
        }
    }

    /// Parses and validates the backing literal.
    ///
    /// Fails only if the literal is malformed, which is a build-time
    /// concern for the embedded data, not a runtime condition.
    #[instrument(level = "debug")]
    pub fn load(self) -> RoadmapResult<Roadmap> {
        let root = parse_roadmap(self.data())?;
        Ok(Roadmap { id: self, root })
    }
}

impl fmt::Display for RoadmapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One full named tree of nodes representing a learning topic outline.
///
/// Constructed once, immutable afterwards. `Node` holds owned data only,
/// so a loaded roadmap can be shared across threads for read-only access
/// without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roadmap {
    pub id: RoadmapId,
    pub root: Node,
}

impl Roadmap {
    pub fn title(&self) -> &str {
        &self.root.name
    }
}

/// Parses a JSON literal into a validated node tree.
///
/// Every node must carry a non-empty `name`; `children` and `code` are
/// genuinely optional. The first malformed node rejects the whole load.
#[instrument(level = "debug", skip(data))]
pub fn parse_roadmap(data: &str) -> RoadmapResult<Node> {
    let root: Node = serde_json::from_str(data)?;
    validate(&root, &mut Vec::new())?;
    Ok(root)
}

fn validate<'a>(node: &'a Node, path: &mut Vec<&'a str>) -> RoadmapResult<()> {
    if node.name.trim().is_empty() {
        let path = if path.is_empty() {
            "(root)".to_string()
        } else {
            path.join(" / ")
        };
        return Err(RoadmapError::MalformedNode {
            path,
            reason: "node name must be non-empty".to_string(),
        });
    }
    path.push(&node.name);
    for child in &node.children {
        validate(child, path)?;
    }
    path.pop();
    Ok(())
}
