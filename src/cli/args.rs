//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

use crate::loader::RoadmapId;

/// Curated learning roadmaps (Git, PySpark) as immutable content trees
#[derive(Parser, Debug)]
#[command(name = "rsroadmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List built-in roadmaps
    List,

    /// Show roadmap as tree
    Tree {
        /// Roadmap to show
        #[arg(value_enum)]
        roadmap: RoadmapId,
    },

    /// Print leaf entries
    Leaves {
        /// Roadmap to list leaves for
        #[arg(value_enum)]
        roadmap: RoadmapId,
    },

    /// Show roadmap statistics
    Stats {
        /// Roadmap to summarize
        #[arg(value_enum)]
        roadmap: RoadmapId,
    },

    /// Write roadmap JSON to stdout
    Export {
        /// Roadmap to export
        #[arg(value_enum)]
        roadmap: RoadmapId,
        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
