//! Command dispatch for the rsroadmap CLI

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::instrument;

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::display::ToTreeString;
use crate::errors::RoadmapError;
use crate::load_all;
use crate::loader::RoadmapId;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::List) => _list(),
        Some(Commands::Tree { roadmap }) => _tree(*roadmap),
        Some(Commands::Leaves { roadmap }) => _leaves(*roadmap),
        Some(Commands::Stats { roadmap }) => _stats(*roadmap),
        Some(Commands::Export { roadmap, pretty }) => _export(*roadmap, *pretty),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

#[instrument]
fn _list() -> CliResult<()> {
    for roadmap in load_all()? {
        output::info(&format!(
            "{:<10} {} ({} nodes)",
            roadmap.id.key(),
            roadmap.title(),
            roadmap.root.node_count()
        ));
    }
    Ok(())
}

#[instrument]
fn _tree(id: RoadmapId) -> CliResult<()> {
    let roadmap = id.load()?;
    println!("{}", roadmap.root.to_tree_string());
    Ok(())
}

#[instrument]
fn _leaves(id: RoadmapId) -> CliResult<()> {
    let roadmap = id.load()?;
    for leaf in roadmap.root.leaf_nodes() {
        output::info(leaf);
    }
    Ok(())
}

#[instrument]
fn _stats(id: RoadmapId) -> CliResult<()> {
    let roadmap = id.load()?;
    let root = &roadmap.root;
    let snippets = root.iter().filter(|n| n.code.is_some()).count();

    output::header(roadmap.title());
    output::detail(&format!("nodes:    {}", root.node_count()));
    output::detail(&format!("depth:    {}", root.depth()));
    output::detail(&format!("leaves:   {}", root.leaf_nodes().len()));
    output::detail(&format!("snippets: {}", snippets));
    let per_level = root.iter_breadth_first().counts_by(|(depth, _)| depth);
    for (depth, count) in per_level.into_iter().sorted() {
        output::detail(&format!("level {}:  {} nodes", depth, count));
    }
    Ok(())
}

#[instrument]
fn _export(id: RoadmapId, pretty: bool) -> CliResult<()> {
    let roadmap = id.load()?;
    let json = if pretty {
        serde_json::to_vec_pretty(&roadmap.root)
    } else {
        serde_json::to_vec(&roadmap.root)
    }
    .map_err(RoadmapError::Parse)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&json)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

#[instrument]
fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
