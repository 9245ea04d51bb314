use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the production plan for a scenario payload.
    Plan(PlanArgs),
}

#[derive(Parser)]
pub struct PlanArgs {
    /// Path to the scenario payload (JSON with `load`, `fuels`, and
    /// `powerplants`).
    pub payload: PathBuf,

    /// Print the plan as wire-format JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}
