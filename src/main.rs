use clap::Parser;

mod cli;
mod commands;
mod domain;
mod encoder;
mod services;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Run { jobs, strict } => commands::handle_run(&cli, *jobs, *strict),
        Commands::Plan => commands::handle_plan(&cli),
        Commands::Vectors => commands::handle_vectors(&cli),
    }
}
