//! Roster CLI — builds the people, graph, and stats documents.
//!
//! Usage:
//!   roster build [--config path] [--data-dir dir] [--out-dir dir]
//!   roster stats [--config path] [--data-dir dir]

use clap::{Parser, Subcommand};
use roster::{pipeline, RosterConfig, RosterError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Merge award, editor, and officer datasets into a people registry"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding the source CSV files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and write people.json, graph.json, and stats.json
    Build {
        /// Directory to write the documents into
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Build in memory and print headline counts
    Stats,
}

fn load_config(path: Option<&PathBuf>, data_dir: Option<PathBuf>) -> Result<RosterConfig, RosterError> {
    let mut config = match path {
        Some(p) => RosterConfig::load(p)?,
        None => RosterConfig::default(),
    };
    if let Some(dir) = data_dir {
        config = config.with_data_dir(dir);
    }
    Ok(config)
}

fn cmd_build(config: RosterConfig, out_dir: Option<PathBuf>) -> i32 {
    let config = match out_dir {
        Some(dir) => config.with_output_dir(dir),
        None => config,
    };
    match pipeline::build_and_write(&config) {
        Ok((docs, written)) => {
            println!(
                "Wrote {} files ({} people, {} connected, {} edges)",
                written.len(),
                docs.people.len(),
                docs.graph.nodes.len(),
                docs.graph.links.len()
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_stats(config: RosterConfig) -> i32 {
    let docs = match pipeline::build(&config) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let s = &docs.stats;
    println!("{:<20}  {:>7}", "people", s.total_people);
    println!("{:<20}  {:>7}", "awards", s.total_awards);
    println!("{:<20}  {:>7}", "journals", s.total_journals);
    println!("{:<20}  {:>7}", "organizations", s.total_organizations);
    println!("{:<20}  {:>7}", "connected", s.total_connected);
    println!("{:<20}  {:>7}", "edges", s.total_edges);
    if !s.top_connected.is_empty() {
        println!();
        println!("{:<36}  {:>11}", "MOST CONNECTED", "CONNECTIONS");
        println!("{}", "-".repeat(49));
        for p in &s.top_connected {
            println!("{:<36}  {:>11}", p.name, p.connections);
        }
    }
    0
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match load_config(cli.config.as_ref(), cli.data_dir) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let code = match cli.command {
        Commands::Build { out_dir } => cmd_build(config, out_dir),
        Commands::Stats => cmd_stats(config),
    };
    std::process::exit(code);
}
