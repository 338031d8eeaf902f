//! routectl - IPv6 static route table inspector
//!
//! Loads a static routes file into a fixed-size route table and either
//! dumps the table or resolves destinations against it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ip6_routectl::report::{self, LookupReport};
use ip6_routectl::StaticRoutesFile;
use ip6_types::Ipv6Address;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

/// IPv6 static route table inspector
#[derive(Parser, Debug)]
#[command(name = "routectl")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Static routes file (TOML)
    #[arg(short = 'c', long, default_value = "/etc/ip6-routes.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the routes file and report how many routes were installed
    Check,

    /// Print the route table in lookup order
    Dump {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Resolve destination addresses against the table
    Lookup {
        /// Destination addresses
        #[arg(required = true)]
        destinations: Vec<Ipv6Address>,

        /// Source address, accepted for parity with the forwarding path
        #[arg(long)]
        src: Option<Ipv6Address>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let file = StaticRoutesFile::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let (registry, table) = file
        .build()
        .with_context(|| format!("building route table from {}", args.config.display()))?;

    match &args.command {
        Command::Check => {
            info!("{} is valid", args.config.display());
            println!(
                "{} routes installed ({} slots, {} interfaces)",
                table.len(),
                table.capacity(),
                registry.len()
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Dump { json } => {
            if *json {
                let views = report::route_views(&table, &registry);
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else {
                print!("{}", report::render_table(&table, &registry));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Lookup {
            destinations,
            src,
            json,
        } => {
            let reports: Vec<LookupReport> = destinations
                .iter()
                .map(|dest| LookupReport::resolve(&table, &registry, src.as_ref(), dest))
                .collect();

            if *json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!("{}", report);
                }
            }

            // Unroutable destinations are a normal outcome but scripts want to know.
            if reports.iter().all(LookupReport::is_routed) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(2))
            }
        }
    }
}
