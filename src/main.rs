//! Suite hierarchy - CLI

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use suite_hierarchy::util::config::load_config;
use suite_hierarchy::util::logger::{self, LogLevel};
use suite_hierarchy::{SuiteHierarchy, NAME, VERSION};

/// Inspect a suite complexity hierarchy and the minimal test sets it implies
#[derive(Parser, Debug)]
#[command(name = NAME)]
#[command(version = VERSION)]
#[command(about, long_about = None)]
struct Args {
    /// Hierarchy definition file (.json or .toml)
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every suite with its direct parents and children
    Dag,

    /// Print every suite more complex than SUITE
    Ancestors {
        #[arg(value_name = "SUITE")]
        suite: String,
    },

    /// Print every suite less complex than SUITE
    Descendants {
        #[arg(value_name = "SUITE")]
        suite: String,
    },

    /// Print the tests SUITE still has to run (every suite if omitted)
    Minimal {
        #[arg(value_name = "SUITE")]
        suite: Option<String>,
    },

    /// Print the suites whose full test list contains TEST
    FindSuites {
        #[arg(value_name = "TEST")]
        test: String,
    },

    /// Print suites so that each follows all of its ancestors
    Order,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_with_level(LogLevel::from_verbosity(args.verbose));

    let hierarchy = load_config(&args.config)
        .and_then(|config| config.build())
        .with_context(|| format!("Failed to load hierarchy: {}", args.config.display()))?;
    info!(
        suites = hierarchy.dag().len(),
        test_lists = hierarchy.tests().len(),
        "hierarchy ready"
    );

    run(&hierarchy, args.command, args.json)
}

fn run(
    hierarchy: &SuiteHierarchy,
    command: Commands,
    json: bool,
) -> Result<()> {
    match command {
        Commands::Dag => {
            if json {
                return print_json(hierarchy.dag());
            }
            for (suite, node) in hierarchy.dag().iter() {
                println!("{}: {}", suite, node);
            }
        }
        Commands::Ancestors { suite } => {
            let ancestors = hierarchy
                .ancestors(&suite)
                .with_context(|| format!("Failed to resolve ancestors of {}", suite))?;
            print_set(&ancestors, json)?;
        }
        Commands::Descendants { suite } => {
            let descendants = hierarchy
                .descendants(&suite)
                .with_context(|| format!("Failed to resolve descendants of {}", suite))?;
            print_set(&descendants, json)?;
        }
        Commands::Minimal { suite: Some(suite) } => {
            let minimal = hierarchy
                .minimal_test_set(&suite)
                .with_context(|| format!("Failed to minimize {}", suite))?;
            print_set(&minimal, json)?;
        }
        Commands::Minimal { suite: None } => {
            let all = hierarchy
                .minimal_test_sets()
                .context("Failed to minimize suites")?;
            if json {
                return print_json(&all);
            }
            for (suite, tests) in &all {
                let full = hierarchy.tests().get(suite).map_or(0, BTreeSet::len);
                println!("{} ({}/{} tests)", suite, tests.len(), full);
                for test in tests {
                    println!("  {}", test);
                }
            }
        }
        Commands::FindSuites { test } => {
            let suites = hierarchy.suites_running(&test);
            if suites.is_empty() {
                info!(test = %test, "no suite runs this test");
            }
            print_set(&suites, json)?;
        }
        Commands::Order => {
            let order = hierarchy.dag().topological_order();
            if json {
                return print_json(&order);
            }
            for suite in order {
                println!("{}", suite);
            }
        }
    }
    Ok(())
}

fn print_set<T: Serialize + std::fmt::Display>(
    items: &BTreeSet<T>,
    json: bool,
) -> Result<()> {
    if json {
        return print_json(items);
    }
    for item in items {
        println!("{}", item);
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
    println!("{}", out);
    Ok(())
}
