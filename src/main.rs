use clap::{Parser, Subcommand};

use gofr_scaffold::commands::{add, doctor, entity, routes};
use gofr_scaffold::config::ProjectConfig;
use gofr_scaffold::error::ScaffoldError;
use gofr_scaffold::fsys::OsFsys;
use gofr_scaffold::report::Reporter;

#[derive(Parser)]
#[command(
    name = "gofr-scaffold",
    version,
    about = "Scaffold routes and entities in a GoFr-style Go project"
)]
struct Cli {
    /// Suppress progress output (errors are still printed)
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register one or more HTTP methods against a path
    Add {
        /// URL path to register (e.g. order/{id})
        #[arg(long)]
        path: String,
        /// Comma-separated HTTP methods, or "all"
        #[arg(long, default_value = "all")]
        methods: String,
    },
    /// Scaffold a named entity at a layer
    Entity {
        /// Entity name (e.g. brand)
        #[arg(long)]
        name: String,
        /// Entity layer: core, composite or consumer (prompted when omitted)
        #[arg(long = "type")]
        layer: Option<String>,
    },
    /// List routes registered in the main file
    Routes,
    /// Check project health
    Doctor,
}

fn main() {
    let cli = Cli::parse();
    let fsys = OsFsys;
    let reporter = if cli.quiet {
        Reporter::quiet()
    } else {
        Reporter::new()
    };

    let result = (|| -> Result<(), ScaffoldError> {
        let cfg = ProjectConfig::load(&fsys)?;
        match &cli.command {
            Commands::Add { path, methods } => add::run(&fsys, &reporter, &cfg, methods, path),
            Commands::Entity { name, layer } => {
                entity::run(&fsys, &reporter, &cfg, layer.as_deref(), name)
            }
            Commands::Routes => routes::run(&fsys, &cfg),
            Commands::Doctor => doctor::run(&fsys, &cfg),
        }
    })();

    if let Err(e) = result {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e}").as_str()));
        std::process::exit(1);
    }
}
