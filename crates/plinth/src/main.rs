use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use plinth_core::config::ConfigFile;
use plinth_core::kernel::constants;
use plinth_core::{Engine, Environment, Result};

/// Plinth: component-resolution and boot engine for multi-app processes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configure from a config file, boot, and list resolved components
    Boot {
        /// Path of the config file (default: plinth.toml in the project root)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the composed dispatch table
    Routes {
        /// Path of the config file (default: plinth.toml in the project root)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the detected environment
    Env,
}

fn main() {
    env_logger::init();
    let args = CliArgs::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Commands::Boot { config } => {
            let engine = engine_from_file(config)?;
            engine.boot()?;
            info!("boot complete");
            for name in engine.registry().resolved_names() {
                println!("{name}");
            }
        }
        Commands::Routes { config, json } => {
            let engine = engine_from_file(config)?;
            let dispatcher = engine.app()?;
            if json {
                let rendered = serde_json::to_string_pretty(dispatcher.mounts())
                    .map_err(|err| plinth_core::Error::Other(err.to_string()))?;
                println!("{rendered}");
            } else {
                for mount in dispatcher.mounts() {
                    println!("{} -> {}", mount.path(), mount.app().name());
                }
            }
        }
        Commands::Env => {
            let environment = Environment::detect();
            println!("environment: {}", environment.name());
            println!("root: {}", environment.root().display());
        }
    }
    Ok(())
}

/// Build an engine configured from a config file. Without `--config` the
/// default `plinth.toml` is looked up in the detected project root.
fn engine_from_file(path: Option<PathBuf>) -> Result<Engine> {
    let path = path
        .unwrap_or_else(|| Environment::detect().root().join(constants::DEFAULT_CONFIG_FILE));
    info!("loading configuration from {}", path.display());
    let file = ConfigFile::load(&path)?;
    let engine = Engine::new();
    engine.configure(|config| {
        file.apply(config);
    });
    Ok(engine)
}
