//! Echo CLI
//!
//! Hosts the built front end and prints the default configuration.
//!
//! ```text
//! echo serve [--config FILE] [--host HOST] [--port PORT] [--dist DIR]
//! echo config [--output FILE]
//! ```
//!
//! `RUST_LOG` overrides the configured log level.

use clap::{Parser, Subcommand};
use echo::config::{generate_default_config, Config, LogFormat, LoggingConfig};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "echo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Echo: Where Minds Bloom")]
#[command(long_about = "Echo is a mental-wellness community app.\nThis binary serves the compiled web front end.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the front-end bundle
    Serve {
        /// Config file (default: search the standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Bundle directory (trunk's dist/)
        #[arg(short, long)]
        dist: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("echo={},tower_http=debug", logging.level).into());
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            dist,
        } => {
            let mut config = match config {
                Some(path) => Config::load_with_env(&path)?,
                None => Config::load_default(),
            };
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.server.dist_dir = dist;
            }

            init_logging(&config.logging);
            tracing::info!("Starting Echo v{}", env!("CARGO_PKG_VERSION"));

            echo::server::serve(&config.server).await?;
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}
