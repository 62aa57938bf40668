//! Command-line interface.

use clap::{Parser, Subcommand};

use crate::build;
use crate::config::{ConfigLoader, Environment};
use crate::db::run_pending_migrations;
use crate::logger::init_logger;
use crate::server::Server;

/// Coach availability and booking-cart API server
#[derive(Parser, Debug)]
#[command(name = "courtside")]
#[command(about = "Coach availability and booking-cart API server")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Host address to bind to, overriding configuration
        #[arg(long, value_name = "ADDRESS")]
        host: Option<String>,

        /// Port number to listen on, overriding configuration
        #[arg(short, long, value_name = "PORT")]
        port: Option<u16>,
    },
    /// Apply pending database migrations and exit
    Migrate,
}

impl Cli {
    /// Loads configuration, initializes logging, and dispatches the
    /// selected subcommand. No subcommand means `serve`.
    pub async fn run(self) -> anyhow::Result<()> {
        let environment = Environment::from_env();
        let mut settings = ConfigLoader::new(environment).load()?;
        init_logger(&settings.logger)?;

        match self.command.unwrap_or(Commands::Serve {
            host: None,
            port: None,
        }) {
            Commands::Serve { host, port } => {
                if let Some(host) = host {
                    settings.server.host = host;
                }
                if let Some(port) = port {
                    settings.server.port = port;
                }
                Server::new(settings).run().await
            }
            Commands::Migrate => {
                let applied = run_pending_migrations(&settings.database.url).await?;
                tracing::info!(applied = applied, "Migrations applied");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_with_port_override() {
        let cli = Cli::parse_from(["courtside", "serve", "--port", "8080"]);
        match cli.command {
            Some(Commands::Serve { port, .. }) => assert_eq!(port, Some(8080)),
            other => panic!("expected serve, got {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::parse_from(["courtside"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_migrate_subcommand() {
        let cli = Cli::parse_from(["courtside", "migrate"]);
        assert!(matches!(cli.command, Some(Commands::Migrate)));
    }
}
