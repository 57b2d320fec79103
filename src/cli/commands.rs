//! CLI command implementations
//!
//! `serve` resolves configuration (flags over environment over
//! defaults), builds the tokio runtime, and runs the server to
//! completion. `openapi` prints the bundled document and exits.

use std::path::PathBuf;

use crate::http_server::{HttpServer, HttpServerConfig, OPENAPI_DOCUMENT};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            host,
            port,
            media_dir,
            random_pick,
        } => serve(host, port, media_dir, random_pick),
        Command::Openapi => {
            println!("{}", OPENAPI_DOCUMENT);
            Ok(())
        }
    }
}

fn serve(
    host: Option<String>,
    port: Option<u16>,
    media_dir: Option<PathBuf>,
    random_pick: bool,
) -> CliResult<()> {
    let mut config =
        HttpServerConfig::from_env().map_err(|e| CliError::config_error(e.to_string()))?;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(media_dir) = media_dir {
        config.media_dir = media_dir;
    }
    if random_pick {
        config.random_pick = true;
    }

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_error(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(HttpServer::with_config(config).start())
        .map_err(|e| CliError::server_error(e.to_string()))
}
