//! CLI argument definitions using clap
//!
//! Commands:
//! - coursebase serve [--host <host>] [--port <port>] [--media-dir <dir>] [--random-pick]
//! - coursebase openapi

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// coursebase - A minimal, self-hostable course catalog REST service
#[derive(Parser, Debug)]
#[command(name = "coursebase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides COURSEBASE_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides PORT, default 4000)
        #[arg(long)]
        port: Option<u16>,

        /// Directory uploads are written to (overrides COURSEBASE_MEDIA_DIR)
        #[arg(long)]
        media_dir: Option<PathBuf>,

        /// Serve a random course instead of the first on GET /api/v1/course
        #[arg(long)]
        random_pick: bool,
    },

    /// Print the bundled OpenAPI document to stdout
    Openapi,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "coursebase",
            "serve",
            "--port",
            "5000",
            "--random-pick",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                port, random_pick, ..
            } => {
                assert_eq!(port, Some(5000));
                assert!(random_pick);
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_parse_openapi() {
        let cli = Cli::try_parse_from(["coursebase", "openapi"]).unwrap();
        assert!(matches!(cli.command, Command::Openapi));
    }
}
