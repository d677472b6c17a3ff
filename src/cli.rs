//! Command-line surface
//!
//! Three commands get native handling (`ps`, `images`, `logs`), a bare
//! invocation opens the dashboard, and everything else is forwarded to
//! the real `docker` binary untouched.

use clap::{Parser, Subcommand};

/// dockhand - a friendlier Docker CLI
#[derive(Parser, Debug)]
#[command(name = "dockhand")]
#[command(version)]
#[command(about = "Pretty listings, an interactive dashboard, and a streaming log viewer for Docker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List containers with pretty formatting
    Ps {
        /// Include stopped containers
        #[arg(short = 'a', long = "all")]
        all: bool,
    },

    /// List images with pretty formatting
    Images,

    /// View container logs in the interactive viewer
    Logs {
        /// Keep the stream open and follow new output
        #[arg(short = 'f', long = "follow")]
        follow: bool,

        /// Lines of history to request
        #[arg(long, default_value_t = 100)]
        tail: u32,

        /// Container name or id
        container: String,
    },

    /// Anything else goes to the docker binary with identical arguments
    #[command(external_subcommand)]
    Docker(Vec<String>),
}
