#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! doccli — compile document templates with a remote document service.

mod cli;
mod commands;
mod request;
mod service;
mod types;

use std::io::{IsTerminal, Write};

use clap::{CommandFactory, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let ctx = OutputCtx::new(cli.print, cli.json, cli.no_header, cli.debug);

    match commands::dispatch(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            error!(code = err.code(), "{err}");
            if err.wants_usage() {
                let mut stderr = std::io::stderr();
                let _ = Cli::command().write_help(&mut stderr);
                let _ = writeln!(stderr);
            }
            write_error(&ErrorOutput::from_client_error(&err), &ctx);
            std::process::exit(err.exit_code());
        }
    }
}

/// Log to stderr so stdout only carries results. `RUST_LOG` overrides the level.
fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
