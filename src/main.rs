//! userfetch: fetch and print user records from a JSON HTTP API.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use cli::args::{ClientMode, Cli, Command};
use userfetch::client::{ApiClient, AsyncApiClient, UserSource};
use userfetch::commands;
use userfetch::config::{ApiConfig, Config};
use userfetch::env::Env;

#[tokio::main]
async fn main() {
    cli::init_tracing();

    if let Err(err) = run().await {
        eprintln!("{} {err:#}", "Error:".red().bold());
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let mut config =
        Config::load(Some(&cwd), &Env::real()).context("failed to load configuration")?;

    match cli.command {
        Command::GetUser(args) => {
            config.apply_cli(args.base_url, cli.timeout);
            let source = build_source(cli.client, &config.api);
            commands::get_user(
                source.as_ref(),
                args.user_id,
                &mut io::stdout(),
                &mut io::stderr(),
            )
            .await
            .context("get-user failed")
        }
        Command::ListUsers(args) => {
            config.apply_cli(args.base_url, cli.timeout);
            let source = build_source(cli.client, &config.api);
            commands::list_users(source.as_ref(), args.count, &mut io::stdout())
                .await
                .context("list-users failed")
        }
        Command::Demo(args) => {
            config.apply_cli(args.base_url, cli.timeout);
            let blocking = ApiClient::from_config(&config.api);
            let suspending = AsyncApiClient::from_config(&config.api);
            commands::demo(&blocking, &suspending, &mut io::stdout())
                .await
                .context("demo failed")
        }
    }
}

/// Pick the client implementation for the requested mode.
fn build_source(mode: ClientMode, api: &ApiConfig) -> Box<dyn UserSource> {
    match mode {
        ClientMode::Blocking => Box::new(ApiClient::from_config(api)),
        ClientMode::Async => Box::new(AsyncApiClient::from_config(api)),
    }
}
