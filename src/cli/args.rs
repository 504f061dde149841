//! Clap argument types.

use clap::{Parser, ValueEnum};

use userfetch::constants::DEFAULT_LIST_COUNT;

/// Fetch user records from a JSON HTTP API.
#[derive(Parser, Debug)]
#[command(name = userfetch::constants::APP_NAME, version = userfetch::constants::VERSION)]
pub struct Cli {
    /// HTTP client that performs the requests.
    #[arg(long, global = true, value_enum, default_value_t = ClientMode::Blocking)]
    pub client: ClientMode,

    /// Per-request timeout in seconds (default: wait indefinitely).
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Get user information by ID.
    GetUser(GetUserArgs),

    /// List users 1 through --count.
    ListUsers(ListUsersArgs),

    /// Fetch user 1 with the blocking client and user 2 with the async client.
    Demo(DemoArgs),
}

/// Which client backs `get-user` and `list-users`.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ClientMode {
    /// Blocking requests, run off the async runtime.
    Blocking,
    /// Non-blocking requests on the async runtime.
    Async,
}

/// Arguments for the `get-user` subcommand.
#[derive(Parser, Debug)]
pub struct GetUserArgs {
    /// ID of the user to fetch.
    #[arg(allow_negative_numbers = true)]
    pub user_id: i64,

    /// Base URL for the API [default: https://jsonplaceholder.typicode.com].
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Arguments for the `list-users` subcommand.
#[derive(Parser, Debug)]
pub struct ListUsersArgs {
    /// Number of users to list.
    #[arg(long, default_value_t = DEFAULT_LIST_COUNT, allow_negative_numbers = true)]
    pub count: i64,

    /// Base URL for the API [default: https://jsonplaceholder.typicode.com].
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Arguments for the `demo` subcommand.
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Base URL for the API [default: https://jsonplaceholder.typicode.com].
    #[arg(long)]
    pub base_url: Option<String>,
}
