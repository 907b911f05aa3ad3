mod commands;
mod render;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use commands::{CreateArgs, DeleteArgs, EditArgs, ShowArgs};
use quill_client::HttpPostsApi;

/// Quill - browse and write blog posts from the terminal
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the Quill API
    #[arg(
        long,
        global = true,
        env = "QUILL_API_URL",
        default_value = "http://localhost:9090"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all posts
    List,

    /// Show one post in full
    Show(ShowArgs),

    /// Write a new post
    Create(CreateArgs),

    /// Change an existing post
    Edit(EditArgs),

    /// Delete a post
    Delete(DeleteArgs),

    /// Check that the server is up
    Health,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let api = HttpPostsApi::new(&cli.api_url)?;
    tracing::debug!(api_url = %api.base_url(), "Using API");

    match cli.command {
        Command::List => commands::list(&api).await,
        Command::Show(args) => commands::show(&api, args).await,
        Command::Create(args) => commands::create(&api, args).await,
        Command::Edit(args) => commands::edit(&api, args).await,
        Command::Delete(args) => commands::delete(&api, args).await,
        Command::Health => commands::health(&api).await,
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so they never mix with rendered posts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
