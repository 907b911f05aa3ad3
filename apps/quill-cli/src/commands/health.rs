use anyhow::Result;
use colored::Colorize;

use quill_client::PostsApi;

pub async fn health<A: PostsApi + ?Sized>(api: &A) -> Result<()> {
    let health = api.health().await?;

    println!(
        "{} {} ({})",
        "✓".green(),
        health.message,
        health.status.bright_white()
    );
    println!("  version:   {}", health.version);
    println!("  timestamp: {}", health.timestamp);
    Ok(())
}
