use std::io::{self, BufRead, Write};

use colored::Colorize;
use spiderpanel_core::{PanelError, SpiderClient, SHUTDOWN_DOCS, SHUTDOWN_PROMPT};

pub async fn cmd_query(client: &SpiderClient) -> anyhow::Result<()> {
    client.query().await?;
    println!("{} Query pass requested.", "✓".green().bold());
    Ok(())
}

pub async fn cmd_check_peers(client: &SpiderClient) -> anyhow::Result<()> {
    client.check_peers().await?;
    println!("{} Peer check requested.", "✓".green().bold());
    Ok(())
}

pub async fn cmd_pause(client: &SpiderClient) -> anyhow::Result<()> {
    client.pause().await?;
    println!("{} {}", "✓".green().bold(), "Spider paused.".yellow());
    Ok(())
}

pub async fn cmd_resume(client: &SpiderClient) -> anyhow::Result<()> {
    client.resume().await?;
    println!("{} {}", "✓".green().bold(), "Spider resumed.".green());
    Ok(())
}

/// Shutdown is guarded by a blocking confirmation; declining sends no
/// request at all.
pub async fn cmd_shutdown(client: &SpiderClient, yes: bool) -> anyhow::Result<()> {
    if !yes && !confirm(SHUTDOWN_PROMPT)? {
        return Err(PanelError::ShutdownAborted.into());
    }

    client.shutdown().await?;

    println!("{} Shutdown request accepted.", "✓".green().bold());
    println!(
        "  {} See {} for how to restart the spider.",
        "→".blue(),
        SHUTDOWN_DOCS
    );
    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", prompt.yellow().bold());
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
