use colored::Colorize;
use spiderpanel_core::{PausedState, SpiderClient, StatusView};

pub async fn cmd_status(client: &SpiderClient, format: &str) -> anyhow::Result<()> {
    let report = client.get_server_status().await?;

    if format == "json" {
        let output = serde_json::json!({
            "running_time": report.running_time,
            "cost": report.cost,
            "current_timestamp": report.current_timestamp,
            "paused": report.paused,
            "pending_requests_by_host": report.pending_requests_by_host,
            "active_requests_by_host": report.active_requests_by_host,
            "active_requests": report.active_requests,
            "pending_requests": report.pending_requests,
            "load_avg": report.load_avg,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut view = StatusView::default();
    view.update(&report);

    let mut paused = PausedState::default();
    if let Some(flag) = report.paused {
        paused.apply_report(flag);
    }

    println!("{}", "Spider Server Status".cyan().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    if paused.is_paused() {
        println!("  {} {}", "State:".bold(), "PAUSED".yellow().bold());
    } else {
        println!("  {} {}", "State:".bold(), "Running".green());
    }
    println!();

    if let Some(ref running_time) = view.running_time {
        println!("  {}", running_time);
        println!();
    }

    if let Some(ref timestamp) = view.current_timestamp {
        println!("  {} {}", "Server time:".bold(), timestamp);
    }
    if let Some(ref load_avg) = view.load_avg {
        println!("  {} {}", "Load average:".bold(), load_avg);
    }

    println!();
    println!("  {}", "Request Queues".yellow().bold());
    println!(
        "    Active requests:   {}",
        view.active_requests.as_deref().unwrap_or("-")
    );
    println!(
        "    Pending requests:  {}",
        view.pending_requests.as_deref().unwrap_or("-")
    );

    if let Some(ref hosts) = view.active_requests_by_host {
        if !hosts.is_empty() {
            println!("    Active by host:    {}", hosts);
        }
    }
    if let Some(ref hosts) = view.pending_requests_by_host {
        if !hosts.is_empty() {
            println!("    Pending by host:   {}", hosts);
        }
    }

    Ok(())
}
