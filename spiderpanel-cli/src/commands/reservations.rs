use clap::Subcommand;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use spiderpanel_core::SpiderClient;

#[derive(Subcommand, Debug)]
pub enum ReservationsCommand {
    #[command(about = "Show a stored reservation")]
    Show {
        #[arg(help = "Reservation UUID")]
        uuid: String,
    },

    #[command(about = "Delete a single reservation")]
    Delete {
        #[arg(help = "Reservation UUID")]
        uuid: String,
    },

    #[command(about = "Delete every reservation of an exposed function")]
    DeleteFunction {
        #[arg(help = "Exposed function name")]
        function_name: String,
    },

    #[command(about = "Run a reservation immediately")]
    Execute {
        #[arg(help = "Reservation UUID")]
        uuid: String,
    },
}

pub async fn handle_reservations_command(
    client: &SpiderClient,
    cmd: ReservationsCommand,
) -> anyhow::Result<()> {
    match cmd {
        ReservationsCommand::Show { uuid } => cmd_show(client, &uuid).await,
        ReservationsCommand::Delete { uuid } => cmd_delete(client, &uuid).await,
        ReservationsCommand::DeleteFunction { function_name } => {
            cmd_delete_function(client, &function_name).await
        }
        ReservationsCommand::Execute { uuid } => cmd_execute(client, &uuid).await,
    }
}

async fn cmd_show(client: &SpiderClient, uuid: &str) -> anyhow::Result<()> {
    let record = client.show_reservation(uuid).await?;

    if record.is_empty() {
        println!("{}", "Reservation has no stored attributes.".yellow());
        return Ok(());
    }

    println!("{}", format!("Reservation {}", uuid).cyan().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Attribute").fg(Color::White),
            Cell::new("Value").fg(Color::White),
        ]);

    for (key, value) in &record {
        let rendered = match value.as_str() {
            Some(s) => s.to_string(),
            None => value.to_string(),
        };
        table.add_row(vec![Cell::new(key).fg(Color::Cyan), Cell::new(rendered)]);
    }

    println!("{}", table);
    Ok(())
}

async fn cmd_delete(client: &SpiderClient, uuid: &str) -> anyhow::Result<()> {
    client.delete_reservation(uuid).await?;
    println!("{} Reservation {} deleted.", "✓".green().bold(), uuid);
    Ok(())
}

async fn cmd_delete_function(client: &SpiderClient, function_name: &str) -> anyhow::Result<()> {
    client.delete_function_reservations(function_name).await?;
    println!(
        "{} Reservations for '{}' deleted.",
        "✓".green().bold(),
        function_name
    );
    Ok(())
}

async fn cmd_execute(client: &SpiderClient, uuid: &str) -> anyhow::Result<()> {
    let result = client.execute_reservation(uuid).await?;
    println!("{} Reservation {} executed.", "✓".green().bold(), uuid);
    println!();
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
