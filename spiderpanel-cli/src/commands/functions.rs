use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};
use spiderpanel_core::{FunctionView, SpiderClient};

pub async fn cmd_functions(client: &SpiderClient, format: &str) -> anyhow::Result<()> {
    let functions = client.get_exposed_function_details().await?;

    if format == "json" {
        let output: Vec<serde_json::Value> = functions
            .iter()
            .map(|f| {
                serde_json::json!({
                    "name": f.name,
                    "interval": f.descriptor.interval,
                    "required_arguments": f.descriptor.required_arguments,
                    "optional_arguments": f.descriptor.optional_arguments,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if functions.is_empty() {
        println!("{}", "No exposed functions.".yellow());
        return Ok(());
    }

    println!("{}", "Exposed Functions".cyan().bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new("Function").fg(Color::White),
            Cell::new("Interval").fg(Color::White),
            Cell::new("Required arguments").fg(Color::White),
            Cell::new("Optional arguments").fg(Color::White),
        ]);

    for function in &functions {
        let view = FunctionView::from_function(function);
        table.add_row(vec![
            Cell::new(&view.name).fg(Color::Cyan),
            Cell::new(&view.interval),
            Cell::new(view.required_arguments.lines().join("\n")),
            Cell::new(view.optional_arguments.lines().join("\n")),
        ]);
    }

    println!("{}", table);
    println!();
    println!(
        "{}",
        format!("{} function(s) exposed.", functions.len()).dimmed()
    );

    Ok(())
}
