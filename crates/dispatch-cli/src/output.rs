//! Output formatting module

use chrono::NaiveDate;
use dispatch_app::DispatchBoard;
use dispatch_types::{FilterMode, OutputFormat, Payload, Result};

/// First segment of a uuid, enough to address entities on the board
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Render "2025-02-03" as "Feb 3"; anything unparseable passes through
fn format_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

pub fn print_board(board: &DispatchBoard, filter: FilterMode, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_board_json(board, filter);
    }

    let payloads = board.payloads(filter);

    println!("\nPayloads ({})", filter);
    println!("{:-<92}", "");
    println!(
        "{:<10} {:<28} {:<24} {:<8} {:<11} {:<16}",
        "ID", "Description", "Route", "Pickup", "Status", "Trucker"
    );
    println!("{:-<92}", "");
    if payloads.is_empty() {
        println!("(no payloads match this filter)");
    }
    for payload in &payloads {
        let route = match (payload.origin.is_empty(), payload.destination.is_empty()) {
            (true, true) => String::new(),
            _ => format!("{} -> {}", payload.origin, payload.destination),
        };
        let trucker = payload
            .assigned_trucker
            .as_deref()
            .and_then(|id| board.trucker(id))
            .map(|t| t.name.clone())
            .unwrap_or_default();
        println!(
            "{:<10} {:<28} {:<24} {:<8} {:<11} {:<16}",
            short_id(&payload.id),
            truncate_str(&payload.description, 27),
            truncate_str(&route, 23),
            format_date(&payload.pickup_date),
            payload.status.label(),
            truncate_str(&trucker, 15),
        );
    }

    println!("\nTruckers");
    println!("{:-<92}", "");
    println!(
        "{:<10} {:<20} {:<12} {:<18} {:<28}",
        "ID", "Name", "Phone", "Truck", "Current load"
    );
    println!("{:-<92}", "");
    for trucker in board.truckers() {
        let load = match board.current_assignment_for(&trucker.id) {
            Some(payload) => truncate_str(&payload.description, 27),
            None => "available".to_string(),
        };
        println!(
            "{:<10} {:<20} {:<12} {:<18} {:<28}",
            short_id(&trucker.id),
            truncate_str(&trucker.name, 19),
            trucker.phone,
            truncate_str(&trucker.truck, 17),
            load,
        );
    }

    Ok(())
}

fn print_board_json(board: &DispatchBoard, filter: FilterMode) -> Result<()> {
    let payloads: Vec<&Payload> = board.payloads(filter);
    let truckers: Vec<_> = board
        .truckers()
        .iter()
        .map(|t| {
            serde_json::json!({
                "id": t.id,
                "name": t.name,
                "phone": t.phone,
                "truck": t.truck,
                "assigned": board.is_trucker_assigned(&t.id),
            })
        })
        .collect();

    let view = serde_json::json!({
        "filter": filter.to_string(),
        "payloads": payloads,
        "truckers": truckers,
    });
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
