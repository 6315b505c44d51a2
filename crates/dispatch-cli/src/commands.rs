//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output;
use dispatch_app::{Config, DispatchBoard};
use dispatch_types::{PayloadDraft, Result, TruckerDraft};

pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    // config command runs without opening the board
    if let Commands::Config {
        show,
        set_data_dir,
        set_format,
        set_filter,
    } = &cli.command
    {
        return handle_config(&mut config, *show, set_data_dir, set_format, set_filter);
    }

    let format = cli.format.unwrap_or(config.output_format);
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => config.data_dir()?,
    };
    let mut board = DispatchBoard::open(data_dir)?;

    match cli.command {
        Commands::Show { filter } => {
            let filter = filter.unwrap_or(config.default_filter);
            output::print_board(&board, filter, format)?;
        }

        Commands::AddTrucker { name, phone, truck } => {
            let draft = TruckerDraft::new(name).with_phone(phone).with_truck(truck);
            let id = board.add_trucker(draft)?;
            let trucker = board.trucker(&id).unwrap();
            println!("Added trucker {} ({})", trucker.name, output::short_id(&id));
        }

        Commands::AddPayload {
            description,
            origin,
            destination,
            pickup_date,
            pickup_time,
            delivery_date,
        } => {
            let draft = PayloadDraft::new(description)
                .with_route(origin, destination)
                .with_pickup(pickup_date, pickup_time)
                .with_delivery_date(delivery_date);
            let id = board.add_payload(draft)?;
            let payload = board.payload(&id).unwrap();
            println!(
                "Added payload {} ({})",
                payload.description,
                output::short_id(&id)
            );
        }

        Commands::EditTrucker {
            id,
            name,
            phone,
            truck,
        } => {
            let Some((trucker_id, current)) = resolve_trucker(&board, &id) else {
                return Ok(());
            };
            let draft = TruckerDraft {
                name: name.unwrap_or(current.name),
                phone: phone.unwrap_or(current.phone),
                truck: truck.unwrap_or(current.truck),
            };
            board.update_trucker(&trucker_id, draft);
            println!("Updated trucker {}", output::short_id(&trucker_id));
        }

        Commands::EditPayload {
            id,
            description,
            origin,
            destination,
            pickup_date,
            pickup_time,
            delivery_date,
        } => {
            let Some((payload_id, current)) = resolve_payload(&board, &id) else {
                return Ok(());
            };
            let draft = PayloadDraft {
                description: description.unwrap_or(current.description),
                origin: origin.unwrap_or(current.origin),
                destination: destination.unwrap_or(current.destination),
                pickup_date: pickup_date.unwrap_or(current.pickup_date),
                pickup_time: pickup_time.unwrap_or(current.pickup_time),
                delivery_date: delivery_date.unwrap_or(current.delivery_date),
            };
            board.update_payload(&payload_id, draft);
            println!("Updated payload {}", output::short_id(&payload_id));
        }

        Commands::RemoveTrucker { id } => {
            let Some((trucker_id, trucker)) = resolve_trucker(&board, &id) else {
                return Ok(());
            };
            board.delete_trucker(&trucker_id)?;
            println!("Removed trucker {}", trucker.name);
        }

        Commands::RemovePayload { id } => {
            let Some((payload_id, payload)) = resolve_payload(&board, &id) else {
                return Ok(());
            };
            board.delete_payload(&payload_id);
            println!("Removed payload {}", payload.description);
        }

        Commands::Assign {
            payload_id,
            trucker_id,
        } => {
            let Some((payload_id, payload)) = resolve_payload(&board, &payload_id) else {
                return Ok(());
            };
            let Some((trucker_id, trucker)) = resolve_trucker(&board, &trucker_id) else {
                return Ok(());
            };
            if board.assign(&payload_id, &trucker_id) {
                println!("Assigned {} to {}", trucker.name, payload.description);
            } else {
                println!(
                    "Not assigned: payload already taken or completed, or trucker busy"
                );
            }
        }

        Commands::Unassign { payload_id } => {
            let Some((payload_id, payload)) = resolve_payload(&board, &payload_id) else {
                return Ok(());
            };
            if board.unassign(&payload_id) {
                println!("Unassigned {}", payload.description);
            } else {
                println!("No change: payload is completed or already unassigned");
            }
        }

        Commands::Transit { payload_id } => {
            let Some((payload_id, payload)) = resolve_payload(&board, &payload_id) else {
                return Ok(());
            };
            if board.advance_to_in_transit(&payload_id) {
                println!("{} is now in transit", payload.description);
            } else {
                println!("No change: payload is not in the assigned state");
            }
        }

        Commands::Complete { payload_id } => {
            let Some((payload_id, payload)) = resolve_payload(&board, &payload_id) else {
                return Ok(());
            };
            if board.complete(&payload_id) {
                println!("{} completed", payload.description);
            } else {
                println!("No change: payload is already completed");
            }
        }

        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn handle_config(
    config: &mut Config,
    show: bool,
    set_data_dir: &Option<std::path::PathBuf>,
    set_format: &Option<dispatch_types::OutputFormat>,
    set_filter: &Option<dispatch_types::FilterMode>,
) -> Result<()> {
    let mut changed = false;

    if let Some(dir) = set_data_dir {
        config.data_dir = Some(dir.clone());
        changed = true;
    }
    if let Some(format) = set_format {
        config.output_format = *format;
        changed = true;
    }
    if let Some(filter) = set_filter {
        config.default_filter = *filter;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }
    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

/// Resolve an exact id or unique id prefix to a trucker
fn resolve_trucker(board: &DispatchBoard, id: &str) -> Option<(String, dispatch_types::Trucker)> {
    let matches: Vec<_> = board
        .truckers()
        .iter()
        .filter(|t| t.id == id || t.id.starts_with(id))
        .collect();
    match matches.as_slice() {
        [trucker] => Some((trucker.id.clone(), (*trucker).clone())),
        [] => {
            println!("No trucker matching '{}'", id);
            None
        }
        _ => {
            println!("Ambiguous trucker id '{}'", id);
            None
        }
    }
}

/// Resolve an exact id or unique id prefix to a payload
fn resolve_payload(board: &DispatchBoard, id: &str) -> Option<(String, dispatch_types::Payload)> {
    let matches: Vec<_> = board
        .payloads(dispatch_types::FilterMode::All)
        .into_iter()
        .filter(|p| p.id == id || p.id.starts_with(id))
        .collect();
    match matches.as_slice() {
        [payload] => Some((payload.id.clone(), (*payload).clone())),
        [] => {
            println!("No payload matching '{}'", id);
            None
        }
        _ => {
            println!("Ambiguous payload id '{}'", id);
            None
        }
    }
}
