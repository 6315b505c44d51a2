//! CLI definition using clap

use clap::{Parser, Subcommand};
use dispatch_types::{FilterMode, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dispatch-board")]
#[command(version)]
#[command(about = "Assign truckers to payloads and track each load's lifecycle")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Data directory override
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the board: payloads plus the trucker roster
    Show {
        /// Payload filter. Uses config value if not specified.
        #[arg(long, value_enum)]
        filter: Option<FilterMode>,
    },

    /// Add a trucker
    AddTrucker {
        /// Driver name
        name: String,

        /// Contact phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Truck description (e.g., "Freightliner #12")
        #[arg(long, default_value = "")]
        truck: String,
    },

    /// Add a payload
    AddPayload {
        /// Load description
        description: String,

        /// Pickup location
        #[arg(long, default_value = "")]
        origin: String,

        /// Delivery location
        #[arg(long, default_value = "")]
        destination: String,

        /// Pickup date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        pickup_date: String,

        /// Pickup time (HH:MM)
        #[arg(long, default_value = "")]
        pickup_time: String,

        /// Delivery date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        delivery_date: String,
    },

    /// Edit a trucker; omitted flags keep current values
    EditTrucker {
        /// Trucker id (or unique id prefix)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        truck: Option<String>,
    },

    /// Edit a payload; omitted flags keep current values
    EditPayload {
        /// Payload id (or unique id prefix)
        id: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        origin: Option<String>,

        #[arg(long)]
        destination: Option<String>,

        /// Pickup date (YYYY-MM-DD)
        #[arg(long)]
        pickup_date: Option<String>,

        /// Pickup time (HH:MM)
        #[arg(long)]
        pickup_time: Option<String>,

        /// Delivery date (YYYY-MM-DD)
        #[arg(long)]
        delivery_date: Option<String>,
    },

    /// Remove a trucker (must not have an active assignment)
    RemoveTrucker {
        /// Trucker id (or unique id prefix)
        id: String,
    },

    /// Remove a payload
    RemovePayload {
        /// Payload id (or unique id prefix)
        id: String,
    },

    /// Assign a trucker to a payload
    Assign {
        /// Payload id (or unique id prefix)
        payload_id: String,

        /// Trucker id (or unique id prefix)
        trucker_id: String,
    },

    /// Clear a payload's assignment
    Unassign {
        /// Payload id (or unique id prefix)
        payload_id: String,
    },

    /// Mark an assigned payload as in transit
    Transit {
        /// Payload id (or unique id prefix)
        payload_id: String,
    },

    /// Mark a payload as completed
    Complete {
        /// Payload id (or unique id prefix)
        payload_id: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the default data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set the default output format
        #[arg(long, value_enum)]
        set_format: Option<OutputFormat>,

        /// Set the default payload filter
        #[arg(long, value_enum)]
        set_filter: Option<FilterMode>,
    },
}
