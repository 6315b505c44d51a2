//! Entity types for truckers and payloads

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a payload
///
/// Advances unassigned → assigned → in-transit → completed; an explicit
/// unassign retreats to unassigned. Completed is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadStatus {
    Unassigned,
    Assigned,
    InTransit,
    Completed,
}

impl PayloadStatus {
    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            PayloadStatus::Unassigned => "unassigned",
            PayloadStatus::Assigned => "assigned",
            PayloadStatus::InTransit => "in-transit",
            PayloadStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for PayloadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Filter over the payload list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Everything except completed payloads
    #[default]
    Active,
    All,
    Unassigned,
    /// Assigned or in-transit payloads
    Assigned,
    Completed,
}

impl FilterMode {
    /// Whether a payload with the given status passes this filter
    pub fn matches(&self, status: PayloadStatus) -> bool {
        match self {
            FilterMode::Active => status != PayloadStatus::Completed,
            FilterMode::All => true,
            FilterMode::Unassigned => status == PayloadStatus::Unassigned,
            FilterMode::Assigned => {
                matches!(status, PayloadStatus::Assigned | PayloadStatus::InTransit)
            }
            FilterMode::Completed => status == PayloadStatus::Completed,
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::Active => write!(f, "active"),
            FilterMode::All => write!(f, "all"),
            FilterMode::Unassigned => write!(f, "unassigned"),
            FilterMode::Assigned => write!(f, "assigned"),
            FilterMode::Completed => write!(f, "completed"),
        }
    }
}

/// A driver/vehicle resource available for assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trucker {
    /// Unique identifier
    pub id: String,
    /// Driver name
    pub name: String,
    /// Contact phone number
    #[serde(default)]
    pub phone: String,
    /// Truck description (e.g., "Freightliner #12")
    #[serde(default)]
    pub truck: String,
}

impl Trucker {
    /// Create a trucker from a draft with a freshly generated id
    pub fn from_draft(draft: TruckerDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            phone: draft.phone,
            truck: draft.truck,
        }
    }
}

/// A freight load tracked through its status lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    /// Unique identifier
    pub id: String,
    /// Load description (e.g., "Steel Beams - 20 tons")
    pub description: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    /// Pickup date (YYYY-MM-DD, may be empty)
    #[serde(default)]
    pub pickup_date: String,
    /// Pickup time (HH:MM, may be empty)
    #[serde(default)]
    pub pickup_time: String,
    /// Delivery date (YYYY-MM-DD, may be empty)
    #[serde(default)]
    pub delivery_date: String,
    /// Id of the assigned trucker, if any
    pub assigned_trucker: Option<String>,
    pub status: PayloadStatus,
}

impl Payload {
    /// Create an unassigned payload from a draft with a freshly generated id
    pub fn from_draft(draft: PayloadDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            description: draft.description,
            origin: draft.origin,
            destination: draft.destination,
            pickup_date: draft.pickup_date,
            pickup_time: draft.pickup_time,
            delivery_date: draft.delivery_date,
            assigned_trucker: None,
            status: PayloadStatus::Unassigned,
        }
    }

    /// Whether this payload still counts against its trucker
    pub fn is_active(&self) -> bool {
        self.status != PayloadStatus::Completed
    }
}

/// Draft fields for creating or editing a trucker
///
/// The view layer owns the draft lifecycle; the store validates and
/// commits.
#[derive(Debug, Clone, Default)]
pub struct TruckerDraft {
    pub name: String,
    pub phone: String,
    pub truck: String,
}

impl TruckerDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_truck(mut self, truck: impl Into<String>) -> Self {
        self.truck = truck.into();
        self
    }
}

/// Draft fields for creating or editing a payload
#[derive(Debug, Clone, Default)]
pub struct PayloadDraft {
    pub description: String,
    pub origin: String,
    pub destination: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub delivery_date: String,
}

impl PayloadDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn with_route(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin = origin.into();
        self.destination = destination.into();
        self
    }

    pub fn with_pickup(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.pickup_date = date.into();
        self.pickup_time = time.into();
        self
    }

    pub fn with_delivery_date(mut self, date: impl Into<String>) -> Self {
        self.delivery_date = date.into();
        self
    }
}

/// Both persisted collections, paired for load/save
#[derive(Debug, Clone, Default)]
pub struct BoardSnapshot {
    pub truckers: Vec<Trucker>,
    pub payloads: Vec<Payload>,
}
