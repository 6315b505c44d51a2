//! Domain services

pub mod assignment_rules;

pub use assignment_rules::{
    current_assignment_for, eligible_drop_target, eligible_for_drag, filter_payloads,
    is_trucker_assigned,
};
