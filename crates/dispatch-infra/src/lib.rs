//! Infrastructure layer - persistence implementations, seed data

pub mod persistence;
pub mod seed;
