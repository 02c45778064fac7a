//! Shared wire types for the admin dashboard: entity aggregates, their DTOs
//! and the small amount of session information exchanged with the backend.

pub mod domain;
pub mod system;
