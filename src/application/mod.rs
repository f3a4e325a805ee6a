/// Application layer - view-state controller, use cases and DTOs
///
/// Owns the mutable view state and coordinates the pure domain services with
/// infrastructure reached through ports.
pub mod controller;
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
