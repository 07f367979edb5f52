//! Carbon-aware slot recommendation service for the GB grid.

pub mod api;
pub mod config;
pub mod error;
/// Slot selection engine, response shaping, and the forecast source contract.
pub mod slots;
pub mod upstream;
