pub mod engine;
/// Continuous and non-continuous slot search.
pub mod selector;
/// Duration-weighted averaging and trailing-slot trimming.
pub mod shaper;
pub mod source;
pub mod types;
