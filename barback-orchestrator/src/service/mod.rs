//! Service Module
//!
//! Business logic layer for the orchestrator.
//! Services validate input and coordinate repositories and the pipeline.

pub mod greeting;
pub mod intake;
pub mod recipe;

// Re-export for convenience
pub use greeting as greeting_service;
pub use intake as intake_service;
pub use recipe as recipe_service;
