//! Repository Module
//!
//! Data access layer for the orchestrator. The recipe store is trait-based so
//! the pipeline can be exercised against an in-memory implementation in tests.

pub mod recipe;

pub use recipe::{PgRecipeStore, RecipeStore};
