//! Core domain types
//!
//! This module contains the core domain structures used across barback services.
//! These types represent the fundamental business entities and are shared between
//! the intake API (validation), the recipe store (persistence) and the pipeline
//! runner (execution).

pub mod payload;
pub mod record;
pub mod request;
