//! Barback Core
//!
//! Core types for the barback drink-recipe generation service.
//!
//! This crate contains:
//! - Domain types: Core business entities (DrinkRequest, PipelinePayload, RecipeRecord)
//! - DTOs: Data transfer objects for the HTTP API

pub mod domain;
pub mod dto;
