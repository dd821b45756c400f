//! coursevault - validated course-catalog records with JSON and YAML persistence
//!
//! The model layer holds the five immutable record kinds; the persistence
//! layer saves and loads ordered collections of them in either format.

pub mod cli;
pub mod config;
pub mod model;
pub mod observability;
pub mod persistence;
