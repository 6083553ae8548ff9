//! Core domain logic for itemproc
//!
//! This module contains pure processing logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Item, `ProcessedItem`, configuration records)
//! - `services/` - Normalization and batch orchestration
//! - `ports/` - Trait definitions for persistence and diagnostics

pub mod models;
pub mod ports;
pub mod services;
