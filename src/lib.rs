//! Kamayan - Restaurant Reservations Library
//!
//! Restaurant information screens and table reservation management for the
//! terminal, backed by a small on-device reservation store.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
