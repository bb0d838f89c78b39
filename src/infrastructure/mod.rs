//! Infrastructure layer providing external service integrations.
//!
//! This module contains the storage backends behind the reservation store,
//! configuration loading and log setup.

pub mod settings;
pub mod logging;
pub mod persistence;

pub use settings::*;
pub use logging::*;
pub use persistence::*;
