//! Calliope - synthetic population generator
//!
//! Draws people from parametrized distributions, connects them into a
//! capacity-limited friend network, and clusters their political views
//! into factions.

pub mod core;
pub mod distribution;
pub mod entity;
pub mod faction;
pub mod generation;
pub mod simulation;
pub mod social;

pub use crate::core::config::{CohortConfig, SimulationConfig};
pub use crate::core::error::{CalliopeError, Result};
pub use crate::simulation::{simulate, SimulationOutput};
