pub mod config;
pub mod error;
pub mod types;

pub use config::{CohortConfig, SimulationConfig};
pub use error::{CalliopeError, Result};
pub use types::{ClusterLabel, PersonId, Polar, Rgb};
