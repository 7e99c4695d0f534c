//! Core library for rgsweep: decide which Azure resource groups to delete
//! from their tags, and delete (or simulate deleting) them.

pub mod azure;
pub mod config;
pub mod criteria;
pub mod errors;
pub mod events;
pub mod groups;
pub mod logging;
pub mod sweep;

pub use azure::{AzCliBackend, AzureError, ResourceGroupBackend};
pub use config::{ConfigError, RgSweepConfig, load_config};
pub use criteria::{Criteria, CriteriaError};
pub use errors::RgSweepError;
pub use groups::ResourceGroup;
pub use logging::init_logging;
pub use sweep::{
    Decision, DeleteReason, SweepError, SweepEvent, SweepOptions, SweepRequest, SweepSummary,
    evaluate, run_sweep, sweep_groups,
};
