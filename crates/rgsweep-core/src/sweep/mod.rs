mod errors;
mod handler;
mod types;

pub use errors::SweepError;
pub use handler::{evaluate, run_sweep, sweep_groups};
pub use types::{Decision, DeleteReason, SweepEvent, SweepOptions, SweepRequest, SweepSummary};
