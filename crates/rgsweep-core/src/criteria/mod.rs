mod errors;
mod types;

pub use errors::CriteriaError;
pub use types::Criteria;
