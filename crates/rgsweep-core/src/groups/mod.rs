mod types;

pub use types::{GroupProperties, ResourceGroup};
