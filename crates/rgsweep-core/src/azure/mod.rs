//! Azure collaborators: authentication, listing and deletion of resource groups.

mod cli;
mod errors;
mod traits;

pub use cli::{AzCliBackend, DEFAULT_AZ_PATH};
pub use errors::AzureError;
pub use traits::ResourceGroupBackend;

#[cfg(test)]
pub(crate) use traits::testing;
