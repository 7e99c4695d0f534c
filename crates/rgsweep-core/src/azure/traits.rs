//! Resource group backend trait definition.

use crate::azure::errors::AzureError;
use crate::groups::ResourceGroup;

/// Trait defining the cloud collaborator the sweep talks to.
///
/// Calls are blocking and issued one at a time. Implementations surface the
/// collaborator's own error text without classifying it.
pub trait ResourceGroupBackend {
    /// The canonical name of this backend (e.g., "az-cli").
    fn name(&self) -> &'static str;

    /// Establish an authenticated session.
    fn login(&self) -> Result<(), AzureError>;

    /// Switch the active subscription context.
    fn set_subscription(&self, subscription_id: &str) -> Result<(), AzureError>;

    /// List resource groups visible in the active context, in API order.
    fn list_groups(&self) -> Result<Vec<ResourceGroup>, AzureError>;

    /// Delete a resource group and its contents without confirmation.
    ///
    /// # Arguments
    /// * `resource_id` - The full resource identifier of the group
    fn delete_group(&self, resource_id: &str) -> Result<(), AzureError>;
}
