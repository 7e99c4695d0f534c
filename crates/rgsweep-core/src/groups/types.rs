use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A resource group as reported by `az group list --output json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroup {
    /// Full resource identifier, used for deletion
    pub id: String,
    /// Resource group name
    pub name: String,
    /// Azure region
    pub location: String,
    #[serde(default)]
    pub properties: GroupProperties,
    /// Owner tags; `null` in the listing when the group was never tagged
    #[serde(default)]
    pub tags: Option<BTreeMap<String, String>>,
    /// Resource that manages this group, if any
    #[serde(default, rename = "managedBy")]
    pub managed_by: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupProperties {
    #[serde(default, rename = "provisioningState")]
    pub provisioning_state: String,
}

impl ResourceGroup {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            properties: GroupProperties::default(),
            tags: None,
            managed_by: None,
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_empty_tags(mut self) -> Self {
        self.tags = Some(BTreeMap::new());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.properties.provisioning_state = state.into();
        self
    }

    pub fn provisioning_state(&self) -> &str {
        &self.properties.provisioning_state
    }

    /// True when the tag mapping is absent or empty.
    pub fn is_untagged(&self) -> bool {
        self.tags.as_ref().is_none_or(BTreeMap::is_empty)
    }

    /// Exact, case-sensitive tag lookup.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.as_ref()?.get(key).map(String::as_str)
    }

    /// Tags rendered as `k=v, k=v` for display.
    pub fn tags_display(&self) -> String {
        match &self.tags {
            Some(tags) if !tags.is_empty() => tags
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(", "),
            _ => String::new(),
        }
    }
}
