use indexmap::IndexMap;
use serde::Deserialize;

use crate::azure::DEFAULT_AZ_PATH;
use crate::criteria::Criteria;

/// Contents of a `config.toml`. Every field is optional so files can be layered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RgSweepConfig {
    pub azure: AzureConfig,
    pub sweep: SweepConfig,
    /// Default tag criteria; command-line `--tag` values override per key
    pub criteria: IndexMap<String, String>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AzureConfig {
    pub subscription_id: Option<String>,
    pub az_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    pub delete_untagged: Option<bool>,
    pub simulate: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub table: Option<bool>,
}

impl RgSweepConfig {
    /// Layer `overlay` on top of `self`; set fields in `overlay` win.
    pub fn merge(mut self, overlay: RgSweepConfig) -> Self {
        self.azure.subscription_id = overlay.azure.subscription_id.or(self.azure.subscription_id);
        self.azure.az_path = overlay.azure.az_path.or(self.azure.az_path);
        self.sweep.delete_untagged = overlay.sweep.delete_untagged.or(self.sweep.delete_untagged);
        self.sweep.simulate = overlay.sweep.simulate.or(self.sweep.simulate);
        self.output.table = overlay.output.table.or(self.output.table);
        self.criteria.extend(overlay.criteria);
        self
    }

    pub fn az_path(&self) -> &str {
        self.azure.az_path.as_deref().unwrap_or(DEFAULT_AZ_PATH)
    }

    pub fn delete_untagged(&self) -> bool {
        self.sweep.delete_untagged.unwrap_or(false)
    }

    pub fn simulate(&self) -> bool {
        self.sweep.simulate.unwrap_or(false)
    }

    pub fn table(&self) -> bool {
        self.output.table.unwrap_or(false)
    }

    /// Configured criteria, in the order they appear in the file.
    pub fn criteria(&self) -> Criteria {
        self.criteria
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}
