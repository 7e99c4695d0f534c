//! Azure CLI backend: shells out to `az` for every collaborator call.

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tracing::{debug, info, warn};

use crate::azure::errors::AzureError;
use crate::azure::traits::ResourceGroupBackend;
use crate::groups::ResourceGroup;

pub const DEFAULT_AZ_PATH: &str = "az";

/// Backend driving the `az` command-line tool.
#[derive(Debug, Clone)]
pub struct AzCliBackend {
    az_path: String,
    subscription: Option<String>,
}

impl Default for AzCliBackend {
    fn default() -> Self {
        Self::new(DEFAULT_AZ_PATH)
    }
}

impl AzCliBackend {
    pub fn new(az_path: impl Into<String>) -> Self {
        Self {
            az_path: az_path.into(),
            subscription: None,
        }
    }

    /// Scope listing and deletion to `subscription` via `--subscription`.
    pub fn with_subscription(mut self, subscription: Option<String>) -> Self {
        self.subscription = subscription;
        self
    }

    pub fn az_path(&self) -> &str {
        &self.az_path
    }

    fn resolve(&self) -> Result<PathBuf, AzureError> {
        match which::which(&self.az_path) {
            Ok(path) => Ok(path),
            Err(e) => {
                debug!(
                    event = "core.azure.cli_resolve_failed",
                    az_path = %self.az_path,
                    error = %e
                );
                Err(AzureError::CliNotFound {
                    path: self.az_path.clone(),
                })
            }
        }
    }

    fn display(&self, args: &[String]) -> String {
        format!("{} {}", self.az_path, args.join(" "))
    }

    fn scoped(&self, mut args: Vec<String>) -> Vec<String> {
        if let Some(subscription) = &self.subscription {
            args.push("--subscription".to_string());
            args.push(subscription.clone());
        }
        args
    }

    pub(crate) fn login_args(&self) -> Vec<String> {
        vec!["login".to_string(), "--output".to_string(), "none".to_string()]
    }

    pub(crate) fn set_subscription_args(&self, subscription_id: &str) -> Vec<String> {
        vec![
            "account".to_string(),
            "set".to_string(),
            "--subscription".to_string(),
            subscription_id.to_string(),
        ]
    }

    pub(crate) fn list_args(&self) -> Vec<String> {
        self.scoped(vec![
            "group".to_string(),
            "list".to_string(),
            "--output".to_string(),
            "json".to_string(),
        ])
    }

    pub(crate) fn delete_args(&self, resource_id: &str) -> Vec<String> {
        self.scoped(vec![
            "group".to_string(),
            "delete".to_string(),
            "--ids".to_string(),
            resource_id.to_string(),
            "--yes".to_string(),
        ])
    }

    /// Run `az` with stdout captured; stderr is captured for error reporting.
    fn run_captured(&self, args: &[String]) -> Result<String, AzureError> {
        let program = self.resolve()?;
        let command = self.display(args);

        debug!(event = "core.azure.command_started", command = %command);

        let output = Command::new(&program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AzureError::SpawnFailed {
                command: command.clone(),
                source: e,
            })?;

        check_status(&command, &output)?;

        String::from_utf8(output.stdout).map_err(|e| AzureError::InvalidOutput {
            command,
            message: format!("stdout is not UTF-8: {}", e),
        })
    }

    /// Run `az` attached to the terminal so prompts and device codes are visible.
    fn run_interactive(&self, args: &[String]) -> Result<(), AzureError> {
        let program = self.resolve()?;
        let command = self.display(args);

        debug!(event = "core.azure.command_started", command = %command);

        let status = Command::new(&program)
            .args(args)
            .status()
            .map_err(|e| AzureError::SpawnFailed {
                command: command.clone(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(AzureError::CommandFailed {
                command,
                status: status.to_string(),
                stderr: "see output above".to_string(),
            })
        }
    }
}

fn check_status(command: &str, output: &Output) -> Result<(), AzureError> {
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    warn!(
        event = "core.azure.command_failed",
        command = %command,
        status = %output.status,
        stderr = %stderr
    );
    Err(AzureError::CommandFailed {
        command: command.to_string(),
        status: output.status.to_string(),
        stderr,
    })
}

impl ResourceGroupBackend for AzCliBackend {
    fn name(&self) -> &'static str {
        "az-cli"
    }

    fn login(&self) -> Result<(), AzureError> {
        info!(event = "core.azure.login_started");
        self.run_interactive(&self.login_args())?;
        info!(event = "core.azure.login_completed");
        Ok(())
    }

    fn set_subscription(&self, subscription_id: &str) -> Result<(), AzureError> {
        info!(
            event = "core.azure.set_subscription_started",
            subscription_id = subscription_id
        );
        self.run_captured(&self.set_subscription_args(subscription_id))?;
        info!(
            event = "core.azure.set_subscription_completed",
            subscription_id = subscription_id
        );
        Ok(())
    }

    fn list_groups(&self) -> Result<Vec<ResourceGroup>, AzureError> {
        info!(event = "core.azure.list_started");

        let args = self.list_args();
        let stdout = self.run_captured(&args)?;
        let groups: Vec<ResourceGroup> =
            serde_json::from_str(&stdout).map_err(|e| AzureError::InvalidOutput {
                command: self.display(&args),
                message: e.to_string(),
            })?;

        info!(event = "core.azure.list_completed", count = groups.len());
        Ok(groups)
    }

    fn delete_group(&self, resource_id: &str) -> Result<(), AzureError> {
        info!(event = "core.azure.delete_started", resource_id = resource_id);
        self.run_captured(&self.delete_args(resource_id))?;
        info!(event = "core.azure.delete_completed", resource_id = resource_id);
        Ok(())
    }
}
