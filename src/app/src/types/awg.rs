use serde::{Deserialize, Serialize};

use super::binding::FromBackendJson;

/// AWG profile: connection name and the `.conf` file it is created from
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AwgConfig {
    /// Optional; the backend falls back to the file name when empty
    pub name: String,
    pub file_path: String,
}

impl FromBackendJson for AwgConfig {}

/// WireGuard interface present on the router
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WgInterface {
    #[serde(alias = "Id")]
    pub id: String,
    #[serde(alias = "Description")]
    pub description: String,
}

impl WgInterface {
    /// Label for interface pickers: description when known, id otherwise
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            &self.id
        } else {
            &self.description
        }
    }
}

impl FromBackendJson for WgInterface {}
