use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use super::binding::FromBackendJson;

/// Route sources to install on one router interface.
///
/// `bat_files` and `bat_urls` are independent lists; either may be empty as long as
/// the other is not.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteConfig {
    #[validate(min_length = 1, message = "ID интерфейса не указан")]
    pub interface_id: String,
    pub bat_files: Vec<String>,
    pub bat_urls: Vec<String>,
}

impl RouteConfig {
    pub fn has_sources(&self) -> bool {
        !self.bat_files.is_empty() || !self.bat_urls.is_empty()
    }

    /// Append a BAT file unless it is already listed
    pub fn add_bat_file(&mut self, path: String) -> bool {
        push_unique(&mut self.bat_files, path)
    }

    /// Append a BAT URL unless it is already listed
    pub fn add_bat_url(&mut self, url: String) -> bool {
        push_unique(&mut self.bat_urls, url)
    }
}

impl FromBackendJson for RouteConfig {}

fn push_unique(list: &mut Vec<String>, value: String) -> bool {
    let value = value.trim().to_string();
    if value.is_empty() || list.contains(&value) {
        return false;
    }
    list.push(value);
    true
}
