use serde::{Deserialize, Serialize};
use serde_valid::Validate;

use super::binding::FromBackendJson;

/// Address of a Keenetic router reachable from its own LAN
pub const DEFAULT_ROUTER_URL: &str = "http://192.168.1.1";
/// Factory administrator login
pub const DEFAULT_ROUTER_LOGIN: &str = "admin";

/// Web interface page listing the router's other connections
pub const OTHER_CONNECTIONS_PATH: &str = "otherConnections";

/// Credentials for the router's management interface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(default)]
pub struct RouterConfig {
    #[validate(min_length = 1, message = "URL роутера не введен")]
    pub url: String,
    #[validate(min_length = 1, message = "логин от роутера не введен")]
    pub login: String,
    #[validate(min_length = 1, message = "пароль от роутера не введен")]
    pub password: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ROUTER_URL.to_string(),
            login: DEFAULT_ROUTER_LOGIN.to_string(),
            password: String::new(),
        }
    }
}

impl RouterConfig {
    /// Link into the router web interface, e.g. `otherConnections`
    pub fn web_url(&self, path: &str) -> String {
        router_web_url(&self.url, path)
    }
}

impl FromBackendJson for RouterConfig {}

/// Join the router address with a page path; an empty path yields the address itself.
pub fn router_web_url(router_url: &str, path: &str) -> String {
    if path.is_empty() {
        return router_url.to_string();
    }
    format!("{router_url}/{path}")
}
