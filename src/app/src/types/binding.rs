//! Construction of wizard records from backend payloads.
//!
//! The desktop backend hands records over as JSON. Go marshals empty slices as `null`,
//! so null members are dropped before decoding and fall back to the record's default.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Records that mirror a backend binding shape
pub trait FromBackendJson: DeserializeOwned {
    /// Decode a record from a JSON-encoded backend payload
    fn from_backend_json(source: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_backend_value(value)
    }

    /// Decode a record from an already parsed backend payload
    fn from_backend_value(mut value: Value) -> serde_json::Result<Self> {
        strip_nulls(&mut value);
        serde_json::from_value(value)
    }
}

impl<T: FromBackendJson> FromBackendJson for Vec<T> {}

fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AwgConfig, RouteConfig, RouterConfig, WgInterface};

    #[test]
    fn route_config_from_backend_json() {
        let config = RouteConfig::from_backend_json(
            r#"{"interfaceId":"Wireguard0","batFiles":["a.bat"],"batUrls":["https://x/b.bat"]}"#,
        )
        .unwrap();

        assert_eq!(config.interface_id, "Wireguard0");
        assert_eq!(config.bat_files, vec!["a.bat".to_string()]);
        assert_eq!(config.bat_urls, vec!["https://x/b.bat".to_string()]);
    }

    #[test]
    fn null_lists_decode_as_empty() {
        let config =
            RouteConfig::from_backend_json(r#"{"interfaceId":"Wireguard1","batFiles":null,"batUrls":null}"#)
                .unwrap();

        assert!(config.bat_files.is_empty());
        assert!(config.bat_urls.is_empty());
    }

    #[test]
    fn missing_members_take_defaults() {
        let router = RouterConfig::from_backend_json(r#"{"password":"secret"}"#).unwrap();

        assert_eq!(router.url, "http://192.168.1.1");
        assert_eq!(router.login, "admin");
        assert_eq!(router.password, "secret");
    }

    #[test]
    fn awg_config_uses_camel_case_members() {
        let awg = AwgConfig::from_backend_json(r#"{"name":"vpn","filePath":"/tmp/vpn.conf"}"#)
            .unwrap();

        assert_eq!(
            awg,
            AwgConfig {
                name: "vpn".to_string(),
                file_path: "/tmp/vpn.conf".to_string(),
            }
        );
    }

    #[test]
    fn interface_list_accepts_go_field_names() {
        let interfaces = Vec::<WgInterface>::from_backend_json(
            r#"[{"Id":"Wireguard0","Description":"Home VPN"},{"Id":"Wireguard1","Description":""}]"#,
        )
        .unwrap();

        assert_eq!(interfaces.len(), 2);
        assert_eq!(interfaces[0].label(), "Home VPN");
        assert_eq!(interfaces[1].label(), "Wireguard1");
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(AwgConfig::from_backend_json("{not json").is_err());
    }
}
