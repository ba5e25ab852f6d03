//! Form checks done in the core before the backend is called.

use serde_valid::validation::Errors;
use serde_valid::Validate;

use crate::error::ValidationError;
use crate::types::{AwgConfig, RouteConfig, RouterConfig};

pub const MISSING_ROUTE_SOURCES: &str = "укажите хотя бы один BAT файл или URL ссылку";
pub const MISSING_AWG_FILE: &str = "AWG конф. файл не выбран";

/// Login, password and URL must be filled in
pub fn validate_router_config(config: &RouterConfig) -> Result<(), ValidationError> {
    finish(collect(config))
}

/// Router credentials plus a selected `.conf` file
pub fn validate_awg_setup(router: &RouterConfig, awg: &AwgConfig) -> Result<(), ValidationError> {
    let mut messages = collect(router);
    if awg.file_path.trim().is_empty() {
        messages.push(MISSING_AWG_FILE.to_string());
    }
    finish(messages)
}

/// An interface and at least one BAT file or URL
pub fn validate_route_config(config: &RouteConfig) -> Result<(), ValidationError> {
    let mut messages = collect(config);
    if !config.has_sources() {
        messages.push(MISSING_ROUTE_SOURCES.to_string());
    }
    finish(messages)
}

/// Order in which a form reports its field messages
trait FieldOrder: Validate {
    const FIELDS: &'static [&'static str];
}

impl FieldOrder for RouterConfig {
    const FIELDS: &'static [&'static str] = &["login", "password", "url"];
}

impl FieldOrder for RouteConfig {
    const FIELDS: &'static [&'static str] = &["interface_id"];
}

fn collect<T: FieldOrder>(form: &T) -> Vec<String> {
    let Err(errors) = form.validate() else {
        return Vec::new();
    };
    let mut messages = Vec::new();
    match &errors {
        Errors::Object(object) => {
            messages.extend(object.errors.iter().map(ToString::to_string));
            for field in T::FIELDS {
                if let Some(nested) = object.properties.get(*field) {
                    flatten(nested, &mut messages);
                }
            }
            for (field, nested) in &object.properties {
                if !T::FIELDS.iter().any(|name| *name == field.as_ref()) {
                    flatten(nested, &mut messages);
                }
            }
        }
        other => flatten(other, &mut messages),
    }
    messages
}

fn flatten(errors: &Errors, messages: &mut Vec<String>) {
    match errors {
        Errors::Object(object) => {
            messages.extend(object.errors.iter().map(ToString::to_string));
            for nested in object.properties.values() {
                flatten(nested, messages);
            }
        }
        Errors::Array(array) => {
            messages.extend(array.errors.iter().map(ToString::to_string));
            for nested in array.items.values() {
                flatten(nested, messages);
            }
        }
        Errors::NewType(list) => messages.extend(list.iter().map(ToString::to_string)),
    }
}

fn finish(messages: Vec<String>) -> Result<(), ValidationError> {
    if messages.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(messages))
    }
}
