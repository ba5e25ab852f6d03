use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StateError;

/// Screen of the wizard that is currently shown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Welcome,
    CreateAwg,
    AddRoutes,
    Progress,
    Success,
    Error,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Welcome,
        View::CreateAwg,
        View::AddRoutes,
        View::Progress,
        View::Success,
        View::Error,
    ];

    /// Tag used by the shell to address this view
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::CreateAwg => "create-awg",
            Self::AddRoutes => "add-routes",
            Self::Progress => "progress",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = StateError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == tag)
            .ok_or_else(|| StateError::InvalidView(tag.to_string()))
    }
}

/// Wizard operation started most recently
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LastAction {
    CreateAwg,
    AddRoutes,
}

/// Capability level of the state schema.
///
/// `Extended` is the full wizard. `Simple` is its restriction to AWG creation only:
/// no route assignment and no dedicated progress screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SchemaVariant {
    Simple,
    #[default]
    Extended,
}

impl SchemaVariant {
    pub fn supports(&self, view: View) -> bool {
        match self {
            Self::Extended => true,
            Self::Simple => !matches!(view, View::AddRoutes | View::Progress),
        }
    }

    pub fn views(&self) -> Vec<View> {
        View::ALL
            .into_iter()
            .filter(|view| self.supports(*view))
            .collect()
    }
}
