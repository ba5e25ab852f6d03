use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete wizard state
/// Also serves as the ViewModel
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub current_view: View,
    pub variant: SchemaVariant,

    // Form state
    pub router_config: RouterConfig,
    pub awg_config: AwgConfig,
    pub route_config: RouteConfig,

    // Outcome messages
    pub progress_message: String,
    pub error_message: String,
    pub success_message: String,

    // Pipeline state
    pub is_processing: bool,
    pub last_action: Option<LastAction>,
    pub progress_step: u32,
    pub progress_total: u32,

    // Router data fetched through the backend
    pub interfaces: Vec<WgInterface>,
    pub created_interface: Option<String>,
}

impl ViewState {
    /// Replace the state with the value a transition helper derives from it
    pub fn apply(&mut self, transition: impl FnOnce(&ViewState) -> ViewState) {
        *self = transition(&*self);
    }

    /// Router page listing connections, shown after a successful setup
    pub fn connections_url(&self) -> String {
        self.router_config.web_url(OTHER_CONNECTIONS_PATH)
    }

    pub fn progress(&self) -> ProgressUpdate {
        ProgressUpdate::new(
            self.progress_message.clone(),
            self.progress_step,
            self.progress_total,
        )
    }
}

/// What the shell renders: the wizard state plus values derived from it
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub state: ViewState,
    /// Views reachable under the active schema
    pub views: Vec<View>,
    pub progress_percent: Option<u8>,
    /// Picker labels, in the order of `state.interfaces`
    pub interface_labels: Vec<String>,
    pub connections_url: String,
    pub can_retry: bool,
}

impl From<&ViewState> for ViewModel {
    fn from(state: &ViewState) -> Self {
        Self {
            views: state.variant.views(),
            progress_percent: state.progress().percent(),
            interface_labels: state
                .interfaces
                .iter()
                .map(|interface| interface.label().to_string())
                .collect(),
            connections_url: state.connections_url(),
            can_retry: state.current_view == View::Error && state.last_action.is_some(),
            state: state.clone(),
        }
    }
}
