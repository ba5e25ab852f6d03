use serde::{Deserialize, Serialize};

use crate::failure::Failure;
use crate::types::*;

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Ui(UiEvent),
    Form(FormEvent),
    Wizard(WizardEvent),
}

/// Direct view state transitions requested by the shell
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Switch to the view with the given tag
    Navigate { view: String },
    SetProcessing(bool),
    ShowProgress { message: String },
    ShowSuccess { message: String },
    ShowError { failure: Failure },
    Reset,
    ClearError,
    ClearSuccess,
}

/// Edits of the wizard forms
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SetRouterConfig(RouterConfig),
    SetAwgConfig(AwgConfig),
    SetRouteConfig(RouteConfig),
    SelectInterface { interface_id: String },
    AddBatFile { path: String },
    RemoveBatFile(usize),
    AddBatUrl { url: String },
    RemoveBatUrl(usize),
    SelectAwgFile,
    SelectBatFile,

    // Backend responses (internal events, skipped from serialization)
    #[serde(skip)]
    AwgFileSelected(Result<String, Failure>),
    #[serde(skip)]
    BatFileSelected(Result<String, Failure>),
}

/// Wizard pipelines driven through the backend
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    TestRouterConnection,
    CreateAwg,
    AddRoutes,
    DeleteRoutes,
    LoadInterfaces,
    /// Run the last action again from the error view
    Retry,

    // Backend responses (internal events, skipped from serialization)
    #[serde(skip)]
    RouterConnectionResponse(Result<(), Failure>),
    #[serde(skip)]
    AwgConfigValidated(Result<(), Failure>),
    #[serde(skip)]
    AwgInterfaceCreated(Result<String, Failure>),
    #[serde(skip)]
    AwgInterfaceConfigured(Result<(), Failure>),
    #[serde(skip)]
    AwgInterfaceActivated(Result<(), Failure>),
    #[serde(skip)]
    RoutesAdded(Result<(), Failure>),
    #[serde(skip)]
    RoutesDeleted(Result<(), Failure>),
    #[serde(skip)]
    InterfacesLoaded(Result<Vec<WgInterface>, Failure>),
}
