//! Backend command definitions.
//!
//! These types define the interface between the Core and the Shell for calls into the
//! desktop backend that talks to the router.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::failure::Failure;
use crate::types::{AwgConfig, RouteConfig, RouterConfig, WgInterface};

// Operations the Shell forwards to the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BackendOperation {
    TestRouterConnection {
        router: RouterConfig,
    },
    ValidateAwgConfig {
        router: RouterConfig,
        awg: AwgConfig,
    },
    CreateAwgInterface {
        awg: AwgConfig,
    },
    ConfigureAwgInterface {
        awg: AwgConfig,
        interface_id: String,
    },
    ActivateAwgInterface {
        interface_id: String,
    },
    ShowWgInterfaces,
    AddRoutes {
        interface_id: String,
        bat_files: Vec<String>,
        bat_urls: Vec<String>,
    },
    DeleteRoutes {
        interface_id: String,
    },
    OpenFileDialog,
    OpenBatFileDialog,
}

// What the backend answered (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BackendOutput {
    Completed,
    InterfaceCreated { interface_id: String },
    Interfaces(Vec<WgInterface>),
    /// Empty when the dialog was cancelled
    FileSelected { path: String },
    Failed(Failure),
}

impl Operation for BackendOperation {
    type Output = BackendOutput;
}

impl BackendOperation {
    /// Short name for logs; never includes credentials
    pub fn name(&self) -> &'static str {
        match self {
            Self::TestRouterConnection { .. } => "TestRouterConnection",
            Self::ValidateAwgConfig { .. } => "ValidateAwgConfig",
            Self::CreateAwgInterface { .. } => "CreateAwgInterface",
            Self::ConfigureAwgInterface { .. } => "ConfigureAwgInterface",
            Self::ActivateAwgInterface { .. } => "ActivateAwgInterface",
            Self::ShowWgInterfaces => "ShowWgInterfaces",
            Self::AddRoutes { .. } => "AddRoutes",
            Self::DeleteRoutes { .. } => "DeleteRoutes",
            Self::OpenFileDialog => "OpenFileDialog",
            Self::OpenBatFileDialog => "OpenBatFileDialog",
        }
    }
}

impl BackendOutput {
    pub fn into_completed(self) -> Result<(), Failure> {
        match self {
            Self::Completed => Ok(()),
            other => Err(other.into_failure()),
        }
    }

    pub fn into_interface_id(self) -> Result<String, Failure> {
        match self {
            Self::InterfaceCreated { interface_id } => Ok(interface_id),
            other => Err(other.into_failure()),
        }
    }

    pub fn into_interfaces(self) -> Result<Vec<WgInterface>, Failure> {
        match self {
            Self::Interfaces(interfaces) => Ok(interfaces),
            other => Err(other.into_failure()),
        }
    }

    pub fn into_path(self) -> Result<String, Failure> {
        match self {
            Self::FileSelected { path } => Ok(path),
            other => Err(other.into_failure()),
        }
    }

    fn into_failure(self) -> Failure {
        match self {
            Self::Failed(failure) => failure,
            unexpected => {
                log::warn!("unexpected backend output: {unexpected:?}");
                Failure::Unrecognized
            }
        }
    }
}

/// Command-based backend API
pub struct Backend<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Backend<Effect, Event>
where
    Effect: Send + From<crux_core::Request<BackendOperation>> + 'static,
    Event: Send + 'static,
{
    /// Log in to the router with the given credentials
    pub fn test_router_connection(router: RouterConfig) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(BackendOperation::TestRouterConnection { router })
    }

    /// Log in and check the `.conf` file describes a new interface
    pub fn validate_awg_config(router: RouterConfig, awg: AwgConfig) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(BackendOperation::ValidateAwgConfig { router, awg })
    }

    /// Create the interface; answers with its router id
    pub fn create_awg_interface(awg: AwgConfig) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(BackendOperation::CreateAwgInterface { awg })
    }

    /// Apply the `.conf` settings and global IP to a created interface
    pub fn configure_awg_interface(
        awg: AwgConfig,
        interface_id: impl Into<String>,
    ) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(BackendOperation::ConfigureAwgInterface {
            awg,
            interface_id: interface_id.into(),
        })
    }

    /// Bring the interface up and wait until it is connected
    pub fn activate_awg_interface(interface_id: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(BackendOperation::ActivateAwgInterface {
            interface_id: interface_id.into(),
        })
    }

    /// List WireGuard interfaces on the router
    pub fn show_wg_interfaces() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(BackendOperation::ShowWgInterfaces)
    }

    /// Install routes from BAT files and URLs on an interface
    pub fn add_routes(route: RouteConfig) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(BackendOperation::AddRoutes {
            interface_id: route.interface_id,
            bat_files: route.bat_files,
            bat_urls: route.bat_urls,
        })
    }

    /// Remove all user routes bound to an interface
    pub fn delete_routes(interface_id: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(BackendOperation::DeleteRoutes {
            interface_id: interface_id.into(),
        })
    }

    /// Ask the user for an AWG `.conf` file
    pub fn open_file_dialog() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(BackendOperation::OpenFileDialog)
    }

    /// Ask the user for a BAT route file
    pub fn open_bat_file_dialog() -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(BackendOperation::OpenBatFileDialog)
    }
}

/// Request builder for backend operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: BackendOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<BackendOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: BackendOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = BackendOutput>>
    {
        log::debug!("backend request: {}", self.operation.name());
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
