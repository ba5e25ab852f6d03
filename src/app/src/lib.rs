pub mod commands;
pub mod error;
pub mod events;
pub mod failure;
pub mod macros;
pub mod model;
pub mod state;
pub mod types;
pub mod update;
pub mod validation;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::backend::{BackendOperation, BackendOutput},
    error::{StateError, ValidationError},
    events::{Event, FormEvent, UiEvent, WizardEvent},
    failure::{translate, Failure},
    model::{ViewModel, ViewState},
    state::{
        initial_state, navigate, reset_state, set_error, set_processing, set_progress,
        set_success, update_view,
    },
    types::*,
};

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Backend(BackendOperation),
}

pub type BackendCmd = crate::commands::backend::Backend<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = ViewState;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        ViewModel::from(model)
    }
}
