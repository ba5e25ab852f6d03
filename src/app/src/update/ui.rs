use crux_core::{render::render, Command};

use crate::events::{Event, UiEvent};
use crate::failure::translate;
use crate::model::ViewState;
use crate::state::{self, initial_state_for};
use crate::update_field;
use crate::Effect;

/// Handle direct view state transitions (navigation, messages, reset)
pub fn handle(event: UiEvent, model: &mut ViewState) -> Command<Effect, Event> {
    match event {
        UiEvent::Navigate { view } => match state::navigate(model, &view) {
            Ok(next) => {
                *model = next;
                render()
            }
            Err(e) => {
                log::warn!("navigation ignored: {e}");
                Command::done()
            }
        },

        UiEvent::SetProcessing(is_processing) => update_field!(model.is_processing, is_processing),

        UiEvent::ShowProgress { message } => {
            model.apply(|s| state::set_progress(s, &message));
            render()
        }

        UiEvent::ShowSuccess { message } => {
            model.apply(|s| state::set_success(s, &message));
            render()
        }

        UiEvent::ShowError { failure } => {
            let message = translate(&failure);
            model.apply(|s| state::set_error(s, &message));
            render()
        }

        // Keeps the schema variant the wizard was started with
        UiEvent::Reset => {
            *model = initial_state_for(model.variant);
            render()
        }

        UiEvent::ClearError => update_field!(model.error_message, String::new()),
        UiEvent::ClearSuccess => update_field!(model.success_message, String::new()),
    }
}
