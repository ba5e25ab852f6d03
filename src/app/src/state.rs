//! Pure transitions of the wizard view state.
//!
//! Every helper borrows the current state and returns a new value; nothing is mutated in
//! place. The update handlers install the result with [`ViewState::apply`].

use crate::error::StateError;
use crate::model::ViewState;
use crate::types::{ProgressUpdate, SchemaVariant, View};

/// Welcome view, default forms, no messages
pub fn initial_state() -> ViewState {
    ViewState::default()
}

/// Initial state of a wizard restricted to the given schema
pub fn initial_state_for(variant: SchemaVariant) -> ViewState {
    ViewState {
        variant,
        ..initial_state()
    }
}

/// Switch to `view`; nothing else changes
pub fn update_view(state: &ViewState, view: View) -> ViewState {
    ViewState {
        current_view: view,
        ..state.clone()
    }
}

/// Switch to the view named by a shell tag.
///
/// Fails for tags outside the closed view set and for views the active schema lacks.
pub fn navigate(state: &ViewState, tag: &str) -> Result<ViewState, StateError> {
    let view: View = tag.parse()?;
    ensure_supported(state, view)?;
    Ok(update_view(state, view))
}

/// Fails when the active schema has no `view`
pub fn ensure_supported(state: &ViewState, view: View) -> Result<(), StateError> {
    if state.variant.supports(view) {
        Ok(())
    } else {
        Err(StateError::UnsupportedView(view.to_string()))
    }
}

pub fn set_processing(state: &ViewState, is_processing: bool) -> ViewState {
    ViewState {
        is_processing,
        ..state.clone()
    }
}

/// Enter the progress view with `message`.
///
/// Starts a new cycle: processing is switched on and outcome messages of the previous
/// cycle are cleared. The simple schema has no progress view and stays on the current one.
pub fn set_progress(state: &ViewState, message: &str) -> ViewState {
    let current_view = if state.variant.supports(View::Progress) {
        View::Progress
    } else {
        state.current_view
    };
    ViewState {
        current_view,
        progress_message: message.to_string(),
        error_message: String::new(),
        success_message: String::new(),
        is_processing: true,
        ..state.clone()
    }
}

/// Like [`set_progress`], also recording the pipeline position
pub fn set_progress_step(state: &ViewState, update: &ProgressUpdate) -> ViewState {
    ViewState {
        progress_step: update.step,
        progress_total: update.total,
        ..set_progress(state, &update.message)
    }
}

/// Terminal success; the progress message is kept
pub fn set_success(state: &ViewState, message: &str) -> ViewState {
    ViewState {
        current_view: View::Success,
        success_message: message.to_string(),
        error_message: String::new(),
        is_processing: false,
        ..state.clone()
    }
}

/// Terminal failure; the progress message is kept
pub fn set_error(state: &ViewState, message: &str) -> ViewState {
    ViewState {
        current_view: View::Error,
        error_message: message.to_string(),
        success_message: String::new(),
        is_processing: false,
        ..state.clone()
    }
}

/// Discard the session and start over at the welcome view
pub fn reset_state() -> ViewState {
    initial_state()
}
