mod form;
mod ui;
mod wizard;

use crux_core::Command;

use crate::events::Event;
use crate::model::ViewState;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut ViewState) -> Command<Effect, Event> {
    match event {
        Event::Ui(event) => ui::handle(event, model),
        Event::Form(event) => form::handle(event, model),
        Event::Wizard(event) => wizard::handle(event, model),
    }
}
