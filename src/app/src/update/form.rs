use crux_core::{render::render, Command};

use crate::backend_request;
use crate::events::{Event, FormEvent};
use crate::failure::{translate, Failure};
use crate::model::ViewState;
use crate::state;
use crate::update_field;
use crate::{BackendCmd, Effect};

/// Handle edits of the router, AWG and route forms
pub fn handle(event: FormEvent, model: &mut ViewState) -> Command<Effect, Event> {
    match event {
        FormEvent::SetRouterConfig(config) => update_field!(model.router_config, config),
        FormEvent::SetAwgConfig(config) => update_field!(model.awg_config, config),
        FormEvent::SetRouteConfig(config) => update_field!(model.route_config, config),
        FormEvent::SelectInterface { interface_id } => {
            update_field!(model.route_config.interface_id, interface_id)
        }

        FormEvent::AddBatFile { path } => render_if(model.route_config.add_bat_file(path)),
        FormEvent::AddBatUrl { url } => render_if(model.route_config.add_bat_url(url)),
        FormEvent::RemoveBatFile(index) => render_if(remove_at(&mut model.route_config.bat_files, index)),
        FormEvent::RemoveBatUrl(index) => render_if(remove_at(&mut model.route_config.bat_urls, index)),

        FormEvent::SelectAwgFile => backend_request!(
            Form,
            FormEvent,
            BackendCmd::open_file_dialog(),
            into_path,
            AwgFileSelected
        ),

        FormEvent::SelectBatFile => backend_request!(
            Form,
            FormEvent,
            BackendCmd::open_bat_file_dialog(),
            into_path,
            BatFileSelected
        ),

        FormEvent::AwgFileSelected(result) => match result {
            Ok(path) if path.is_empty() => Command::done(),
            Ok(path) => update_field!(model.awg_config.file_path, path),
            Err(failure) => dialog_failed(model, failure),
        },

        FormEvent::BatFileSelected(result) => match result {
            Ok(path) => render_if(model.route_config.add_bat_file(path)),
            Err(failure) => dialog_failed(model, failure),
        },
    }
}

fn remove_at(list: &mut Vec<String>, index: usize) -> bool {
    if index < list.len() {
        list.remove(index);
        true
    } else {
        false
    }
}

fn render_if(changed: bool) -> Command<Effect, Event> {
    if changed {
        render()
    } else {
        Command::done()
    }
}

fn dialog_failed(model: &mut ViewState, failure: Failure) -> Command<Effect, Event> {
    log::warn!("file dialog failed: {failure:?}");
    let message = translate(&failure);
    model.apply(|s| state::set_error(s, &message));
    render()
}
