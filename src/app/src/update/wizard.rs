use crux_core::{render::render, Command};

use crate::backend_request;
use crate::error::StateError;
use crate::events::{Event, WizardEvent};
use crate::failure::{translate, Failure};
use crate::model::ViewState;
use crate::state;
use crate::types::{LastAction, ProgressUpdate, View};
use crate::validation::{validate_awg_setup, validate_route_config, validate_router_config};
use crate::{BackendCmd, Effect};

pub const CREATE_AWG_STEPS: u32 = 4;

pub const MSG_CHECKING_SETUP: &str = "Проверяем данные роутера и conf файл...";
pub const MSG_CREATING: &str = "Создаём соединение...";
pub const MSG_CONFIGURING: &str = "Настраиваем соединение...";
pub const MSG_ACTIVATING: &str = "Ждём пока соединение заработает...";
pub const MSG_ADDING_ROUTES: &str = "Добавляем маршруты...";
pub const MSG_DELETING_ROUTES: &str = "Удаляем маршруты...";
pub const MSG_TESTING_ROUTER: &str = "Проверяем подключение к роутеру...";
pub const MSG_ROUTER_CONNECTED: &str = "Подключение к роутеру установлено";
pub const MSG_ROUTES_ADDED: &str = "Маршруты успешно добавлены";
pub const MSG_ROUTES_DELETED: &str = "Маршруты удалены";
pub const MSG_NO_INTERFACE: &str = "ID интерфейса не указан";

/// Handle the backend-driven wizard pipelines
pub fn handle(event: WizardEvent, model: &mut ViewState) -> Command<Effect, Event> {
    match event {
        WizardEvent::TestRouterConnection => {
            model.last_action = None;
            if let Err(e) = validate_router_config(&model.router_config) {
                return fail(model, e.into());
            }
            single_step(model, MSG_TESTING_ROUTER);
            backend_request!(
                Wizard,
                WizardEvent,
                BackendCmd::test_router_connection(model.router_config.clone()),
                into_completed,
                RouterConnectionResponse
            )
        }

        WizardEvent::RouterConnectionResponse(result) => on_step(model, result, |model, ()| {
            model.apply(|s| state::set_success(s, MSG_ROUTER_CONNECTED));
            render()
        }),

        WizardEvent::CreateAwg => start_create_awg(model),

        WizardEvent::AwgConfigValidated(result) => {
            on_step(model, result, |model, ()| {
                step(model, MSG_CREATING, 2);
                backend_request!(
                    Wizard,
                    WizardEvent,
                    BackendCmd::create_awg_interface(model.awg_config.clone()),
                    into_interface_id,
                    AwgInterfaceCreated
                )
            })
        }

        WizardEvent::AwgInterfaceCreated(result) => on_step(model, result, |model, interface_id| {
            log::info!("AWG interface created: {interface_id}");
            model.created_interface = Some(interface_id.clone());
            step(model, MSG_CONFIGURING, 3);
            backend_request!(
                Wizard,
                WizardEvent,
                BackendCmd::configure_awg_interface(model.awg_config.clone(), interface_id),
                into_completed,
                AwgInterfaceConfigured
            )
        }),

        WizardEvent::AwgInterfaceConfigured(result) => on_step(model, result, |model, ()| {
            let Some(interface_id) = model.created_interface.clone() else {
                return fail(model, Failure::Unrecognized);
            };
            step(model, MSG_ACTIVATING, 4);
            backend_request!(
                Wizard,
                WizardEvent,
                BackendCmd::activate_awg_interface(interface_id),
                into_completed,
                AwgInterfaceActivated
            )
        }),

        WizardEvent::AwgInterfaceActivated(result) => on_step(model, result, |model, ()| {
            let interface_id = model.created_interface.clone().unwrap_or_default();
            if model.route_config.interface_id.is_empty() {
                model.route_config.interface_id = interface_id.clone();
            }
            let message = awg_created_message(&interface_id);
            model.apply(|s| state::set_success(s, &message));
            render()
        }),

        WizardEvent::AddRoutes => {
            if let Err(e) = state::ensure_supported(model, View::AddRoutes) {
                return ignore(e);
            }
            model.last_action = Some(LastAction::AddRoutes);
            if let Err(e) = validate_route_config(&model.route_config) {
                return fail(model, e.into());
            }
            single_step(model, MSG_ADDING_ROUTES);
            backend_request!(
                Wizard,
                WizardEvent,
                BackendCmd::add_routes(model.route_config.clone()),
                into_completed,
                RoutesAdded
            )
        }

        WizardEvent::RoutesAdded(result) => on_step(model, result, |model, ()| {
            model.apply(|s| state::set_success(s, MSG_ROUTES_ADDED));
            render()
        }),

        WizardEvent::DeleteRoutes => {
            if let Err(e) = state::ensure_supported(model, View::AddRoutes) {
                return ignore(e);
            }
            model.last_action = None;
            if model.route_config.interface_id.is_empty() {
                return fail(model, Failure::application(MSG_NO_INTERFACE));
            }
            single_step(model, MSG_DELETING_ROUTES);
            backend_request!(
                Wizard,
                WizardEvent,
                BackendCmd::delete_routes(model.route_config.interface_id.clone()),
                into_completed,
                RoutesDeleted
            )
        }

        WizardEvent::RoutesDeleted(result) => on_step(model, result, |model, ()| {
            model.apply(|s| state::set_success(s, MSG_ROUTES_DELETED));
            render()
        }),

        WizardEvent::LoadInterfaces => {
            if let Err(e) = state::ensure_supported(model, View::AddRoutes) {
                return ignore(e);
            }
            model.last_action = None;
            backend_request!(
                Wizard,
                WizardEvent,
                BackendCmd::show_wg_interfaces(),
                into_interfaces,
                InterfacesLoaded
            )
        }

        // The list only feeds the route form; answers arriving elsewhere are stale
        WizardEvent::InterfacesLoaded(result) => {
            if model.current_view != View::AddRoutes {
                log::debug!("dropping interface list outside of the route form");
                return Command::done();
            }
            match result {
                Ok(interfaces) => {
                    if model.route_config.interface_id.is_empty() && interfaces.len() == 1 {
                        model.route_config.interface_id = interfaces[0].id.clone();
                    }
                    model.interfaces = interfaces;
                    render()
                }
                Err(failure) => fail(model, failure),
            }
        }

        WizardEvent::Retry => {
            if model.current_view != View::Error {
                return Command::done();
            }
            match model.last_action {
                Some(LastAction::CreateAwg) => start_create_awg(model),
                Some(LastAction::AddRoutes) => handle(WizardEvent::AddRoutes, model),
                None => Command::done(),
            }
        }
    }
}

/// Text of the success view after the interface is up
pub fn awg_created_message(interface_id: &str) -> String {
    format!(
        "Соединение успешно создано и включено!\nID созданного соединения: {interface_id}\nТеперь можно приступить к настройке политик подключения или маршрутизации."
    )
}

fn start_create_awg(model: &mut ViewState) -> Command<Effect, Event> {
    model.last_action = Some(LastAction::CreateAwg);
    model.created_interface = None;
    if let Err(e) = validate_awg_setup(&model.router_config, &model.awg_config) {
        return fail(model, e.into());
    }
    step(model, MSG_CHECKING_SETUP, 1);
    backend_request!(
        Wizard,
        WizardEvent,
        BackendCmd::validate_awg_config(model.router_config.clone(), model.awg_config.clone()),
        into_completed,
        AwgConfigValidated
    )
}

fn step(model: &mut ViewState, message: &str, step: u32) {
    let update = ProgressUpdate::new(message, step, CREATE_AWG_STEPS);
    model.apply(|s| state::set_progress_step(s, &update));
}

fn single_step(model: &mut ViewState, message: &str) {
    let update = ProgressUpdate::new(message, 1, 1);
    model.apply(|s| state::set_progress_step(s, &update));
}

fn ignore(error: StateError) -> Command<Effect, Event> {
    log::warn!("wizard action ignored: {error}");
    Command::done()
}

/// Continue a pipeline with the backend result, or end it with an error.
///
/// Responses arriving after the pipeline was left (reset, navigation to a terminal view)
/// are dropped.
fn on_step<T>(
    model: &mut ViewState,
    result: Result<T, Failure>,
    next: impl FnOnce(&mut ViewState, T) -> Command<Effect, Event>,
) -> Command<Effect, Event> {
    if !model.is_processing {
        log::debug!("dropping backend response outside of a running pipeline");
        return Command::done();
    }
    match result {
        Ok(value) => next(model, value),
        Err(failure) => fail(model, failure),
    }
}

fn fail(model: &mut ViewState, failure: Failure) -> Command<Effect, Event> {
    log::warn!("wizard step failed: {failure:?}");
    let message = translate(&failure);
    model.apply(|s| state::set_error(s, &message));
    render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::ROUTER_MODE_MESSAGE;
    use crate::types::{AwgConfig, RouteConfig, RouterConfig, SchemaVariant, WgInterface};
    use crate::validation::MISSING_ROUTE_SOURCES;

    fn ready_model() -> ViewState {
        ViewState {
            current_view: View::CreateAwg,
            router_config: RouterConfig {
                password: "secret".to_string(),
                ..Default::default()
            },
            awg_config: AwgConfig {
                name: "home".to_string(),
                file_path: "/tmp/home.conf".to_string(),
            },
            ..Default::default()
        }
    }

    mod create_awg {
        use super::*;

        #[test]
        fn starts_with_validation_step() {
            let mut model = ready_model();

            let _ = handle(WizardEvent::CreateAwg, &mut model);

            assert_eq!(model.current_view, View::Progress);
            assert!(model.is_processing);
            assert_eq!(model.last_action, Some(LastAction::CreateAwg));
            assert_eq!(model.progress(), ProgressUpdate::new(MSG_CHECKING_SETUP, 1, 4));
        }

        #[test]
        fn invalid_form_fails_without_backend_call() {
            let mut model = ViewState::default();

            let mut cmd = handle(WizardEvent::CreateAwg, &mut model);

            assert_eq!(model.current_view, View::Error);
            assert!(!model.is_processing);
            assert!(model.error_message.contains("пароль от роутера не введен"));
            assert!(cmd
                .effects()
                .all(|effect| !matches!(effect, Effect::Backend(_))));
        }

        #[test]
        fn full_pipeline_reaches_success() {
            let mut model = ready_model();

            let _ = handle(WizardEvent::CreateAwg, &mut model);
            let _ = handle(WizardEvent::AwgConfigValidated(Ok(())), &mut model);
            assert_eq!(model.progress_message, MSG_CREATING);

            let _ = handle(
                WizardEvent::AwgInterfaceCreated(Ok("Wireguard2".to_string())),
                &mut model,
            );
            assert_eq!(model.created_interface.as_deref(), Some("Wireguard2"));
            assert_eq!(model.progress_step, 3);

            let _ = handle(WizardEvent::AwgInterfaceConfigured(Ok(())), &mut model);
            assert_eq!(model.progress_message, MSG_ACTIVATING);

            let _ = handle(WizardEvent::AwgInterfaceActivated(Ok(())), &mut model);

            assert_eq!(model.current_view, View::Success);
            assert!(!model.is_processing);
            assert_eq!(model.success_message, awg_created_message("Wireguard2"));
            assert_eq!(model.progress_message, MSG_ACTIVATING);
            assert_eq!(model.route_config.interface_id, "Wireguard2");
        }

        #[test]
        fn router_mode_failure_is_localized() {
            let mut model = ready_model();

            let _ = handle(WizardEvent::CreateAwg, &mut model);
            let _ = handle(
                WizardEvent::AwgConfigValidated(Err(Failure::generic(
                    "ошибка авторизации: router is not in router mode",
                ))),
                &mut model,
            );

            assert_eq!(model.current_view, View::Error);
            assert_eq!(model.error_message, ROUTER_MODE_MESSAGE);
            assert!(!model.is_processing);
        }

        #[test]
        fn late_response_after_reset_is_dropped() {
            let mut model = ready_model();
            let _ = handle(WizardEvent::CreateAwg, &mut model);
            model = ViewState::default();

            let _ = handle(
                WizardEvent::AwgInterfaceCreated(Ok("Wireguard2".to_string())),
                &mut model,
            );

            assert_eq!(model, ViewState::default());
        }

        #[test]
        fn retry_restarts_from_error_view() {
            let mut model = ready_model();
            let _ = handle(WizardEvent::CreateAwg, &mut model);
            let _ = handle(
                WizardEvent::AwgConfigValidated(Err(Failure::Raw("timeout".to_string()))),
                &mut model,
            );

            let _ = handle(WizardEvent::Retry, &mut model);

            assert_eq!(model.current_view, View::Progress);
            assert!(model.error_message.is_empty());
            assert_eq!(model.progress_step, 1);
        }
    }

    mod routes {
        use super::*;

        fn routes_model() -> ViewState {
            ViewState {
                current_view: View::AddRoutes,
                route_config: RouteConfig {
                    interface_id: "Wireguard0".to_string(),
                    bat_files: vec!["youtube.bat".to_string()],
                    bat_urls: vec![],
                },
                ..Default::default()
            }
        }

        #[test]
        fn add_routes_requires_sources() {
            let mut model = ViewState {
                route_config: RouteConfig {
                    interface_id: "Wireguard0".to_string(),
                    ..Default::default()
                },
                ..Default::default()
            };

            let _ = handle(WizardEvent::AddRoutes, &mut model);

            assert_eq!(model.current_view, View::Error);
            assert_eq!(model.error_message, MISSING_ROUTE_SOURCES);
            assert_eq!(model.last_action, Some(LastAction::AddRoutes));
        }

        #[test]
        fn add_routes_success() {
            let mut model = routes_model();

            let _ = handle(WizardEvent::AddRoutes, &mut model);
            assert_eq!(model.progress_message, MSG_ADDING_ROUTES);

            let _ = handle(WizardEvent::RoutesAdded(Ok(())), &mut model);

            assert_eq!(model.current_view, View::Success);
            assert_eq!(model.success_message, MSG_ROUTES_ADDED);
        }

        #[test]
        fn delete_routes_requires_interface() {
            let mut model = ViewState::default();

            let _ = handle(WizardEvent::DeleteRoutes, &mut model);

            assert_eq!(model.current_view, View::Error);
            assert_eq!(model.error_message, MSG_NO_INTERFACE);
        }

        #[test]
        fn delete_routes_success() {
            let mut model = routes_model();

            let _ = handle(WizardEvent::DeleteRoutes, &mut model);
            let _ = handle(WizardEvent::RoutesDeleted(Ok(())), &mut model);

            assert_eq!(model.success_message, MSG_ROUTES_DELETED);
        }

        #[test]
        fn failed_delete_is_not_retried_as_older_action() {
            let mut model = ViewState {
                last_action: Some(LastAction::CreateAwg),
                ..routes_model()
            };

            let _ = handle(WizardEvent::DeleteRoutes, &mut model);
            let _ = handle(
                WizardEvent::RoutesDeleted(Err(Failure::Raw("boom".to_string()))),
                &mut model,
            );
            assert_eq!(model.current_view, View::Error);
            assert_eq!(model.last_action, None);

            let mut cmd = handle(WizardEvent::Retry, &mut model);

            assert_eq!(model.current_view, View::Error);
            assert!(cmd
                .effects()
                .all(|effect| !matches!(effect, Effect::Backend(_))));
        }

        #[test]
        fn failed_route_install_is_retried() {
            let mut model = routes_model();
            let _ = handle(WizardEvent::AddRoutes, &mut model);
            let _ = handle(
                WizardEvent::RoutesAdded(Err(Failure::Raw("timeout".to_string()))),
                &mut model,
            );

            let _ = handle(WizardEvent::Retry, &mut model);

            assert_eq!(model.current_view, View::Progress);
            assert_eq!(model.progress_message, MSG_ADDING_ROUTES);
        }

        #[test]
        fn single_loaded_interface_is_preselected() {
            let mut model = ViewState {
                current_view: View::AddRoutes,
                ..Default::default()
            };
            let interfaces = vec![WgInterface {
                id: "Wireguard0".to_string(),
                description: "Home".to_string(),
            }];

            let _ = handle(WizardEvent::InterfacesLoaded(Ok(interfaces.clone())), &mut model);

            assert_eq!(model.interfaces, interfaces);
            assert_eq!(model.route_config.interface_id, "Wireguard0");
        }

        #[test]
        fn interface_list_outside_route_form_is_dropped() {
            let mut model = ViewState::default();

            let _ = handle(
                WizardEvent::InterfacesLoaded(Err(Failure::Raw("offline".to_string()))),
                &mut model,
            );

            assert_eq!(model, ViewState::default());
        }

        #[test]
        fn failed_interface_list_on_route_form_shows_error() {
            let mut model = routes_model();

            let _ = handle(WizardEvent::LoadInterfaces, &mut model);
            let _ = handle(
                WizardEvent::InterfacesLoaded(Err(Failure::Raw("offline".to_string()))),
                &mut model,
            );

            assert_eq!(model.current_view, View::Error);
            assert_eq!(model.error_message, "offline");
        }

        #[test]
        fn simple_schema_rejects_route_actions() {
            let simple = ViewState {
                variant: SchemaVariant::Simple,
                current_view: View::CreateAwg,
                ..routes_model()
            };

            for event in [
                WizardEvent::AddRoutes,
                WizardEvent::DeleteRoutes,
                WizardEvent::LoadInterfaces,
            ] {
                let mut model = simple.clone();

                let mut cmd = handle(event, &mut model);

                assert_eq!(model, simple);
                assert!(cmd
                    .effects()
                    .all(|effect| !matches!(effect, Effect::Backend(_))));
            }
        }
    }

    mod router_connection {
        use super::*;

        #[test]
        fn check_runs_in_progress_view() {
            let mut model = ready_model();

            let _ = handle(WizardEvent::TestRouterConnection, &mut model);

            assert_eq!(model.current_view, View::Progress);
            assert!(model.is_processing);
            assert_eq!(model.progress_message, MSG_TESTING_ROUTER);
        }

        #[test]
        fn success_ends_in_success_view() {
            let mut model = ready_model();

            let _ = handle(WizardEvent::TestRouterConnection, &mut model);
            let _ = handle(WizardEvent::RouterConnectionResponse(Ok(())), &mut model);

            assert_eq!(model.current_view, View::Success);
            assert!(!model.is_processing);
            assert_eq!(model.success_message, MSG_ROUTER_CONNECTED);
        }

        #[test]
        fn late_answer_after_reset_is_dropped() {
            let mut model = ViewState::default();

            let _ = handle(WizardEvent::RouterConnectionResponse(Ok(())), &mut model);

            assert_eq!(model, ViewState::default());
        }

        #[test]
        fn failed_check_is_not_retried_as_older_action() {
            let mut model = ViewState {
                last_action: Some(LastAction::CreateAwg),
                ..ready_model()
            };

            let _ = handle(WizardEvent::TestRouterConnection, &mut model);
            let _ = handle(
                WizardEvent::RouterConnectionResponse(Err(Failure::Raw("denied".to_string()))),
                &mut model,
            );
            let _ = handle(WizardEvent::Retry, &mut model);

            assert_eq!(model.current_view, View::Error);
            assert_eq!(model.error_message, "denied");
        }

        #[test]
        fn failure_shows_error() {
            let mut model = ready_model();

            let _ = handle(WizardEvent::TestRouterConnection, &mut model);
            let _ = handle(
                WizardEvent::RouterConnectionResponse(Err(Failure::Unrecognized)),
                &mut model,
            );

            assert_eq!(model.current_view, View::Error);
            assert_eq!(model.error_message, crate::failure::UNKNOWN_FAILURE_MESSAGE);
        }
    }
}
