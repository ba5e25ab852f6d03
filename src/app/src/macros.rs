/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.router_config, config)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.interfaces, interfaces;
///     model.error_message, String::new()
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for backend requests that render first and report back through a domain event.
///
/// The backend output is converted with one of the `BackendOutput::into_*` methods and
/// wrapped into the response variant of the domain event.
///
/// # Example
///
/// ```ignore
/// backend_request!(
///     Wizard,
///     WizardEvent,
///     BackendCmd::create_awg_interface(model.awg_config.clone()),
///     into_interface_id,
///     AwgInterfaceCreated
/// )
/// ```
#[macro_export]
macro_rules! backend_request {
    ($domain:ident, $domain_event:ident, $request:expr, $convert:ident, $response_event:ident) => {{
        crux_core::Command::all([
            crux_core::render::render(),
            $request.build().then_send(|output| {
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    output.$convert(),
                ))
            }),
        ])
    }};
}
