use registrar_common::error::RegistrarError;
use registrar_common::platform::app::App;
use registrar_common::platform::route::Route;
use registrar_common::platform::service::{
    ExistingService, MAX_SERVICE_NAME_LEN, ServiceRegistration,
};
use registrar_core::register::RegistrationService;
use registrar_core::testing::FakePlatform;

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

fn platform_with_app(routes: Vec<Route>) -> FakePlatform {
    let mut platform = FakePlatform::new();
    platform.apps.push(App::new("app-name", routes));
    platform
}

#[test]
fn log_format_creates_then_binds() {
    let platform = FakePlatform::new();

    RegistrationService::new(&platform)
        .register_log_format("app-name", "format-name")
        .unwrap();

    assert_eq!(
        platform.commands(),
        vec![
            strings(&[
                "create-user-provided-service",
                "structured-format-format-name",
                "-l",
                "structured-format://format-name",
            ]),
            strings(&["bind-service", "app-name", "structured-format-format-name"]),
        ]
    );
    assert_eq!(platform.app_lookups(), 0);
}

#[test]
fn existing_service_is_bound_but_not_created() {
    let platform = FakePlatform::with_services(vec![
        ExistingService::named("unrelated"),
        ExistingService::named("protocol-config"),
    ]);

    let registered = RegistrationService::new(&platform)
        .ensure_service_and_bind("app-name", &ServiceRegistration::new("protocol", "config"))
        .unwrap();

    assert!(!registered.created);
    assert_eq!(platform.command_names(), vec!["bind-service"]);
}

#[test]
fn service_query_failure_runs_no_commands() {
    let mut platform = FakePlatform::new();
    platform.services_error = Some("error".to_string());

    let err = RegistrationService::new(&platform)
        .ensure_service_and_bind("app-name", &ServiceRegistration::new("protocol", "config"))
        .unwrap_err();

    assert!(matches!(err, RegistrarError::Query(_)));
    assert_eq!(err.to_string(), "error");
    assert!(platform.commands().is_empty());
}

#[test]
fn create_failure_skips_bind() {
    let mut platform = FakePlatform::new();
    platform.error_command = Some("create-user-provided-service".to_string());

    let err = RegistrationService::new(&platform)
        .ensure_service_and_bind("app-name", &ServiceRegistration::new("protocol", "config"))
        .unwrap_err();

    assert!(matches!(err, RegistrarError::Command(_)));
    assert_eq!(platform.command_names(), vec!["create-user-provided-service"]);
}

#[test]
fn bind_failure_after_create() {
    let mut platform = FakePlatform::new();
    platform.error_command = Some("bind-service".to_string());

    let result = RegistrationService::new(&platform)
        .ensure_service_and_bind("app-name", &ServiceRegistration::new("protocol", "config"));

    assert!(result.is_err());
    assert_eq!(
        platform.command_names(),
        vec!["create-user-provided-service", "bind-service"]
    );
}

#[test]
fn long_paths_are_truncated_without_slashes() {
    let platform = FakePlatform::new();
    let path = "/metrics/for/a/service/with/a/really/deep/nested/path/layout";

    let registered = RegistrationService::new(&platform)
        .register_metrics_endpoint("app-name", path)
        .unwrap();

    assert_eq!(registered.service_name.chars().count(), MAX_SERVICE_NAME_LEN);
    assert!(!registered.service_name.contains('/'));
    assert_eq!(registered.label, format!("metrics-endpoint://{path}"));
    assert_eq!(platform.commands()[0][1], registered.service_name);
}

#[test]
fn metrics_path_skips_route_lookup() {
    let platform = FakePlatform::new();

    RegistrationService::new(&platform)
        .register_metrics_endpoint("app-name", "/v2/metrics")
        .unwrap();

    assert_eq!(platform.app_lookups(), 0);
    assert_eq!(
        platform.commands()[0],
        strings(&[
            "create-user-provided-service",
            "metrics-endpoint-v2-metrics",
            "-l",
            "metrics-endpoint:///v2/metrics",
        ])
    );
}

#[test]
fn metrics_route_bound_to_app() {
    let platform = platform_with_app(vec![
        Route::new("app", "example.com", ""),
        Route::new("app", "apps.internal", ""),
    ]);

    RegistrationService::new(&platform)
        .register_metrics_endpoint("app-name", "app.apps.internal:8080/metrics")
        .unwrap();

    assert_eq!(
        platform.commands(),
        vec![
            strings(&[
                "create-user-provided-service",
                "metrics-endpoint-app.apps.internal:8080-metrics",
                "-l",
                "metrics-endpoint://app.apps.internal:8080/metrics",
            ]),
            strings(&[
                "bind-service",
                "app-name",
                "metrics-endpoint-app.apps.internal:8080-metrics",
            ]),
        ]
    );
}

#[test]
fn metrics_route_on_bare_domain() {
    let platform = platform_with_app(vec![Route::new("", "endpoint", "")]);

    RegistrationService::new(&platform)
        .register_metrics_endpoint("app-name", "endpoint")
        .unwrap();

    assert_eq!(
        platform.commands()[0],
        strings(&[
            "create-user-provided-service",
            "metrics-endpoint-endpoint",
            "-l",
            "metrics-endpoint://endpoint",
        ])
    );
}

#[test]
fn unbound_metrics_route_runs_no_commands() {
    let platform = platform_with_app(vec![Route::new("app", "example.com", "")]);

    let err = RegistrationService::new(&platform)
        .register_metrics_endpoint("app-name", "other.example.com/metrics")
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "route 'other.example.com/metrics' is not bound to app 'app-name'"
    );
    assert_eq!(platform.service_lookups(), 0);
    assert!(platform.commands().is_empty());
}

#[test]
fn malformed_metrics_route_is_a_parse_error() {
    let platform = platform_with_app(vec![Route::new("app", "example.com", "")]);

    let err = RegistrationService::new(&platform)
        .register_metrics_endpoint("app-name", "app.example.com:99999/metrics")
        .unwrap_err();

    assert!(matches!(err, RegistrarError::RouteParse(_)));
    assert_eq!(
        err.to_string(),
        "unable to parse requested route: invalid port '99999'"
    );
    assert_eq!(platform.app_lookups(), 0);
    assert!(platform.commands().is_empty());
}

#[test]
fn app_lookup_failure_runs_no_commands() {
    let mut platform = FakePlatform::new();
    platform.app_error = Some("app lookup failed".to_string());

    let err = RegistrationService::new(&platform)
        .register_metrics_endpoint("app-name", "app.example.com/metrics")
        .unwrap_err();

    assert!(matches!(err, RegistrarError::Query(_)));
    assert!(platform.commands().is_empty());
}

#[test]
fn metrics_route_with_stray_whitespace_registers_trimmed_name() {
    let platform = platform_with_app(vec![Route::new("app", "example.com", "")]);

    let registered = RegistrationService::new(&platform)
        .register_metrics_endpoint("app-name", " app.example.com/metrics")
        .unwrap();

    assert_eq!(registered.service_name, "metrics-endpoint-app.example.com-metrics");
    assert_eq!(registered.label, "metrics-endpoint://app.example.com/metrics");
    assert!(platform.commands().iter().flatten().all(|arg| !arg.contains(' ')));
}
