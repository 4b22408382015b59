use registrar_common::error::RegistrarError;
use registrar_core::register::{RegistrationService, Removal};
use registrar_core::testing::FakePlatform;

fn platform_with_service(name: &str, bound_apps: &[&str]) -> FakePlatform {
    let mut platform = FakePlatform::new();
    platform.bind(name, bound_apps);
    platform
}

#[test]
fn service_bound_only_to_app_is_removed() {
    let platform = platform_with_service("metrics-endpoint-metrics", &["app-name"]);

    let removal = RegistrationService::new(&platform)
        .unregister_metrics_endpoint("app-name", "/metrics")
        .unwrap();

    assert!(matches!(removal, Removal::Removed { .. }));
    assert_eq!(
        platform.command_names(),
        vec!["unbind-service", "delete-service"]
    );
}

#[test]
fn shared_service_is_only_unbound() {
    let platform = platform_with_service("structured-format-json", &["app-name", "other-app"]);

    let removal = RegistrationService::new(&platform)
        .unregister_log_format("app-name", "json")
        .unwrap();

    assert_eq!(
        removal,
        Removal::Unbound {
            service_name: "structured-format-json".to_string(),
            remaining: vec!["other-app".to_string()],
        }
    );
    assert_eq!(platform.command_names(), vec!["unbind-service"]);
}

#[test]
fn service_not_bound_to_app_is_still_deleted_when_unused() {
    let platform = platform_with_service("structured-format-json", &[]);

    RegistrationService::new(&platform)
        .unregister_log_format("app-name", "json")
        .unwrap();

    assert_eq!(
        platform.commands(),
        vec![vec![
            "delete-service".to_string(),
            "structured-format-json".to_string(),
            "-f".to_string(),
        ]]
    );
}

#[test]
fn unknown_service_runs_nothing() {
    let platform = platform_with_service("structured-format-json", &[]);

    let removal = RegistrationService::new(&platform)
        .unregister_log_format("app-name", "logfmt")
        .unwrap();

    assert!(matches!(removal, Removal::NotRegistered { .. }));
    assert!(platform.commands().is_empty());
}

#[test]
fn removal_skips_route_validation() {
    let platform = platform_with_service("metrics-endpoint-app.example.com-metrics", &["app-name"]);

    RegistrationService::new(&platform)
        .unregister_metrics_endpoint("app-name", "app.example.com/metrics")
        .unwrap();

    assert_eq!(platform.app_lookups(), 0);
    assert_eq!(platform.commands().len(), 2);
}

#[test]
fn unbind_failure_keeps_service() {
    let mut platform = platform_with_service("structured-format-json", &["app-name"]);
    platform.error_command = Some("unbind-service".to_string());

    let err = RegistrationService::new(&platform)
        .unregister_log_format("app-name", "json")
        .unwrap_err();

    assert!(matches!(err, RegistrarError::Command(_)));
    assert_eq!(platform.command_names(), vec!["unbind-service"]);
}

#[test]
fn service_query_failure_is_surfaced() {
    let mut platform = FakePlatform::new();
    platform.services_error = Some("error".to_string());

    let err = RegistrationService::new(&platform)
        .unregister_log_format("app-name", "json")
        .unwrap_err();

    assert_eq!(err.to_string(), "error");
    assert!(platform.commands().is_empty());
}

#[test]
fn app_not_bound_to_shared_service_runs_nothing() {
    let platform = platform_with_service("structured-format-json", &["other-app"]);

    let removal = RegistrationService::new(&platform)
        .unregister_log_format("app-name", "json")
        .unwrap();

    assert_eq!(
        removal,
        Removal::NotBound {
            service_name: "structured-format-json".to_string(),
            remaining: vec!["other-app".to_string()],
        }
    );
    assert!(platform.commands().is_empty());
}

#[test]
fn metrics_removal_trims_input() {
    let platform = platform_with_service("metrics-endpoint-metrics", &["app-name"]);

    let removal = RegistrationService::new(&platform)
        .unregister_metrics_endpoint("app-name", "  /metrics ")
        .unwrap();

    assert!(matches!(removal, Removal::Removed { .. }));
    assert_eq!(platform.binding_lookups(), 1);
}
