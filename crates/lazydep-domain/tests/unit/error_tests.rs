//! Unit tests for domain error types

use std::error::Error as _;

use lazydep_domain::Error;
use lazydep_domain::Visibility;

#[derive(Debug)]
struct ProviderDown;

impl std::fmt::Display for ProviderDown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("provider down")
    }
}

impl std::error::Error for ProviderDown {}

#[test]
fn test_invalid_configuration_error() {
    let error = Error::invalid_configuration("bad level");
    match error {
        Error::InvalidConfiguration { message, source } => {
            assert_eq!(message, "bad level");
            assert!(source.is_none());
        }
        _ => panic!("Expected InvalidConfiguration error"),
    }
}

#[test]
fn test_invalid_configuration_with_source() {
    let error = Error::invalid_configuration_with_source("config file", ProviderDown);
    assert!(error.source().is_some());
    assert_eq!(error.to_string(), "Invalid configuration: config file");
}

#[test]
fn test_resolution_error_is_transparent() {
    let error = Error::resolution(ProviderDown);
    assert_eq!(error.to_string(), "provider down");
    assert!(error.resolution_source::<ProviderDown>().is_some());
}

#[test]
fn test_resolution_source_on_other_variants() {
    let error = Error::unknown_class(3);
    assert!(error.resolution_source::<ProviderDown>().is_none());
}

#[test]
fn test_resolution_message() {
    let error = Error::resolution_message("container miss");
    assert_eq!(error.to_string(), "container miss");
}

#[test]
fn test_unknown_dependency_error() {
    let error = Error::unknown_dependency("Service", "mailer");
    match &error {
        Error::UnknownDependency { class, name } => {
            assert_eq!(class, "Service");
            assert_eq!(name, "mailer");
        }
        _ => panic!("Expected UnknownDependency error"),
    }
    assert!(error.to_string().contains("mailer"));
}

#[test]
fn test_access_denied_display() {
    let error = Error::AccessDenied {
        class: "Service".to_string(),
        name: "mailer".to_string(),
        visibility: Visibility::Private,
    };
    assert_eq!(
        error.to_string(),
        "private dependency `mailer` called for an instance of Service"
    );
}

#[test]
fn test_unexpected_arguments_display() {
    let error = Error::UnexpectedArguments {
        class: "Service".to_string(),
        names: vec!["a".to_string(), "b".to_string()],
    };
    assert_eq!(error.to_string(), "Unknown keywords for Service: a, b");
}

#[test]
fn test_io_error_from_std() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: Error = io.into();
    match error {
        Error::Io { message, source } => {
            assert_eq!(message, "missing");
            assert!(source.is_some());
        }
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_io_error_without_source() {
    let error = Error::io("Config directory not writable");
    assert_eq!(error.to_string(), "I/O error: Config directory not writable");
    assert!(error.source().is_none());
}

#[test]
fn test_io_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = Error::io_with_source("Failed to save config", io);
    assert_eq!(error.to_string(), "I/O error: Failed to save config");
    let source = error.source().expect("io source");
    assert_eq!(source.to_string(), "denied");
}
