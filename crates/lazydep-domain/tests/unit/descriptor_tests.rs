//! Unit tests for descriptors and providers

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lazydep_domain::value_objects::downcast_value;
use lazydep_domain::{Descriptor, Error, Provider, Value};

#[test]
fn test_literal_descriptor() {
    let descriptor = Descriptor::value(42_u64);
    assert!(!descriptor.is_provider());
    assert_eq!(descriptor.literal::<u64>(), Some(&42));
    assert_eq!(descriptor.literal::<u32>(), None);
}

#[test]
fn test_provider_descriptor_is_not_invoked_on_creation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let descriptor = Descriptor::provider(move || counter.fetch_add(1, Ordering::SeqCst));

    assert!(descriptor.is_provider());
    assert!(descriptor.literal::<usize>().is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_provider_call() {
    let provider = Provider::new(|| "FOO".to_string());
    let value = provider.call().unwrap();
    assert_eq!(value.downcast_ref::<String>().unwrap(), "FOO");
}

#[test]
fn test_fallible_provider_error() {
    let provider = Provider::fallible(|| Err::<u8, _>("boom"));
    let err = provider.call().unwrap_err();
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn test_clone_shares_provider() {
    let provider = Provider::new(|| 1_u8);
    let clone = provider.clone();
    assert!(provider.ptr_eq(&clone));
    assert!(!provider.ptr_eq(&Provider::new(|| 1_u8)));
}

#[test]
fn test_shared_descriptor_keeps_allocation() {
    let value: Value = Arc::new(7_i32);
    let descriptor = Descriptor::shared(value.clone());
    match descriptor {
        Descriptor::Value(inner) => assert!(Arc::ptr_eq(&inner, &value)),
        Descriptor::Provider(_) => panic!("Expected literal descriptor"),
    }
}

#[test]
fn test_downcast_value_mismatch() {
    let value: Value = Arc::new(7_i32);
    let err = downcast_value::<String>("port", value).unwrap_err();
    match err {
        Error::TypeMismatch { name, expected } => {
            assert_eq!(name, "port");
            assert!(expected.contains("String"));
        }
        _ => panic!("Expected TypeMismatch error"),
    }
}

#[test]
fn test_provider_from_type_erased_closure() {
    let shared: Value = Arc::new(7_u16);
    let handle = Arc::clone(&shared);
    let descriptor = Descriptor::from(Provider::from_fn(move || Ok(Arc::clone(&handle))));

    let value = match &descriptor {
        Descriptor::Provider(provider) => provider.call().unwrap(),
        Descriptor::Value(_) => panic!("Expected provider descriptor"),
    };
    assert!(Arc::ptr_eq(&value, &shared));
}
