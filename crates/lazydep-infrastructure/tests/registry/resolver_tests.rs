//! Tests for the global resolver registry

use std::collections::HashMap;
use std::sync::Arc;

use lazydep_domain::{DefaultResolver, DependencyResolver, Descriptor, Error, Result, Value};
use lazydep_infrastructure::di::{Arguments, Catalog};
use lazydep_infrastructure::registry;
use serial_test::serial;

use super::RegistryGuard;

#[test]
#[serial]
fn test_default_resolver_when_unset() {
    let _guard = RegistryGuard::new();
    let first = registry::resolver();
    let second = registry::resolver();
    assert!(Arc::ptr_eq(&first, &second));

    let value = registry::resolve(&Descriptor::provider(|| 42_i32)).unwrap();
    assert_eq!(value.downcast_ref::<i32>(), Some(&42));

    let literal: Value = Arc::new(42_i32);
    let value = registry::resolve(&Descriptor::shared(Arc::clone(&literal))).unwrap();
    assert!(Arc::ptr_eq(&value, &literal));
}

#[test]
#[serial]
fn test_set_and_get_custom_resolver() {
    let _guard = RegistryGuard::new();
    let doubling = |descriptor: &Descriptor| -> Result<Value> {
        let n = descriptor.literal::<i32>().copied().unwrap_or_default();
        Ok(Arc::new(n * 2))
    };

    let installed = registry::set_resolver(doubling);
    assert!(Arc::ptr_eq(&installed, &registry::resolver()));

    let value = registry::resolve(&Descriptor::value(21_i32)).unwrap();
    assert_eq!(value.downcast_ref::<i32>(), Some(&42));
}

#[test]
#[serial]
fn test_reset_restores_default() {
    let _guard = RegistryGuard::new();
    let default = registry::resolver();
    registry::set_resolver(DefaultResolver);
    assert!(!Arc::ptr_eq(&default, &registry::resolver()));

    registry::reset_resolver();
    assert!(Arc::ptr_eq(&default, &registry::resolver()));
}

#[test]
#[serial]
fn test_accessors_use_container_resolver() {
    let _guard = RegistryGuard::new();
    let container: HashMap<String, Value> =
        HashMap::from([("utils.mailer".to_string(), Arc::new("smtp") as Value)]);
    registry::set_resolver(move |descriptor: &Descriptor| -> Result<Value> {
        match descriptor.literal::<String>() {
            Some(key) => container
                .get(key)
                .cloned()
                .ok_or_else(|| Error::resolution_message(format!("nothing registered as {key}"))),
            None => DefaultResolver.resolve(descriptor),
        }
    });

    let catalog = Catalog::new();
    let class = catalog.define_class("Notifier");
    catalog
        .declare(
            class,
            [
                ("mailer", Descriptor::value("utils.mailer".to_string())),
                ("queue", Descriptor::value("utils.queue".to_string())),
                ("retries", Descriptor::provider(|| 3_u8)),
            ],
        )
        .unwrap();

    let obj = catalog.instantiate(class, Arguments::new()).unwrap();
    assert_eq!(*obj.get::<&str>("mailer").unwrap(), "smtp");
    assert_eq!(*obj.get::<u8>("retries").unwrap(), 3);

    let err = obj.dependency("queue").unwrap_err();
    assert_eq!(err.to_string(), "nothing registered as utils.queue");
    assert!(!obj.is_resolved("queue"));
}

#[test]
#[serial]
fn test_resolver_is_consulted_at_access_time() {
    let _guard = RegistryGuard::new();
    let catalog = Catalog::new();
    let class = catalog.define_anonymous_class();
    catalog.declare(class, [("n", Descriptor::value(1_i32))]).unwrap();
    let obj = catalog.instantiate(class, Arguments::new()).unwrap();

    registry::set_resolver(|_: &Descriptor| -> Result<Value> { Ok(Arc::new(7_i32)) });
    assert_eq!(*obj.get::<i32>("n").unwrap(), 7);

    // Memoized value survives a later resolver change
    registry::reset_resolver();
    assert_eq!(*obj.get::<i32>("n").unwrap(), 7);
}
