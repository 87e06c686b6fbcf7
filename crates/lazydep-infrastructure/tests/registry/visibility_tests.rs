//! Tests for the global visibility registry

use lazydep_domain::{Descriptor, Error, Visibility};
use lazydep_infrastructure::di::{Arguments, CallSite, Catalog, dependencies};
use lazydep_infrastructure::registry;
use serial_test::serial;

use super::RegistryGuard;

#[test]
#[serial]
fn test_default_visibility_is_private() {
    let _guard = RegistryGuard::new();
    assert_eq!(registry::visibility(), Visibility::Private);

    let catalog = Catalog::new();
    let class = catalog.define_anonymous_class();
    catalog.declare(class, [("foo", Descriptor::value("foo"))]).unwrap();
    assert_eq!(
        catalog.accessor_visibility(class, "foo").unwrap(),
        Some(Visibility::Private)
    );
}

#[test]
#[serial]
fn test_set_each_level() {
    let _guard = RegistryGuard::new();
    for level in Visibility::ALL {
        assert_eq!(registry::set_visibility(level), level);
        assert_eq!(registry::visibility(), level);

        let catalog = Catalog::new();
        let class = catalog.define_anonymous_class();
        catalog.declare(class, [("foo", Descriptor::value("foo"))]).unwrap();
        assert_eq!(catalog.accessor_visibility(class, "foo").unwrap(), Some(level));
    }
}

#[test]
#[serial]
fn test_public_accessor_callable_from_outside() {
    let _guard = RegistryGuard::new();
    registry::set_visibility(Visibility::Public);

    let catalog = Catalog::new();
    let class = catalog.define_anonymous_class();
    catalog
        .declare(class, [("foo", Descriptor::provider(|| "FOO".to_string()))])
        .unwrap();
    let obj = catalog.instantiate(class, Arguments::new()).unwrap();

    let value = obj.call("foo", CallSite::External).unwrap();
    assert_eq!(value.downcast_ref::<String>().unwrap(), "FOO");
}

#[test]
#[serial]
fn test_invalid_level_is_rejected_without_change() {
    let _guard = RegistryGuard::new();
    registry::set_visibility(Visibility::Protected);

    match registry::try_set_visibility("foo") {
        Err(Error::InvalidConfiguration { message, .. }) => {
            assert_eq!(message, "visibility must be private, public, or protected");
        }
        result => panic!("Expected InvalidConfiguration error, got {result:?}"),
    }
    assert_eq!(registry::visibility(), Visibility::Protected);

    assert_eq!(registry::try_set_visibility("public").unwrap(), Visibility::Public);
    assert_eq!(registry::visibility(), Visibility::Public);
}

#[test]
#[serial]
fn test_visibility_captured_at_declaration() {
    let _guard = RegistryGuard::new();
    let catalog = Catalog::new();
    let class = catalog.define_anonymous_class();

    registry::set_visibility(Visibility::Public);
    let unit = dependencies([("foo", Descriptor::value(1_u8))]);
    registry::set_visibility(Visibility::Private);
    unit.apply(&catalog, class).unwrap();
    catalog.declare(class, [("bar", Descriptor::value(2_u8))]).unwrap();

    registry::set_visibility(Visibility::Protected);
    let obj = catalog.instantiate(class, Arguments::new()).unwrap();
    assert!(obj.call("foo", CallSite::External).is_ok());
    assert!(obj.call("bar", CallSite::External).is_err());
    assert_eq!(
        catalog.accessor_visibility(class, "bar").unwrap(),
        Some(Visibility::Private)
    );
}
