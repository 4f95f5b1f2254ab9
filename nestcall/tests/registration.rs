//! Registration tests.

use nestcall::{Dispatcher, DispatcherConfig, RegisterOptions, RegistrationError};

mod common;
use common::{Fixture, ids_at};

#[test]
fn test_custom_keys() {
    let app = Dispatcher::with_config(
        DispatcherConfig::new().global_key("**").entry_key("__custom"),
    )
    .unwrap();

    assert_eq!(app.global_key(), "**");
    assert_eq!(app.entry_key(), "__custom");
}

#[test]
fn test_default_keys() {
    let app = Dispatcher::new();
    assert_eq!(app.global_key(), nestcall::DEFAULT_GLOBAL_KEY);
    assert_eq!(app.entry_key(), nestcall::DEFAULT_ENTRY_KEY);
}

#[test]
fn test_invalid_config_rejected() {
    let err = Dispatcher::with_config(DispatcherConfig::new().global_key("same").entry_key("same"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "the global key and the entry key must differ (both are `same`)"
    );
}

#[test]
fn test_register_action() {
    let mut f = Fixture::new();
    let id = f.app.register_action("foo", f.one.clone()).unwrap();

    assert_eq!(ids_at(&f.app, "foo"), vec![id]);
}

#[test]
fn test_register_global_action() {
    let mut f = Fixture::new();
    let id = f.app.register_global_action(f.one.clone()).unwrap();

    assert!(f.app.registry().global_node().unwrap().contains(id));
    assert_eq!(ids_at(&f.app, f.app.global_key()), vec![id]);
}

#[test]
fn test_register_nested_action() {
    let mut f = Fixture::new();
    let id = f.app.register_action("foo.bar", f.one.clone()).unwrap();

    let foo = f.app.registry().node("foo").unwrap();
    assert!(!foo.contains(id));
    assert!(foo.child("bar").unwrap().contains(id));
}

#[test]
fn test_register_with_priority() {
    let mut f = Fixture::new();
    let one = f
        .app
        .register_global_action_with(f.one.clone(), RegisterOptions::new().with_priority(99))
        .unwrap();
    let two = f
        .app
        .register_global_action_with(f.two.clone(), RegisterOptions::new().with_priority(100))
        .unwrap();

    let global = f.app.registry().global_node().unwrap();
    let bucket: Vec<_> = global.bucket(99).iter().map(|r| r.id()).collect();
    assert_eq!(bucket, vec![one]);
    assert!(!bucket.contains(&two));
}

#[test]
fn test_reset() {
    let mut f = Fixture::new();
    let id = f.app.register_global_action(f.one.clone()).unwrap();
    assert!(f.app.registry().global_node().unwrap().contains(id));

    f.app.reset();
    assert!(f.app.registry().is_empty());

    f.app.run(()).unwrap();
    f.app.run(f.app.global_key().to_string()).unwrap();
    assert_eq!(f.one.call_count(), 0);
}

#[test]
fn test_reserved_key_rejected() {
    let mut f = Fixture::new();
    let existing = f.app.register_action("foo", f.one.clone()).unwrap();

    let entry = f.app.entry_key().to_string();
    let err = f.app.register_action(&entry, f.two.clone()).unwrap_err();
    assert_eq!(
        err,
        RegistrationError::ReservedKey {
            path: "__entry".to_string(),
            key: "__entry".to_string(),
        }
    );

    // Registry unchanged
    assert_eq!(f.app.registry().len(), 1);
    assert_eq!(ids_at(&f.app, "foo"), vec![existing]);
}

#[test]
fn test_empty_segment_rejected() {
    let mut f = Fixture::new();
    for bad in ["", "foo.", "foo..bar"] {
        let err = f.app.register_action(bad, f.one.clone()).unwrap_err();
        assert!(matches!(err, RegistrationError::EmptySegment { .. }), "{bad:?}");
    }
    assert!(f.app.registry().is_empty());
}

#[test]
fn test_registration_error_converts_to_top_level() {
    fn register(app: &mut Dispatcher) -> Result<(), nestcall::NestcallError> {
        app.register_action("a..b", || {})?;
        Ok(())
    }

    let mut app = Dispatcher::new();
    let err = register(&mut app).unwrap_err();
    assert!(matches!(err, nestcall::NestcallError::Registration(_)));
}
