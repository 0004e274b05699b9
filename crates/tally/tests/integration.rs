//! End-to-end instrumentation tests.

use tally::{Config, Error, MethodKind, Session, TargetError};

#[test]
fn counts_instance_target_invocations() {
    let session = Session::new(Config::from_target_str("NinetyNine#luftballoons").unwrap());
    let luftballoons =
        session.instrument("NinetyNine#luftballoons", |(): ()| "Auf ihrem weg zum horizont");
    assert_eq!(session.count(), 0);
    assert_eq!(luftballoons.call(()), "Auf ihrem weg zum horizont");
    assert_eq!(session.count(), 1);
}

#[test]
fn delegates_all_arguments_unmodified() {
    let session = Session::new(Config::from_target_str("NinetyNine.luftballoons").unwrap());
    let luftballoons = session.instrument(
        "NinetyNine.luftballoons",
        |(n, color): (u32, &str)| format!("{n} {color} balloons"),
    );
    assert_eq!(luftballoons.call((99, "red")), "99 red balloons");
    assert_eq!(session.count(), 1);
}

#[test]
fn report_line_matches_shutdown_contract() {
    let session = Session::new(Config::from_target_str("Foo::Bar#baz").unwrap());
    let baz = session.instrument("Foo::Bar#baz", |(): ()| ());
    for _ in 0..3 {
        baz.call(());
    }
    assert_eq!(session.report_line().to_string(), "Foo::Bar#baz called 3 times");
}

#[test]
fn non_target_registrations_do_not_count_into_the_report() {
    let session = Session::new(Config::from_target_str("Borg#assimilate").unwrap());
    let resist = session.instrument("Borg#resist", |(): ()| ());
    resist.call(());
    assert_eq!(session.count(), 0);
    assert_eq!(resist.counter().count(), 1);
}

#[test]
fn original_callable_stays_reachable() {
    let session = Session::new(Config::from_target_str("Borg#assimilate").unwrap());
    let assimilate = session.instrument("Borg#assimilate", |n: u64| n + 1);
    assert_eq!(assimilate.call(1), 2);
    let original = assimilate.into_inner();
    assert_eq!(original(41), 42);
    // Unwrapped calls are no longer counted.
    assert_eq!(session.count(), 1);
}

#[test]
fn invalid_configuration_fails_before_instrumentation() {
    let err = Config::from_target_str("ninetyNine#luftballoons").unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidTarget(TargetError::LowercaseStart)
    ));
    assert!(
        err.to_string()
            .starts_with("Must supply target in the form 'Class#method' or 'Class.method'")
    );
}

#[test]
fn parsed_target_is_exposed() {
    let session = Session::new(Config::from_target_str("Ninety::Nine.luftballoons").unwrap());
    let target = session.target();
    assert_eq!(target.module_names(), ["Ninety"]);
    assert_eq!(target.type_name(), "Nine");
    assert_eq!(target.method_name(), "luftballoons");
    assert_eq!(target.kind(), MethodKind::Static);
}
