#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only assertions use unwrap/expect for clarity."
)]

//! End-to-end waits through the public facade.

mod common;

use std::time::Duration;

use common::Presence;
use common::real_time_waiter;
use locator_wait::DriverError;
use locator_wait::LocatorQuery;
use locator_wait::LocatorStrategy;
use locator_wait::WaitError;
use locator_wait::resolve_options;
use locator_wait_usecases::ports::test_support::MockDriver;

const SHORT: Duration = Duration::from_millis(100);

#[test]
fn keyword_options_drive_the_lookup() {
    let predicate = "type == \"XCUIElementTypeButton\" AND name contains \"Sub\"";
    let driver = MockDriver::builder()
        .with_presence(predicate, Presence::visible())
        .build();
    let waits = real_time_waiter(driver, SHORT);

    let query = LocatorQuery::from_options([
        ("type", "XCUIElementTypeButton"),
        ("name_contains", "Sub"),
    ]);
    assert_eq!(query.strategy(), LocatorStrategy::PredicateExpression);

    let element = waits.get_element_with_timeout(&query).unwrap();
    assert_eq!(element.locator_value, predicate);
}

#[test]
fn visibility_is_false_where_element_lookup_fails() {
    let waits = real_time_waiter(MockDriver::new(), SHORT);
    let query = LocatorQuery::accessibility_id("Nowhere");

    assert!(!waits.element_is_visible(&query).unwrap());
    assert!(waits.element_is_not_visible(&query).unwrap());

    let err = waits.get_element_with_timeout(&query).unwrap_err();
    assert!(matches!(err, WaitError::NotFound { .. }));
    assert!(err.to_string().contains("accessibility id=Nowhere"));

    let err = waits.get_elements_with_timeout(&query).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn get_elements_returns_every_match() {
    let driver = MockDriver::builder()
        .with_presence("//cell", Presence::hidden())
        .with_matches("//cell", 5)
        .build();
    let waits = real_time_waiter(driver, SHORT);

    let cells = waits
        .get_elements_with_timeout(&LocatorQuery::xpath("//cell"))
        .unwrap();
    assert_eq!(cells.len(), 5);
}

#[test]
fn broken_session_escapes_boolean_waits() {
    let driver = MockDriver::builder()
        .with_presence(
            "x",
            Presence::Fails(DriverError::Session("invalid session id".into())),
        )
        .build();
    let waits = real_time_waiter(driver, SHORT);

    let result = waits.element_is_visible(&LocatorQuery::id("x"));
    assert!(matches!(result, Err(WaitError::Driver(_))));
}

#[test]
fn precedence_matches_the_keyword_form() {
    let descriptor = resolve_options([("by_xpath", "b"), ("by_id", "a")]);
    assert_eq!(descriptor.strategy(), LocatorStrategy::Id);
    assert_eq!(descriptor.value(), "a");
}
