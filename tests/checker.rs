//! End-to-end checks against a mock HTTP endpoint.
//!
//! Tests for:
//! - Role display for every seat number when the check allows it
//! - All three accepted "false" encodings landing in the denied panel
//! - Boolean extraction from a JSON object
//! - Indeterminate and transport failures
//! - The disabled-while-checking guard and the retry flow
//! - Clear semantics and the checked-at timestamp

use std::time::Duration;

use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use roleboard_tui::action::Action;
use roleboard_tui::app::{App, CheckFailure, CheckState};
use roleboard_tui::config::Config;

/// The app and checker own their own runtime, so tests stay
/// synchronous; this runtime only hosts the mock server.
fn server_runtime() -> Runtime {
    Runtime::new().expect("runtime")
}

fn app_for(endpoint: &str) -> App {
    let config = Config {
        endpoint: endpoint.to_string(),
        ..Config::default()
    };
    App::new(config).expect("app")
}

fn resolve(app: &mut App) {
    for _ in 0..500 {
        app.poll_check();
        if !app.is_checking() {
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("check did not resolve");
}

fn show(app: &mut App, input: &str) {
    app.input = input.to_string();
    app.dispatch(Action::Show);
    resolve(app);
}

#[test]
fn allowed_shows_the_mapped_role_for_every_number() {
    let rt = server_runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("true"))
            .expect(6)
            .mount(&server),
    );

    let mut app = app_for(&server.uri());
    for n in 1..=6u8 {
        show(&mut app, &n.to_string());
        match app.state {
            CheckState::Allowed(entry) => {
                assert_eq!(entry.number, n);
                assert_eq!(entry.title, roleboard_tui::roles::lookup(n).unwrap().title);
            }
            ref other => panic!("expected role card for {}, got {:?}", n, other),
        }
        assert!(app.last_checked.is_some());
    }
}

#[test]
fn denied_in_every_accepted_encoding() {
    for body in ["false", r#"{"status":"ok","enabled":false}"#, "False\n"] {
        let rt = server_runtime();
        let server = rt.block_on(MockServer::start());
        rt.block_on(
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(200).set_body_string(body))
                .expect(1)
                .mount(&server),
        );

        let mut app = app_for(&server.uri());
        show(&mut app, "2");
        assert_eq!(app.state, CheckState::Denied, "body {:?}", body);
    }
}

#[test]
fn boolean_is_extracted_from_a_json_object() {
    let rt = server_runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"status":"ok","enabled":true}"#),
            )
            .mount(&server),
    );

    let mut app = app_for(&server.uri());
    show(&mut app, "4");
    assert!(matches!(app.state, CheckState::Allowed(entry) if entry.number == 4));
}

#[test]
fn mixed_case_plain_text_is_normalized() {
    let rt = server_runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("True\n"))
            .mount(&server),
    );

    let mut app = app_for(&server.uri());
    show(&mut app, "1");
    assert!(matches!(app.state, CheckState::Allowed(entry) if entry.number == 1));
}

#[test]
fn object_without_boolean_is_indeterminate() {
    let rt = server_runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"foo":"bar"}"#))
            .mount(&server),
    );

    let mut app = app_for(&server.uri());
    show(&mut app, "3");
    assert_eq!(app.state, CheckState::Failed(CheckFailure::Indeterminate));
    assert!(app.last_checked.is_some());
}

#[test]
fn transport_failure_embeds_the_underlying_error() {
    // Nothing listens here; the connection is refused.
    let mut app = app_for("http://127.0.0.1:9/");
    show(&mut app, "5");
    match &app.state {
        CheckState::Failed(CheckFailure::Transport(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected transport failure, got {:?}", other),
    }
}

#[test]
fn validation_failure_makes_no_request() {
    let rt = server_runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("true"))
            .expect(0)
            .mount(&server),
    );

    let mut app = app_for(&server.uri());
    app.input = "9".to_string();
    app.dispatch(Action::Show);
    assert!(matches!(
        app.state,
        CheckState::Failed(CheckFailure::Validation(_))
    ));

    // Give a stray request time to land before the mock verifies.
    std::thread::sleep(Duration::from_millis(100));
    rt.block_on(server.verify());
}

#[test]
fn show_is_disabled_while_a_check_is_outstanding() {
    let rt = server_runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("true")
                    .set_delay(Duration::from_millis(300)),
            )
            .expect(2)
            .mount(&server),
    );

    let mut app = app_for(&server.uri());
    app.input = "2".to_string();
    app.dispatch(Action::Show);
    assert!(app.is_checking());

    // Second trigger while in flight: no-op, no second request.
    app.dispatch(Action::Show);
    assert!(app.is_checking());
    resolve(&mut app);
    assert!(matches!(app.state, CheckState::Allowed(_)));

    // After completion the trigger works again.
    app.dispatch(Action::Show);
    resolve(&mut app);
    assert!(matches!(app.state, CheckState::Allowed(_)));
}

#[test]
fn retry_reruns_the_check_with_the_current_number() {
    let rt = server_runtime();
    let server = rt.block_on(MockServer::start());
    // First response denies, every later one allows.
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("false"))
            .up_to_n_times(1)
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("true"))
            .mount(&server),
    );

    let mut app = app_for(&server.uri());
    show(&mut app, "6");
    assert_eq!(app.state, CheckState::Denied);

    app.dispatch(Action::Retry);
    resolve(&mut app);
    assert!(matches!(app.state, CheckState::Allowed(entry) if entry.number == 6));
}

#[test]
fn clear_resets_after_any_outcome() {
    let rt = server_runtime();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("false"))
            .mount(&server),
    );

    let mut app = app_for(&server.uri());
    show(&mut app, "3");
    assert_eq!(app.state, CheckState::Denied);

    app.dispatch(Action::Clear);
    assert_eq!(app.state, CheckState::Idle);
    assert!(app.input.is_empty());
    assert!(app.last_checked.is_none());
}
