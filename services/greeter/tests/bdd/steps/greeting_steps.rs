//! BDD step definitions for the greeting feature

use std::sync::Arc;

use cucumber::{given, then, when};
use tokio_util::sync::CancellationToken;

use greeter::config::Config;
use greeter::io::ReqwestHttpClient;
use greeter::outcome::{
    Outcome, AUTH_FAILURE_MESSAGE, CONNECTIVITY_MESSAGE, NOT_FOUND_MESSAGE, SERVER_ERROR_MESSAGE,
    UNAVAILABLE_MESSAGE, UNEXPECTED_MESSAGE,
};
use greeter::view::DisplayState;
use greeter::Greeter;

use crate::stub_backend::{StubBackend, StubReply};
use crate::world::GreeterWorld;

/// Environment variable no test environment sets
const UNSET_KEY_VAR: &str = "GREETER_BDD_UNSET_API_KEY";

pub fn test_config(world: &GreeterWorld) -> Config {
    let mut config = Config::default();
    config.request.endpoint = world.endpoint.clone().expect("endpoint not set");
    config.request.api_key = world.api_key.clone();
    config.request.api_key_env = UNSET_KEY_VAR.to_string();
    config.request.timeout_seconds = 5;
    config
}

fn named_message(name: &str) -> &'static str {
    match name {
        "connectivity" => CONNECTIVITY_MESSAGE,
        "authentication" => AUTH_FAILURE_MESSAGE,
        "not-found" => NOT_FOUND_MESSAGE,
        "server-error" => SERVER_ERROR_MESSAGE,
        "unavailable" => UNAVAILABLE_MESSAGE,
        "unexpected" => UNEXPECTED_MESSAGE,
        other => panic!("Unknown message name: {}", other),
    }
}

#[given(expr = "a backend that greets with {string} for key {string}")]
async fn backend_greets(world: &mut GreeterWorld, message: String, key: String) {
    let backend = StubBackend::start(StubReply::Greeting { key, message }).await;
    world.endpoint = Some(backend.url("/api/hello"));
    world.backend = Some(backend);
}

#[given(expr = "a backend that answers {string} with status {int}")]
async fn backend_answers(world: &mut GreeterWorld, body: String, status: u16) {
    let backend = StubBackend::start(StubReply::Fixed { status, body }).await;
    world.endpoint = Some(backend.url("/api/hello"));
    world.backend = Some(backend);
}

#[given(expr = "a backend that answers with status {int}")]
async fn backend_answers_status(world: &mut GreeterWorld, status: u16) {
    let backend = StubBackend::start(StubReply::Fixed {
        status,
        body: String::new(),
    })
    .await;
    world.endpoint = Some(backend.url("/api/hello"));
    world.backend = Some(backend);
}

#[given("a backend that only serves another path")]
async fn backend_other_path(world: &mut GreeterWorld) {
    let backend = StubBackend::start(StubReply::Fixed {
        status: 200,
        body: r#"{"message":"hi"}"#.to_string(),
    })
    .await;
    world.endpoint = Some(backend.url("/api/goodbye"));
    world.backend = Some(backend);
}

#[given("no backend is listening")]
fn no_backend(world: &mut GreeterWorld) {
    // Port 1 is reserved and unbound
    world.endpoint = Some("http://127.0.0.1:1/api/hello".to_string());
}

#[given(expr = "the API key {string}")]
fn api_key(world: &mut GreeterWorld, key: String) {
    world.api_key = Some(key);
}

#[given("no API key is configured")]
fn no_api_key(world: &mut GreeterWorld) {
    world.api_key = None;
}

#[when("the greeting is fetched")]
async fn fetch_greeting(world: &mut GreeterWorld) {
    let greeter = Greeter::new(&test_config(world), Arc::new(ReqwestHttpClient::new()));
    let outcome = greeter
        .fetch_once(&CancellationToken::new())
        .await
        .expect("fetch was not cancelled");

    let state = greeter.state();
    let display = DisplayState::from(state.read().await.outcome());
    world.outcome = Some(outcome);
    world.display = Some(display);
}

#[then(expr = "the display text should be {string}")]
fn display_text_is(world: &mut GreeterWorld, expected: String) {
    let display = world.display.as_ref().expect("no display state");
    assert_eq!(display.text, expected);
}

#[then(expr = "the display text should be the {word} message")]
fn display_text_is_named(world: &mut GreeterWorld, name: String) {
    let display = world.display.as_ref().expect("no display state");
    assert_eq!(display.text, named_message(&name));
}

#[then("the greeting should be an error")]
fn is_error(world: &mut GreeterWorld) {
    let display = world.display.as_ref().expect("no display state");
    assert!(display.error);
    assert!(!display.loading);
}

#[then("the greeting should not be an error")]
fn is_not_error(world: &mut GreeterWorld) {
    let display = world.display.as_ref().expect("no display state");
    assert!(!display.error);
    assert!(!display.loading);
}

#[then(expr = "the backend should have received {int} request(s)")]
fn backend_received(world: &mut GreeterWorld, count: usize) {
    let backend = world.backend.as_ref().expect("backend not set");
    assert_eq!(backend.requests().len(), count);
}

#[then(expr = "the request should carry the API key {string}")]
fn request_carried_key(world: &mut GreeterWorld, key: String) {
    let backend = world.backend.as_ref().expect("backend not set");
    let requests = backend.requests();
    let last = requests.last().expect("no request received");
    assert_eq!(last.api_key.as_deref(), Some(key.as_str()));
}

#[then("the request should disable caching and send no cookies")]
fn request_policy(world: &mut GreeterWorld) {
    let backend = world.backend.as_ref().expect("backend not set");
    let requests = backend.requests();
    let last = requests.last().expect("no request received");
    assert_eq!(last.cache_control.as_deref(), Some("no-store"));
    assert!(last.cookie.is_none());
}

#[then(expr = "the greeting message should be {string}")]
fn greeting_message_is(world: &mut GreeterWorld, expected: String) {
    match world.outcome.as_ref().expect("no outcome") {
        Outcome::Success { greeting } => assert_eq!(greeting.message, expected),
        other => panic!("expected a greeting, got {other:?}"),
    }
}
