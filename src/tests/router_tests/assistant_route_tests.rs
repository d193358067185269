// src/tests/router_tests/assistant_route_tests.rs

use super::{body_string, get, make_state};
use crate::assistant::{FALLBACK_REPLY, NO_PROPERTIES_CONTEXT};
use crate::router::handle;
use crate::tests::mocks::{MockCompletionProvider, MockPredictor};
use crate::tests::utils::{encode, predicted, test_options};
use std::sync::Arc;

#[test]
fn question_without_comparison_sends_marker_context() {
    let provider = Arc::new(MockCompletionProvider::answering("Please pick two properties first."));
    let (_rt, state) = make_state(Arc::new(MockPredictor::new()), provider.clone());

    let resp = handle(get(&format!("/assistant?q={}", encode("Which is better?")), true), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains(NO_PROPERTIES_CONTEXT));

    let body = body_string(resp);
    assert!(body.contains("Which is better?"));
    assert!(body.contains("Please pick two properties first."));
}

#[test]
fn question_after_compare_uses_displayed_pair() {
    let provider = Arc::new(MockCompletionProvider::answering("The condo has an ocean view."));
    let (_rt, state) = make_state(
        Arc::new(MockPredictor::new().with_response(predicted(Some(1.0), Some(2.0)))),
        provider.clone(),
    );
    let options = test_options();

    handle(get(&format!("/select?slot=a&value={}", encode(&options[1].value)), true), &state).unwrap();
    handle(get(&format!("/select?slot=b&value={}", encode(&options[3].value)), true), &state).unwrap();
    handle(get("/compare", true), &state).unwrap();
    handle(get(&format!("/assistant?q={}", encode("Which has a view?")), true), &state).unwrap();

    let prompt = &provider.prompts()[0];
    assert!(prompt.contains("Austin, TX"));
    assert!(prompt.contains("Miami, FL"));
    assert!(!prompt.contains("Modern Loft"));
}

#[test]
fn provider_failure_renders_apology() {
    let (_rt, state) = make_state(
        Arc::new(MockPredictor::new()),
        Arc::new(MockCompletionProvider::failing()),
    );

    let resp = handle(get("/assistant?q=hello", true), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Please try again."));
    assert_eq!(state.assistant.transcript()[1].content, FALLBACK_REPLY);
}

#[test]
fn plain_question_redirects_home() {
    let (_rt, state) = make_state(
        Arc::new(MockPredictor::new()),
        Arc::new(MockCompletionProvider::answering("ok")),
    );

    let resp = handle(get("/assistant?q=hi", false), &state).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(state.assistant.transcript().len(), 2);
}
