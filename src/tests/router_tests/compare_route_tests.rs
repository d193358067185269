// src/tests/router_tests/compare_route_tests.rs

use super::{body_string, get, make_state};
use crate::errors::ServerError;
use crate::prediction::PredictionError;
use crate::router::handle;
use crate::tests::mocks::{MockCompletionProvider, MockPredictor};
use crate::tests::utils::{encode, predicted, test_options};
use std::sync::Arc;

fn idle_state() -> (tokio::runtime::Runtime, crate::app::AppState) {
    make_state(
        Arc::new(MockPredictor::new()),
        Arc::new(MockCompletionProvider::answering("ok")),
    )
}

#[test]
fn home_page_lists_disambiguated_options() {
    let (_rt, state) = idle_state();

    let resp = handle(get("/", false), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("New York, NY 2"));
    assert!(body.contains("New York, NY__2"));
    assert!(body.contains("Pick two properties and press Compare."));
}

#[test]
fn unknown_route_is_not_found() {
    let (_rt, state) = idle_state();
    let err = handle(get("/nope", false), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn health_check() {
    let (_rt, state) = idle_state();
    let resp = handle(get("/health", false), &state).unwrap();
    assert_eq!(body_string(resp), "ok");
}

#[test]
fn select_requires_a_valid_slot() {
    let (_rt, state) = idle_state();

    let err = handle(get("/select?value=x", true), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = handle(get("/select?slot=c&value=x", true), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn plain_select_redirects_home() {
    let (_rt, state) = idle_state();
    let options = test_options();
    let value = &options[1].value;

    let resp = handle(get(&format!("/select?slot=a&value={}", encode(value)), false), &state).unwrap();

    assert_eq!(resp.status(), 303);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/");
    assert_eq!(
        state.orchestrator.snapshot().selection_a.map(|o| o.value),
        Some(value.clone())
    );
}

#[test]
fn htmx_select_returns_panel_with_encoded_value_decoded() {
    let (_rt, state) = idle_state();
    let options = test_options();

    handle(get(&format!("/select?slot=a&value={}", encode(&options[0].value)), true), &state).unwrap();
    let resp = handle(get(&format!("/select?slot=b&value={}", encode(&options[2].value)), true), &state).unwrap();

    let snap = state.orchestrator.snapshot();
    assert_eq!(snap.selection_a.unwrap().value, "New York, NY__1");
    assert_eq!(snap.selection_b.unwrap().value, "New York, NY__2");

    let body = body_string(resp);
    assert!(body.contains("id=\"selection-panel\""));
    assert!(!body.contains("disabled"));
}

#[test]
fn same_pick_shows_hint_and_disables_compare() {
    let (_rt, state) = idle_state();
    let value = encode(&test_options()[0].value);

    handle(get(&format!("/select?slot=a&value={value}"), true), &state).unwrap();
    let resp = handle(get(&format!("/select?slot=b&value={value}"), true), &state).unwrap();

    let body = body_string(resp);
    assert!(body.contains("Pick two different properties to compare."));
    assert!(body.contains("disabled"));
}

#[test]
fn compare_renders_both_cards() {
    let predictor = Arc::new(MockPredictor::new().with_response(predicted(Some(1_310_000.0), None)));
    let (_rt, state) = make_state(
        predictor.clone(),
        Arc::new(MockCompletionProvider::answering("ok")),
    );
    let options = test_options();

    handle(get(&format!("/select?slot=a&value={}", encode(&options[0].value)), true), &state).unwrap();
    handle(get(&format!("/select?slot=b&value={}", encode(&options[1].value)), true), &state).unwrap();
    let resp = handle(get("/compare", true), &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(predictor.call_count(), 1);

    let body = body_string(resp);
    assert!(body.contains("Modern Loft"));
    assert!(body.contains("Craftsman House"));
    assert!(body.contains("$1,310,000"));
    assert!(body.contains("Prediction unavailable"));
}

#[test]
fn failed_compare_keeps_cards_and_shows_notice() {
    let predictor = Arc::new(
        MockPredictor::new()
            .with_response(predicted(Some(1_000_000.0), Some(900_000.0)))
            .with_failure(PredictionError::Timeout),
    );
    let (_rt, state) = make_state(predictor, Arc::new(MockCompletionProvider::answering("ok")));
    let options = test_options();

    handle(get(&format!("/select?slot=a&value={}", encode(&options[0].value)), true), &state).unwrap();
    handle(get(&format!("/select?slot=b&value={}", encode(&options[1].value)), true), &state).unwrap();
    handle(get("/compare", true), &state).unwrap();
    let resp = handle(get("/compare", true), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Predicted prices are unavailable right now."));
    assert!(body.contains("Modern Loft"));
    assert!(body.contains("$900,000"));
}

#[test]
fn compare_without_pair_shows_placeholder() {
    let (_rt, state) = idle_state();

    let resp = handle(get("/compare", true), &state).unwrap();

    let body = body_string(resp);
    assert!(body.contains("Pick two properties and press Compare."));
}

#[test]
fn errors_render_as_html_pages() {
    use crate::responses::error_to_response;

    let resp = error_to_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    let body = body_string(resp);
    assert!(body.contains("Error 404"));

    let resp = error_to_response(ServerError::BadRequest("missing slot".into()));
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("missing slot"));
}

#[test]
fn page_assets_resolve() {
    let (_rt, state) = idle_state();

    let page = body_string(handle(get("/", false), &state).unwrap());
    assert!(page.contains(crate::templates::layouts::desktop::HTMX_SRC));
    assert!(page.contains("/static/main.css"));
    assert!(page.contains("/static/favicon.svg"));

    let resp = handle(get("/static/main.css", false), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".comparison"));

    let resp = handle(get("/static/favicon.svg", false), &state).unwrap();
    assert_eq!(resp.headers().get("content-type").unwrap(), "image/svg+xml");
}

#[test]
fn unlisted_static_paths_are_not_found() {
    let (_rt, state) = idle_state();

    for uri in ["/static/htmx.js", "/static/../Cargo.toml", "/static/img/a.jpg", "/static/"] {
        let err = handle(get(uri, false), &state).unwrap_err();
        assert!(matches!(err, ServerError::NotFound), "{uri}");
    }
}
