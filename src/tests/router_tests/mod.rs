mod assistant_route_tests;
mod compare_route_tests;

use crate::app::AppState;
use crate::assistant::CompletionProvider;
use crate::prediction::PricePredictor;
use crate::tests::utils::test_options;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// The runtime must outlive the state that holds its handle.
pub fn make_state(
    predictor: Arc<dyn PricePredictor>,
    provider: Arc<dyn CompletionProvider>,
) -> (Runtime, AppState) {
    let runtime = Runtime::new().expect("Failed to build tokio runtime");
    let state = AppState::new(runtime.handle().clone(), test_options(), predictor, provider);
    (runtime, state)
}

pub fn get(uri: &str, htmx: bool) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    if htmx {
        req.headers_mut()
            .insert("hx-request", "true".parse().unwrap());
    }
    req
}

pub fn body_string(mut resp: Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
