use crate::app::AppState;
use crate::assistant::build_property_context;
use crate::compare::Slot;
use crate::errors::ServerError;
use crate::responses::{
    html_response, redirect_response, static_asset_response, text_response, ResultResp,
    STATIC_PREFIX,
};
use crate::templates::components::{assistant_panel, comparison_results, selection_panel};
use crate::templates::pages::compare_page;
use astra::Request;
use std::collections::HashMap;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let snapshot = state.orchestrator.snapshot();
            html_response(compare_page(
                &snapshot,
                state.orchestrator.options(),
                &state.assistant.transcript(),
            ))
        }
        ("GET", "/select") => {
            let params = parse_query(&req);
            let slot: Slot = params
                .get("slot")
                .ok_or_else(|| ServerError::BadRequest("missing slot".into()))?
                .parse()
                .map_err(ServerError::BadRequest)?;
            let value = params.get("value").map(String::as_str).filter(|v| !v.is_empty());

            state.orchestrator.select(slot, value);

            if !is_htmx(&req) {
                return redirect_response("/");
            }
            let snapshot = state.orchestrator.snapshot();
            html_response(selection_panel(&snapshot, state.orchestrator.options()))
        }
        ("GET", "/compare") => {
            state.runtime.block_on(state.orchestrator.compare());

            if !is_htmx(&req) {
                return redirect_response("/");
            }
            html_response(comparison_results(&state.orchestrator.snapshot()))
        }
        ("GET", "/assistant") => {
            let params = parse_query(&req);
            let question = params.get("q").map(String::as_str).unwrap_or("");
            let context = build_property_context(&state.orchestrator.snapshot());

            state
                .runtime
                .block_on(state.assistant.ask(question, &context));

            if !is_htmx(&req) {
                return redirect_response("/");
            }
            html_response(assistant_panel(&state.assistant.transcript()))
        }
        ("GET", "/health") => text_response("ok"),
        ("GET", p) if p.starts_with(STATIC_PREFIX) => {
            static_asset_response(&p[STATIC_PREFIX.len()..])
        }
        _ => Err(ServerError::NotFound),
    }
}

fn is_htmx(req: &Request) -> bool {
    req.headers().contains_key("hx-request")
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
