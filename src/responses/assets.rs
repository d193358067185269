use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use mime::Mime;

pub const STATIC_PREFIX: &str = "/static/";

const MAIN_CSS: &[u8] = include_bytes!("../../static/main.css");
const FAVICON_SVG: &[u8] = include_bytes!("../../static/favicon.svg");

// Only these names are served; anything else under /static/ is a 404.
fn lookup(name: &str) -> Option<(&'static [u8], Mime)> {
    match name {
        "main.css" => Some((MAIN_CSS, mime::TEXT_CSS_UTF_8)),
        "favicon.svg" => Some((FAVICON_SVG, mime::IMAGE_SVG)),
        _ => None,
    }
}

/// Serves a file compiled into the binary, by its name under `/static/`.
pub fn static_asset_response(name: &str) -> ResultResp {
    let (bytes, content_type) = lookup(name).ok_or(ServerError::NotFound)?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}
