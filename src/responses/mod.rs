pub mod assets;
pub mod errors;
pub mod html;

pub use assets::{static_asset_response, STATIC_PREFIX};
pub use errors::{error_to_response, ResultResp};
pub use html::{html_response, redirect_response, text_response};
