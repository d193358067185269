pub mod listing;
pub mod options;

pub use listing::{format_price, Listing, ListingPatch};
pub use options::{build_options, find_option, SelectionOption};
