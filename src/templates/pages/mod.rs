pub mod compare;
pub mod error;

pub use compare::compare_page;
pub use error::error_page;
