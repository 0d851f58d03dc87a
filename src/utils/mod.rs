//! Utility functions and helpers.

pub mod http;
pub mod text;

pub use http::{HttpPageSource, PageSource, create_client};
pub use text::{normalize_name, title_case};
