//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain values.

mod escaping;
mod nesting;
mod sanitize;

pub use escaping::{escape_html, sanitize_html_class};
pub use nesting::{nesting_from_depth, MaxDepth, Unlimited};
pub use sanitize::{sanitize_text_field, sanitize_url, ALLOWED_PROTOCOLS};
