//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON) and menu diffs
//! - Log subscriber setup
//!
//! ## Structure
//!
//! - `factory` - Creates use cases from a loaded site and config
//! - `output` - Output rendering
//! - `logging` - `tracing` subscriber for the binary

pub mod factory;
pub mod logging;
pub mod output;

pub use factory::{create_listing_use_case, create_menu_sync_use_case};
pub use output::{menu_diff, OutputFormat};
