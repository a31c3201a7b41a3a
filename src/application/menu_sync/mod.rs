//! Menu synchronization
//!
//! Mirrors the page tree into a navigation menu.

mod fields;
mod result;
mod use_case;


pub use fields::{menu_fields, CUSTOM_LINK, ENTRY_STATUS};
pub use result::MenuSyncResult;
pub use use_case::MenuSyncUseCase;
