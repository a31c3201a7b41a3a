//! Page listing
//!
//! Renders the admin listing as nested `<ol>`/`<li>` markup.

mod model;
mod options;
mod render;
mod request;
mod row;
mod use_case;


pub use model::{LevelKind, ListItem, ListLevel, Listing};
pub use options::ListingOptions;
pub use render::ListingRenderer;
pub use request::{ListingRequest, CATEGORY_TAXONOMY};
pub use row::{DefaultRowTemplate, RowTemplate, UNTITLED};
pub use use_case::ListingUseCase;
