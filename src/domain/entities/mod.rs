//! Domain Entities
//!
//! - `PostRecord` - A raw host record
//! - `Node` - The normalized record both tree walks operate on
//! - `Taxonomy` - Classification used for row decoration
//! - `MenuEntry` - An item of the generated navigation menu

mod menu_entry;
mod node;
mod post_record;
mod taxonomy;

pub use menu_entry::{MenuEntry, MenuEntryFields};
pub use node::{NavSettings, Node};
pub use post_record::PostRecord;
pub use taxonomy::{Taxonomy, TaxonomyKind, TermSet};
