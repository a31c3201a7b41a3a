//! Golden tests for nestedpages
//!
//! The reference site in `common::fixtures` must render and sync to
//! exactly the output recorded here.
//!
//! Run with: cargo test --test golden

mod common;

#[path = "golden/listing.rs"]
mod listing;

#[path = "golden/menu.rs"]
mod menu;
