//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use crate::application::{ListingUseCase, MenuSyncUseCase};
use crate::config::Config;
use crate::error::NestedPagesResult;
use crate::infrastructure::{InMemoryContent, InMemoryMenu};

/// Listing use case over a loaded site
pub type SiteListingUseCase<'a> =
    ListingUseCase<&'a InMemoryContent, &'a InMemoryContent, &'a InMemoryContent>;

/// Menu sync use case over a loaded site
pub type SiteMenuSyncUseCase<'a> = MenuSyncUseCase<&'a InMemoryContent, &'a mut InMemoryMenu>;

/// Create a listing use case for `post_type`, configured by `config`
pub fn create_listing_use_case<'a>(
    content: &'a InMemoryContent,
    config: &Config,
    post_type: &str,
) -> NestedPagesResult<SiteListingUseCase<'a>> {
    let use_case = ListingUseCase::new(config.listing_options(post_type), content, content, content)?;
    Ok(use_case.with_boxed_nesting(config.listing_nesting()))
}

/// Create a menu sync use case writing into `menu`
pub fn create_menu_sync_use_case<'a>(
    content: &'a InMemoryContent,
    menu: &'a mut InMemoryMenu,
    config: &Config,
) -> SiteMenuSyncUseCase<'a> {
    MenuSyncUseCase::new(content, menu).with_boxed_nesting(config.menu_nesting())
}
