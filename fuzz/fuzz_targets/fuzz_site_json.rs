#![no_main]

use libfuzzer_sys::fuzz_target;
use nestedpages::application::{ListingOptions, ListingRequest, ListingUseCase, MenuSyncUseCase};
use nestedpages::InMemorySite;

// Any snapshot that parses must render and sync without panicking
fuzz_target!(|data: &[u8]| {
    let Ok(mut site) = serde_json::from_slice::<InMemorySite>(data) else {
        return;
    };

    if let Ok(listing) = ListingUseCase::new(
        ListingOptions::default(),
        &site.content,
        &site.content,
        &site.content,
    ) {
        let _ = listing.render(&ListingRequest::new()).to_html();
    }
    let _ = MenuSyncUseCase::new(&site.content, &mut site.menu).sync();
});
