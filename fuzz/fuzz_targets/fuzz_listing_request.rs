#![no_main]

use libfuzzer_sys::fuzz_target;
use nestedpages::application::ListingRequest;

// Query string shaped input: key=value pairs separated by '&'
fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let params = content
            .split('&')
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")));
        let request = ListingRequest::from_params(params);
        let _ = request.to_query(vec!["page".to_string()]);
    }
});
