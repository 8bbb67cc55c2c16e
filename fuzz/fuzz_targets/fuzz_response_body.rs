#![no_main]

use libfuzzer_sys::fuzz_target;
use vies_rest::VatNumber;
use vies_rest::vies::{ResponseData, build_result, fault_error, is_fault};

fuzz_target!(|data: &[u8]| {
    // Must not panic — errors are fine, panics are bugs.
    let response = ResponseData::from_bytes(data);
    if is_fault(&response) {
        let _ = fault_error(&response);
    } else {
        let _ = build_result(&response, &VatNumber::new("DE", "123456789"));
    }
});
