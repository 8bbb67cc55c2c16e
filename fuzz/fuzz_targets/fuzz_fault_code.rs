#![no_main]

use libfuzzer_sys::fuzz_target;
use vies_rest::ViesError;
use vies_rest::vies::map_fault;

fuzz_target!(|code: &str| {
    match map_fault(code, "") {
        ViesError::UnknownService { code: kept, .. } => assert_eq!(kept, code),
        known => assert!(known.fault_code().is_some()),
    }
});
