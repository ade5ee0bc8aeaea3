//! Fuzz target for package list parsing.
//!
//! Goal: parsing never panics, and every parsed name is non-empty and free of
//! `=` and whitespace.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_package_list
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let list = apklock_domain::parse_package_list(&text);
    for spec in &list.specs {
        let name = spec.as_str();
        assert!(!name.is_empty());
        assert!(!name.contains('='));
        assert!(!name.chars().any(char::is_whitespace));
    }
});
