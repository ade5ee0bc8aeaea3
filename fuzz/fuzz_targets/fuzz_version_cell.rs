//! Fuzz target for catalog page scraping.
//!
//! Goal: version extraction never panics on arbitrary markup.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_version_cell
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);
    let _ = apklock_domain::extract_version_cell(&html);
});
