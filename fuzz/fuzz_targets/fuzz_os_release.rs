//! Fuzz target for release metadata inspection.
//!
//! Goal: key lookup and branch derivation never panic on arbitrary files.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_os_release
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = apklock_domain::lookup_key(text, "ID");
        let _ = apklock_domain::lookup_key(text, "VERSION_ID");

        // A derived branch must always survive normalization unchanged
        if let Ok(branch) = apklock_domain::release_branch(text, "alpine") {
            let again = apklock_domain::normalize_branch(branch.as_str());
            assert_eq!(again.ok().as_ref(), Some(&branch));
        }
    }
});
