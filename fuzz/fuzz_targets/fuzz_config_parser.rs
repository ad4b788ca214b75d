//! Fuzz target for `safezone.toml` parsing and resolution.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(cfg) = safezone_settings::parse_config_toml(text) {
            // A resolved threshold is always finite and non-negative.
            if let Ok(resolved) =
                safezone_settings::resolve_config(cfg, safezone_settings::Overrides::default())
            {
                let m = resolved.effective.threshold.meters();
                assert!(m.is_finite() && m >= 0.0);
            }
        }
    }
});
