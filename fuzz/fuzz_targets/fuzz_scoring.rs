//! Fuzz target: score range and config parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use trustgate_core::{ActionSpeed, DeviceContext, ScoringConfig, Signals, TimeOfDay};

fuzz_target!(|data: &[u8]| {
    if data.len() < 7 {
        return;
    }
    let stress = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let signals = Signals::new(
        stress,
        ActionSpeed::ALL[usize::from(data[4]) % ActionSpeed::ALL.len()],
        DeviceContext::ALL[usize::from(data[5]) % DeviceContext::ALL.len()],
        TimeOfDay::ALL[usize::from(data[6]) % TimeOfDay::ALL.len()],
    );
    assert!(ScoringConfig::default().score(&signals).value() <= 100);

    // Any config that validates must still produce in-range scores.
    if let Ok(text) = std::str::from_utf8(&data[7..]) {
        if let Ok(config) = ScoringConfig::from_json_str(text) {
            assert!(config.score(&signals).value() <= 100);
        }
    }
});
