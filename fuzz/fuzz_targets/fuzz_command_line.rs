//! Fuzz target: console command parsing and dispatch.
//!
//! Arbitrary text fed through the console loop must never panic, and the
//! two modal prompts must never be open together afterwards.

#![no_main]

use libfuzzer_sys::fuzz_target;
use trustgate_console::Console;
use trustgate_core::SessionScope;

fuzz_target!(|data: &[u8]| {
    let Ok(script) = std::str::from_utf8(data) else {
        return;
    };

    let mut scope = SessionScope::new();
    scope.mount();
    let mut console = Console::new(scope);
    let mut sink = Vec::new();
    // Malformed lines are reported, not fatal.
    console.run(script.as_bytes(), &mut sink).expect("mounted console must not fail");

    let session = console.scope().session().expect("session stays mounted");
    assert!(!(session.show_access_modal() && session.show_explainability()));
});
