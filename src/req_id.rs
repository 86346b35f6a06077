//! Cache-buster identifiers for capture and stream URLs.

/// Opaque token appended to `/capture` and `/stream` URLs solely to defeat
/// browser response caching: 12 hex digits of the current Unix-millisecond
/// timestamp followed by 8 hex digits of a random integer in [0, 10^8).
///
/// Collision-resistant enough for its purpose, nothing more; not
/// cryptographically secure.
pub fn request_id() -> String {
    format!("{:012x}{:08x}", now_millis(), random_component())
}

fn random_component() -> u32 {
    let mut buf = [0u8; 4];
    match getrandom::fill(&mut buf) {
        Ok(()) => u32::from_le_bytes(buf) % 100_000_000,
        // timestamp component still differs between calls
        Err(_) => 0,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}
