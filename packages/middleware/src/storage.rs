//! Key/value storage seam for the local diagnostic markers.
//!
//! Implementations live in sibling modules ([`crate::memory`] and, on the web,
//! `crate::local`). Like browser `localStorage`, the interface is synchronous and
//! infallible: a store that cannot be written simply drops the value.

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
}

/// Milliseconds since the Unix epoch.
#[cfg(target_arch = "wasm32")]
pub fn current_timestamp() -> u64 {
    js_sys::Date::now() as u64
}

/// Milliseconds since the Unix epoch.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
