//! Platform-specific pieces: diagnostic storage and timers.

use std::time::Duration;

/// Storage for local diagnostic markers.
///
/// - **Web** (WASM + `web` feature): browser `localStorage`
/// - **Elsewhere**: a throwaway in-memory map
pub fn make_storage() -> impl middleware::KeyValueStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        middleware::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        middleware::MemoryStorage::new()
    }
}

pub(crate) async fn sleep(ms: u32) {
    let duration = Duration::from_millis(u64::from(ms));
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
