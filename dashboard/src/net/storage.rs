//! `localStorage`-backed token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens outlive a page reload so bootstrap can restore the session. Outside
//! the browser (SSR, native tests) there is no storage: reads return `None` and
//! writes are dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use souksync::TokenStore;
use souksync::token_store::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// Token store reading and writing the browser's `localStorage` on each call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn set_tokens(&self, access: &str, refresh: &str) {
        write_pair(write_item, access, refresh);
    }

    fn access_token(&self) -> Option<String> {
        read_item(ACCESS_TOKEN_KEY)
    }

    fn refresh_token(&self) -> Option<String> {
        read_item(REFRESH_TOKEN_KEY)
    }

    fn clear_tokens(&self) {
        write_item(ACCESS_TOKEN_KEY, None);
        write_item(REFRESH_TOKEN_KEY, None);
    }
}

fn read_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten().filter(|v| !v.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write both keys. If either write fails both are removed, so storage never
/// holds half a pair. Returns whether the pair was stored.
fn write_pair(mut write: impl FnMut(&str, Option<&str>) -> bool, access: &str, refresh: &str) -> bool {
    let stored = write(ACCESS_TOKEN_KEY, Some(access)) && write(REFRESH_TOKEN_KEY, Some(refresh));
    if !stored {
        write(ACCESS_TOKEN_KEY, None);
        write(REFRESH_TOKEN_KEY, None);
    }
    stored
}

/// Set or remove one key. Failures are logged and reported as `false`.
fn write_item(key: &str, value: Option<&str>) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; token change for {key} not persisted");
            return false;
        };
        let written = match value {
            Some(v) => storage.set_item(key, v),
            None => storage.remove_item(key),
        };
        if let Err(e) = written {
            log::warn!("localStorage write for {key} failed: {e:?}");
            return false;
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        true
    }
}
