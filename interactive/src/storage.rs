use gossip_shared::SessionStore;
use web_sys::{window, Storage};

/// Session storage backed by the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

impl SessionStore for LocalStore {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("unable to store {key}: {err:?}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
