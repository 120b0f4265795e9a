use bingo_core::{BoardError, KeyValueStore};
use gloo::storage::{LocalStorage, Storage};

/// Browser local storage, scoped to the page origin.
#[derive(Debug, Default)]
pub(crate) struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> bingo_core::Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| BoardError::Storage(format!("{:?}", err)))
    }

    fn delete(&mut self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}
