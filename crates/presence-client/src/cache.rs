use std::cell::RefCell;
use std::collections::HashMap;

/// Key under which the last resolved events contract id is kept.
pub const EVENT_CONTRACT_KEY: &str = "presence.event_contract";

/// Small persistent key/value store, typically backed by browser or disk
/// storage on the surface side.
pub trait ContractCache {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn invalidate(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryCache {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContractCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn invalidate(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}
