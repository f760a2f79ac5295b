use anyhow::{anyhow, Context, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsValue;

/// String key-value medium the budget is mirrored into.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

fn js_error(action: &'static str) -> impl Fn(JsValue) -> anyhow::Error {
    move |err| anyhow!("{}: {:?}", action, err)
}

pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self> {
        let window = web_sys::window().context("no global window")?;
        let storage = window
            .local_storage()
            .map_err(js_error("local storage access denied"))?
            .context("local storage is disabled")?;
        Ok(BrowserStorage { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(js_error("failed to read local storage"))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(js_error("failed to write local storage"))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(js_error("failed to remove local storage item"))
    }
}

/// Session-only store. Used when the browser refuses local storage.
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser local storage when available, otherwise an in-memory fallback.
pub fn open_default() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::local() {
        Ok(storage) => Rc::new(storage),
        Err(err) => {
            log::warn!("{:#}; changes will not survive a reload", err);
            Rc::new(MemoryStorage::new())
        }
    }
}
