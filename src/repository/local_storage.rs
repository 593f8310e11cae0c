//! Browser localStorage medium (wasm32 only)

use async_trait::async_trait;
use wasm_bindgen::JsValue;

use crate::domain::{DomainError, DomainResult};
use super::traits::Storage;

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> DomainResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| DomainError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))
    }
}

fn js_error(e: JsValue) -> DomainError {
    DomainError::Storage(format!("{:?}", e))
}

#[async_trait]
impl Storage for LocalStorage {
    async fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    async fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    async fn remove_item(&self, key: &str) -> DomainResult<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}
