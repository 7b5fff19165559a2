//! Local Storage Persistence
//!
//! Reads and writes the list collection and the onboarding flag as JSON
//! under fixed `localStorage` keys.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::{INSTRUCTIONS_STORAGE_KEY, LISTS_STORAGE_KEY};
use crate::models::ShoppingList;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to read `{key}`: {message}")]
    Read { key: String, message: String },
    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },
    #[error("malformed value: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

// ========================
// Codec
// ========================

pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(StorageError::Encode)
}

/// Decode a stored value; an absent slot yields `None`.
pub fn decode<T: DeserializeOwned>(raw: Option<&str>) -> Result<Option<T>> {
    raw.map(|raw| serde_json::from_str(raw).map_err(StorageError::Decode))
        .transpose()
}

// ========================
// Browser access
// ========================

fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .ok()
        .flatten()
        .ok_or(StorageError::Unavailable)
}

fn js_message(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn read_raw(key: &str) -> Result<Option<String>> {
    local_storage()?.get_item(key).map_err(|e| StorageError::Read {
        key: key.to_string(),
        message: js_message(e),
    })
}

fn write_raw(key: &str, value: &str) -> Result<()> {
    local_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
        key: key.to_string(),
        message: js_message(e),
    })
}

fn load<T: DeserializeOwned>(key: &str) -> Result<Option<T>> {
    decode(read_raw(key)?.as_deref())
}

fn save<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<()> {
    write_raw(key, &encode(value)?)
}

// ========================
// Typed slots
// ========================

pub fn load_lists() -> Result<Vec<ShoppingList>> {
    Ok(load(LISTS_STORAGE_KEY)?.unwrap_or_default())
}

pub fn save_lists(lists: &[ShoppingList]) -> Result<()> {
    save(LISTS_STORAGE_KEY, lists)
}

pub fn load_show_instructions() -> Result<bool> {
    Ok(load(INSTRUCTIONS_STORAGE_KEY)?.unwrap_or(true))
}

pub fn save_show_instructions(show: bool) -> Result<()> {
    save(INSTRUCTIONS_STORAGE_KEY, &show)
}

/// Load the collection, falling back to an empty one on any error.
pub fn load_lists_or_default() -> Vec<ShoppingList> {
    load_lists().unwrap_or_else(|e| {
        log::warn!("[STORAGE] {}; starting with no lists", e);
        Vec::new()
    })
}

/// Load the onboarding flag, falling back to showing the instructions.
pub fn load_show_instructions_or_default() -> bool {
    load_show_instructions().unwrap_or_else(|e| {
        log::warn!("[STORAGE] {}; showing instructions", e);
        true
    })
}
