//! Чтение и запись JSON в localStorage

use serde::de::DeserializeOwned;
use serde::Serialize;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Значение по ключу; `None`, если записи нет или она не читается
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = storage()?.get_item(key).ok().flatten()?;
    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("localStorage[{}]: {}", key, e);
            None
        }
    }
}

pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = storage().ok_or_else(|| "localStorage is not available".to_string())?;
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    storage
        .set_item(key, &raw)
        .map_err(|e| format!("{:?}", e))
}
