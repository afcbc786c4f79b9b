use thiserror::Error;
use web_sys::Storage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("No window object")]
    NoWindow,
    #[error("{0} is unavailable")]
    Unavailable(&'static str),
}

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<web_sys::Window, StorageError> {
    web_sys::window().ok_or(StorageError::NoWindow)
}

#[cfg(target_arch = "wasm32")]
pub fn session_storage() -> Result<Storage, StorageError> {
    window()?
        .session_storage()
        .map_err(|_| StorageError::Unavailable("sessionStorage"))?
        .ok_or(StorageError::Unavailable("sessionStorage"))
}

/// Host builds (tests, server rendering) have no browser storage.
#[cfg(not(target_arch = "wasm32"))]
pub fn session_storage() -> Result<Storage, StorageError> {
    Err(StorageError::Unavailable("sessionStorage"))
}
