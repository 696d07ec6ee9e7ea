//! Session Persistence
//!
//! The only durable client state: the auth token and the role string.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::{ApiError, ApiResult};
use crate::models::Role;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "userRole";

/// String key/value storage seam
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> ApiResult<()>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        let storage = Self::storage().ok_or_else(|| ApiError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl TokenStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Token + role as last persisted
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub role: Role,
}

impl Session {
    pub fn new(token: impl Into<String>, role: Role) -> Self {
        Self { token: Some(token.into()), role }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn load(store: &impl TokenStore) -> Self {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let role = Role::parse(store.get(ROLE_KEY).as_deref());
        Self { token, role }
    }

    pub fn persist(&self, store: &impl TokenStore) -> ApiResult<()> {
        match &self.token {
            Some(token) => store.set(TOKEN_KEY, token)?,
            None => store.remove(TOKEN_KEY),
        }
        store.set(ROLE_KEY, self.role.as_str())
    }

    pub fn clear(store: &impl TokenStore) {
        store.remove(TOKEN_KEY);
        store.remove(ROLE_KEY);
    }
}

/// Token to attach to outgoing requests
pub fn stored_token() -> Option<String> {
    BrowserStorage.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_is_logged_out() {
        let store = MemoryStorage::default();
        let session = Session::load(&store);
        assert!(!session.is_logged_in());
        assert_eq!(session.role, Role::Public);
    }

    #[test]
    fn test_persist_and_load() {
        let store = MemoryStorage::default();
        Session::new("abc123", Role::Consultancy).persist(&store).unwrap();

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc123"));
        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("consultancy"));

        let loaded = Session::load(&store);
        assert!(loaded.is_logged_in());
        assert_eq!(loaded.role, Role::Consultancy);
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let store = MemoryStorage::default();
        Session::new("abc123", Role::Admin).persist(&store).unwrap();
        Session::clear(&store);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(ROLE_KEY), None);
        assert_eq!(Session::load(&store), Session::default());
    }

    #[test]
    fn test_blank_token_is_logged_out() {
        let store = MemoryStorage::default();
        store.set(TOKEN_KEY, "").unwrap();
        store.set(ROLE_KEY, "admin").unwrap();
        let loaded = Session::load(&store);
        assert!(!loaded.is_logged_in());
        assert_eq!(loaded.role, Role::Admin);
    }
}
