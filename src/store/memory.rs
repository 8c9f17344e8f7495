use super::Store;
use crate::errors::{AppError, AppResult};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Inner {
    blobs: HashMap<String, String>,
    log: Vec<(String, String, String)>,
    read_only: bool,
}

/// In-memory store.
///
/// Clones share the same contents, which lets a caller keep a handle on the
/// data while a session owns the store (and reopen a session on it later).
/// Test double: the binary persists through the SQLite `DbPool`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, as a full or unavailable store would.
    /// Only used to exercise failure paths.
    pub fn set_read_only(&self, read_only: bool) {
        self.inner.borrow_mut().read_only = read_only;
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().blobs.get(key).cloned()
    }

    /// Operations recorded through `log_operation`, oldest first.
    pub fn operations(&self) -> Vec<(String, String, String)> {
        self.inner.borrow().log.clone()
    }

    fn check_writable(&self) -> AppResult<()> {
        if self.inner.borrow().read_only {
            return Err(AppError::Storage("memory store is read-only".into()));
        }
        Ok(())
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, blob: &str) -> AppResult<()> {
        self.check_writable()?;
        self.inner
            .borrow_mut()
            .blobs
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.check_writable()?;
        self.inner.borrow_mut().blobs.remove(key);
        Ok(())
    }

    fn log_operation(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.inner.borrow_mut().log.push((
            operation.to_string(),
            target.to_string(),
            message.to_string(),
        ));
        Ok(())
    }
}
