//! Key/value persistence surface used by the punch core.
//!
//! Every blob is a string stored under a fixed key. Writes overwrite the whole
//! value, so repeating a write with the same in-memory state is always safe.

pub mod memory;

use crate::errors::AppResult;

pub const KEY_RECORDS: &str = "punch.records";
pub const KEY_SCHEDULE: &str = "punch.schedule";
pub const KEY_CHRONO_START: &str = "punch.chrono_start";

pub trait Store {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, blob: &str) -> AppResult<()>;

    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Append a line to the internal operation log, if the store keeps one.
    fn log_operation(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, blob: &str) -> AppResult<()> {
        (**self).set(key, blob)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }

    fn log_operation(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        (**self).log_operation(operation, target, message)
    }
}
