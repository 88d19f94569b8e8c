use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single persisted value.
///
/// `load` returns `Ok(None)` when nothing has been saved yet.
pub trait Store<T> {
    fn load(&self) -> Result<Option<T>, StoreError>;
    fn save(&self, value: &T) -> Result<(), StoreError>;
}

/// Stores a value as pretty JSON in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _value: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(dir: &Path, key: &str) -> Self {
        Self {
            path: dir.join(format!("{key}.json")),
            _value: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Serialize + DeserializeOwned> Store<T> for JsonFileStore<T> {
    fn load(&self) -> Result<Option<T>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn save(&self, value: &T) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Write then rename so a crash never leaves a truncated file behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("[Store] saved {}", self.path.display());
        Ok(())
    }
}

/// In-process store keyed like the file store. Clones share their contents.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    key: String,
    data: Rc<RefCell<HashMap<String, String>>>,
    _value: PhantomData<fn() -> T>,
}

impl<T> MemoryStore<T> {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            data: Rc::default(),
            _value: PhantomData,
        }
    }

    /// Raw JSON saved under this store's key, if any.
    pub fn raw(&self) -> Option<String> {
        self.data.borrow().get(&self.key).cloned()
    }

    #[cfg(test)]
    pub fn set_raw(&self, json: &str) {
        self.data
            .borrow_mut()
            .insert(self.key.clone(), json.to_string());
    }
}

impl<T: Serialize + DeserializeOwned> Store<T> for MemoryStore<T> {
    fn load(&self) -> Result<Option<T>, StoreError> {
        match self.raw() {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        self.data.borrow_mut().insert(self.key.clone(), json);
        Ok(())
    }
}

impl<T, S: Store<T> + ?Sized> Store<T> for Box<S> {
    fn load(&self) -> Result<Option<T>, StoreError> {
        (**self).load()
    }

    fn save(&self, value: &T) -> Result<(), StoreError> {
        (**self).save(value)
    }
}
