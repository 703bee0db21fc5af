use crate::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// String key-value persistence, the shape of browser `localStorage`.
///
/// Reads never fail: a backend that cannot produce a value reports it as
/// absent. Writes report I/O failures.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;

    /// All stored keys, sorted
    fn keys(&self) -> Vec<String>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        items.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        items.keys().cloned().collect()
    }
}

/// A JSON object file holding every key, rewritten on each change.
///
/// A missing file starts empty. An unreadable or corrupt file also starts
/// empty (logged), and is replaced on the next write. A write that fails
/// leaves the in-memory values as they were.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = load_items(&path);
        Ok(Self {
            path,
            items: RwLock::new(items),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

fn load_items(path: &Path) -> BTreeMap<String, String> {
    if !path.exists() {
        return BTreeMap::new();
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "settings file unreadable, starting empty");
            return BTreeMap::new();
        }
    };

    serde_json::from_str(&contents).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %err, "settings file corrupt, starting empty");
        BTreeMap::new()
    })
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Option<String> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        items.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = items.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *items = next;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        if !items.contains_key(key) {
            return Ok(());
        }
        let mut next = items.clone();
        next.remove(key);
        self.persist(&next)?;
        *items = next;
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        items.keys().cloned().collect()
    }
}
