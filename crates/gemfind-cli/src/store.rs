//! File-backed key-value store and the commands that use it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

use gemfind_core::{waitlist, AppConfig, KvStore};

/// JSON-file-backed [`KvStore`]: one flat string→string object, rewritten
/// on every `set`. The store holds a handful of small flags, so a full
/// rewrite per write keeps the format trivially inspectable.
pub(crate) struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, starting empty when the file does not
    /// exist. A corrupt file is logged and treated as empty rather than
    /// blocking every command that needs a flag.
    pub(crate) fn open(path: &Path) -> anyhow::Result<Self> {
        let entries = if path.exists() {
            let raw = fs::read_to_string(path)?;
            match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "corrupt store file, starting empty");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries: Mutex::new(entries),
        })
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .map(|entries| entries.get(key).cloned())
            .unwrap_or(None)
    }

    fn set(&self, key: &str, value: &str) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        entries.insert(key.to_string(), value.to_string());

        match serde_json::to_string_pretty(&*entries) {
            Ok(encoded) => {
                if let Err(err) = fs::write(&self.path, encoded) {
                    tracing::warn!(path = %self.path.display(), error = %err, "store write failed");
                }
            }
            Err(err) => tracing::warn!(error = %err, "store encode failed"),
        }
    }
}

/// Join the waitlist: validate the email locally, then persist the flag.
pub(crate) fn run_join(config: &AppConfig, email: &str) -> anyhow::Result<()> {
    waitlist::validate_email(email)?;

    let store = FileStore::open(&config.store_path)?;
    if waitlist::has_joined(&store) {
        println!("already on the list");
        return Ok(());
    }
    waitlist::mark_joined(&store);
    println!("you're on the list");
    Ok(())
}

/// Add a venue id to the saved set.
pub(crate) fn run_save(config: &AppConfig, id: &str) -> anyhow::Result<()> {
    let store = FileStore::open(&config.store_path)?;
    if waitlist::is_saved(&store, id) {
        println!("{id} already saved");
        return Ok(());
    }
    waitlist::save_id(&store, id);
    println!("{id} saved");
    Ok(())
}

/// List saved venue ids.
pub(crate) fn run_saved(config: &AppConfig) -> anyhow::Result<()> {
    let store = FileStore::open(&config.store_path)?;
    let ids = waitlist::saved_ids(&store);
    if ids.is_empty() {
        println!("nothing saved yet");
        return Ok(());
    }
    for id in ids {
        println!("{id}");
    }
    Ok(())
}
